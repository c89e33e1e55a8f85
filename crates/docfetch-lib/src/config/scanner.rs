use super::{ConfigParser, PackageDescriptor};
use crate::error::DocFetchError;
use std::path::Path;

/// Tolerant line-oriented reader for package lists that no structured parser understands.
///
/// A `name` line opens a record, `source`/`url` and `tokens` lines fill it in, and an
/// `output`/`path` line closes and emits it. Fields that never appear stay empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanParser;

impl ConfigParser for LineScanParser {
    fn name(&self) -> &'static str {
        "line-scan"
    }

    fn parse(&self, path: &Path) -> Result<Vec<PackageDescriptor>, DocFetchError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocFetchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(scan_packages(&content))
    }
}

pub fn scan_packages(content: &str) -> Vec<PackageDescriptor> {
    let mut packages = Vec::new();
    let mut current = PackageDescriptor::default();

    for (line_number, line) in content.lines().enumerate() {
        let Some((key, value)) = split_assignment(line) else {
            continue;
        };

        match key {
            "name" => {
                if current != PackageDescriptor::default() {
                    tracing::debug!(
                        line = line_number + 1,
                        name = %current.name,
                        "Discarding entry without an output line"
                    );
                }
                current = PackageDescriptor {
                    name: value.to_string(),
                    ..Default::default()
                };
            }
            "source" | "url" => current.source = value.to_string(),
            "tokens" => current.tokens = value.to_string(),
            "output" | "path" => {
                current.output = value.to_string();
                tracing::trace!(line = line_number + 1, name = %current.name, "Scanned entry");
                packages.push(std::mem::take(&mut current));
            }
            _ => {}
        }
    }

    packages
}

/// Splits `key: value` or `key = value` into its trimmed, unquoted parts.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let line = line.strip_prefix("- ").unwrap_or(line).trim_start();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let separator = line.find([':', '='])?;
    let key = line[..separator].trim().trim_matches(|c: char| c == '"' || c == '\'');
    let value = unquote(line[separator + 1..].trim());
    Some((key, value))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote) {
            return match inner.find(quote) {
                Some(end) => &inner[..end],
                None => inner,
            };
        }
    }

    match value.find(" #") {
        Some(comment) => value[..comment].trim_end(),
        None => value,
    }
}
