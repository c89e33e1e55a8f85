use std::path::{Component, Path, PathBuf};

/// Resolves `relative` beneath `base`.
///
/// Returns `None` for absolute paths and for paths that lexically escape `base`. Symlinks are
/// not followed.
pub fn resolve_within(base: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    let mut out = base.to_path_buf();
    let mut depth = 0usize;

    for component in relative.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return None,
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                out.pop();
                depth -= 1;
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }

    (depth > 0).then_some(out)
}
