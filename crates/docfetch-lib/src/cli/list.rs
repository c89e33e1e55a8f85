use crate::cli::ListParams;
use crate::error::DocFetchError;
use crate::fetch::parse_request_url;
use std::io::Write;

pub fn run_list<W: Write>(params: ListParams, out: &mut W) -> Result<(), DocFetchError> {
    let ListParams { packages } = params;

    for package in &packages {
        if let Some(field) = package.missing_field() {
            writeln!(out, "  {}: invalid (missing {field})", package.name)?;
            continue;
        }
        match parse_request_url(&package.source, &package.tokens) {
            Ok(url) => writeln!(out, "  {}: {url} -> {}", package.name, package.output)?,
            Err(err) => writeln!(out, "  {}: invalid ({err})", package.name)?,
        }
    }

    out.flush()?;
    Ok(())
}
