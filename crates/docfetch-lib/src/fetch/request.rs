use super::FetchError;
use url::Url;

/// Appends the `tokens` query parameter to `source`, joining with `&` when the source already
/// has a query string.
pub fn build_request_url(source: &str, tokens: &str) -> String {
    let separator = if source.contains('?') { '&' } else { '?' };
    format!("{source}{separator}tokens={tokens}")
}

pub fn parse_request_url(source: &str, tokens: &str) -> Result<Url, FetchError> {
    let url = build_request_url(source, tokens);
    Url::parse(&url).map_err(|source| FetchError::InvalidUrl { url, source })
}
