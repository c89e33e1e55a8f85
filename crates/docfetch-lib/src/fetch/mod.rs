mod fetcher;
mod orchestrator;
mod request;
mod types;

pub use fetcher::{DEFAULT_TIMEOUT_SECS, Fetch, FetchOptions, HttpFetcher};
pub use orchestrator::fetch_all;
pub use request::{build_request_url, parse_request_url};
pub use types::{FetchError, ProcessSummary};
