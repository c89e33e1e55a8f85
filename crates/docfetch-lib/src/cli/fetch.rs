use crate::cli::FetchParams;
use crate::error::DocFetchError;
use crate::fetch::{HttpFetcher, ProcessSummary, fetch_all};
use crate::report::{ConsoleReporter, Reporter};

pub async fn run_fetch(params: FetchParams) -> Result<ProcessSummary, DocFetchError> {
    run_fetch_with_reporter(params, &mut ConsoleReporter::stdout()).await
}

pub async fn run_fetch_with_reporter<R>(
    params: FetchParams,
    reporter: &mut R,
) -> Result<ProcessSummary, DocFetchError>
where
    R: Reporter + ?Sized,
{
    let FetchParams {
        packages,
        base_dir,
        options,
    } = params;

    let fetcher = HttpFetcher::new(options)?;

    tracing::info!(
        "Fetching {} packages into {}",
        packages.len(),
        base_dir.display()
    );
    let summary = fetch_all(&packages, &base_dir, &fetcher, reporter).await;

    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} packages failed: {}",
            summary.failed,
            summary.total(),
            summary.failed_packages.join(", ")
        );
    }
    Ok(summary)
}
