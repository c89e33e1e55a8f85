use crate::clean::{CleanSummary, clean_outputs};
use crate::cli::CleanParams;
use crate::report::{ConsoleReporter, Reporter};

pub async fn run_clean(params: CleanParams) -> CleanSummary {
    run_clean_with_reporter(params, &mut ConsoleReporter::stdout()).await
}

pub async fn run_clean_with_reporter<R>(params: CleanParams, reporter: &mut R) -> CleanSummary
where
    R: Reporter + ?Sized,
{
    let CleanParams { packages, base_dir } = params;

    tracing::info!("Cleaning outputs in {}", base_dir.display());
    clean_outputs(&packages, &base_dir, reporter).await
}
