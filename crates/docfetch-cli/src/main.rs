use docfetch_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_clean, run_fetch, run_list,
};
use docfetch_lib::error::DocFetchError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), DocFetchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => {
            run_fetch(params).await?;
        }
        ResolvedCommand::Clean(params) => {
            run_clean(params).await;
        }
        ResolvedCommand::List(params) => run_list(params, &mut std::io::stdout().lock())?,
    }

    Ok(())
}
