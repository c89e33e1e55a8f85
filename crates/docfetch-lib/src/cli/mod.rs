mod args;
mod clean;
mod fetch;
mod list;
mod params;
mod resolved_command;

pub use args::{Args, Command, PackageListSource, parse_args};
pub use clean::{run_clean, run_clean_with_reporter};
pub use fetch::{run_fetch, run_fetch_with_reporter};
pub use list::run_list;
pub use params::{CleanParams, FetchParams, ListParams};
pub use resolved_command::{ResolvedCommand, resolve_base_dir, resolve_command};
