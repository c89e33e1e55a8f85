use crate::config::ParserStrategy;
use crate::fetch::DEFAULT_TIMEOUT_SECS;
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

/// Where the package list comes from and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageListSource {
    pub config_path: String,
    pub base_dir: Option<String>,
    pub parser: ParserStrategy,
}

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        source: PackageListSource,
        timeout_secs: u64,
    },
    Clean {
        source: PackageListSource,
    },
    List {
        source: PackageListSource,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "docfetch",
    version,
    about = "Fetch documentation packages from a remote content API into local files"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, clap::Args)]
struct PackageListArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Sets the package list file",
        default_value = "packages.yaml"
    )]
    config: String,

    #[arg(
        short = 'b',
        long = "base-dir",
        value_name = "DIR",
        help = "Directory that output paths are relative to (default: the package list's directory)"
    )]
    base_dir: Option<String>,

    #[arg(
        long = "parser",
        value_name = "STRATEGY",
        help = "How to read the package list",
        value_enum,
        default_value_t = ParserStrategy::Auto
    )]
    parser: ParserStrategy,
}

impl From<PackageListArgs> for PackageListSource {
    fn from(args: PackageListArgs) -> Self {
        Self {
            config_path: args.config,
            base_dir: args.base_dir,
            parser: args.parser,
        }
    }
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Fetch every package in the package list
    Fetch {
        #[command(flatten)]
        package_list: PackageListArgs,

        #[arg(
            long = "timeout",
            value_name = "SECONDS",
            help = "Connect and read timeout for each request",
            default_value_t = DEFAULT_TIMEOUT_SECS
        )]
        timeout: u64,
    },

    /// Delete previously fetched output files and directories left empty
    Clean {
        #[command(flatten)]
        package_list: PackageListArgs,
    },

    /// Show the packages, their request URLs and output paths without fetching
    List {
        #[command(flatten)]
        package_list: PackageListArgs,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // stdout carries the progress lines; logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper_util=warn".parse().unwrap()),
        )
        .init();

    let command = match cli.command {
        CliCommand::Fetch {
            package_list,
            timeout,
        } => Command::Fetch {
            source: package_list.into(),
            timeout_secs: timeout,
        },
        CliCommand::Clean { package_list } => Command::Clean {
            source: package_list.into(),
        },
        CliCommand::List { package_list } => Command::List {
            source: package_list.into(),
        },
    };

    Args { command, log_level }
}
