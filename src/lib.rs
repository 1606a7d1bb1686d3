#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod options;
pub mod prompt;
pub mod rewrite;
pub mod tables;
pub mod validation;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use command::Command;
    use options::Dialect;
    use rewrite::NormalizationScope;

    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Pf2tw(args) => {
            command::translate::execute(args, Dialect::PrimeFlex3, NormalizationScope::Document)
        }
        Command::Pf22tw(args) => {
            command::translate::execute(&args.common, Dialect::PrimeFlex2, args.scope())
        }
    };

    if let Err(e) = &result {
        let mut source = std::error::Error::source(e);
        while let Some(cause) = source {
            log::debug!("Caused by: {}", cause);
            source = cause.source();
        }
    }

    result
}

/// `warn` by default, `debug` with `--verbose`; `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
