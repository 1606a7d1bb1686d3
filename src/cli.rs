use crate::command::Command;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pf2tw",
    version,
    about = "Convert PrimeFlex classes to Tailwind CSS classes in place"
)]
pub struct Cli {
    /// Print debug logs and the full error chain
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}
