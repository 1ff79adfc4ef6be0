use super::ConstantsOperation;
use clap::Parser;

/// command line tool for inspecting transport modes and transfer waiting periods
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ConstantsApp {
    #[command(subcommand)]
    pub op: ConstantsOperation,
}
