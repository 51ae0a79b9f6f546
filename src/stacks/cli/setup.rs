use clap::Parser;
use stacks::store::fs::DEFAULT_DATA_DIR;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stacks", bin_name = "stacks", version)]
#[command(about = "Interactive library catalog manager", long_about = None)]
pub struct Cli {
    /// Directory holding books.json, members.json, loans.json and config.json
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose output (diagnostics on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Never use colors
    #[arg(long)]
    pub no_color: bool,
}
