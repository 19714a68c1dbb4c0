use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ptgen",
    about = "Periodic table data module generator",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate Rust modules embedding the JSON datasets
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Verify that generated modules match the JSON datasets
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Show the properties of one element
    #[command(visible_alias = "e")]
    Element(ElementArgs),

    /// Show bond data for a pair of elements
    #[command(visible_alias = "b")]
    Bond(BondArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Generate(args) => args.quiet,
            Command::Check(args) => args.quiet,
            Command::Element(_) | Command::Bond(_) => true,
        }
    }
}

/// Source and destination directories shared by generate and check.
#[derive(Args)]
pub struct PathOptions {
    /// Directory containing the JSON datasets
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub source: PathBuf,

    /// Directory receiving the generated modules (must exist)
    #[arg(short, long, value_name = "DIR", default_value = "generated")]
    pub dest: PathBuf,
}

/// Where lookups read their data from.
#[derive(Args)]
pub struct DataOptions {
    /// Read datasets from this directory instead of the embedded copy
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub paths: PathOptions,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub paths: PathOptions,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ElementArgs {
    /// Element symbol (case-insensitive)
    #[arg(value_name = "SYMBOL")]
    pub symbol: String,

    #[command(flatten)]
    pub data: DataOptions,
}

#[derive(Args)]
pub struct BondArgs {
    /// First element symbol
    #[arg(value_name = "A")]
    pub first: String,

    /// Second element symbol
    #[arg(value_name = "B")]
    pub second: String,

    /// Restrict to one bond order
    #[arg(long, value_name = "N")]
    pub order: Option<u8>,

    /// Match the pair only in the given order
    #[arg(long)]
    pub exact: bool,

    #[command(flatten)]
    pub data: DataOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
