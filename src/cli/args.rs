use crate::constants::{verbosity, AUTHOR_ENV};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for embody.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate `<NAME>.h` with exported declarations and an include guard.
    Header(ModuleArgs),
    /// Generate `<NAME>.c` with empty definitions.
    Source(ModuleArgs),
    /// Generate both `<NAME>.h` and `<NAME>.c`.
    Module(ModuleArgs),
    /// Generate a `<NAME>Test.cpp` unit-test skeleton.
    Test(TestArgs),
    /// Generate `Fake<HEADER>.c` with empty definitions for every declaration in HEADER.
    Fake(FakeArgs),
}

impl Commands {
    pub fn output(&self) -> &OutputArgs {
        match self {
            Commands::Header(args) | Commands::Source(args) | Commands::Module(args) => {
                &args.output
            }
            Commands::Test(args) => &args.module.output,
            Commands::Fake(args) => &args.output,
        }
    }
}

/// Where and how generated files are written.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output file; overrides --outdir. For `module` it names the header and the
    /// source sits next to it.
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Output directory.
    #[arg(short = 'd', long)]
    pub outdir: Option<PathBuf>,

    /// Overwrite existing files.
    #[arg(short, long)]
    pub force: bool,

    /// Print generated text to stdout instead of writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Module metadata; flags override values from `--descriptor`.
#[derive(Args, Debug, Clone, Default)]
pub struct ModuleArgs {
    /// Module name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// YAML or JSON module descriptor.
    #[arg(long, value_name = "FILE")]
    pub descriptor: Option<PathBuf>,

    /// Author credited in the file header.
    #[arg(short, long, env = AUTHOR_ENV)]
    pub author: Option<String>,

    /// Copyright year; defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Project the module belongs to.
    #[arg(short, long)]
    pub project: Option<String>,

    /// Copyright holder, when different from the author.
    #[arg(long)]
    pub copyright: Option<String>,

    /// Name for the `Written by` line.
    #[arg(long = "written-by")]
    pub written_by: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TestArgs {
    #[command(flatten)]
    pub module: ModuleArgs,

    /// Generate the sectioned skeleton including the descriptor's includes.
    #[arg(long)]
    pub full: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FakeArgs {
    /// Header whose declarations are faked.
    #[arg(value_name = "HEADER")]
    pub header: PathBuf,

    /// Include line of the fake; defaults to the header's file name.
    #[arg(short, long)]
    pub include: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
