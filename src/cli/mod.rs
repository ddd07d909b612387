pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, FakeArgs, ModuleArgs, OutputArgs,
    TestArgs,
};
pub use runner::{run, Runner};
