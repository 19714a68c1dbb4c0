use std::io::{self, IsTerminal};

mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{print_artifacts, print_bonds, print_checks, print_element};

/// Whether progress, banner and summary tables are drawn on stderr.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    /// Interactive only when stderr is a terminal and `quiet` is off.
    pub fn for_terminal(quiet: bool) -> Self {
        Self {
            interactive: !quiet && io::stderr().is_terminal(),
        }
    }
}
