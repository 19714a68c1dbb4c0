mod check;
mod generate;
mod lookup;

use check::run_check;
use generate::run_generate;
use lookup::{run_bond, run_element};

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Generate(args) => run_generate(args, ctx),
        Command::Check(args) => run_check(args, ctx),
        Command::Element(args) => run_element(args),
        Command::Bond(args) => run_bond(args),
    }
}
