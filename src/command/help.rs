use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext, COMMANDS};
use crate::helper::error::EmptyQmResult;

static NAME: &str = "help";
static ABOUT: &str = "List available commands";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn run(&self, _context: &mut CommandContext, args: &[OsString]) -> EmptyQmResult {
        let _config: Config = Config::from_iter(args);
        println!(
            "{} {}: {}\n",
            clap::crate_name!(),
            clap::crate_version!(),
            clap::crate_description!()
        );
        COMMANDS.print_commands();
        Ok(())
    }
}
