use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::func::minimize::Minimizer;
use crate::helper::error::EmptyQmResult;

static NAME: &str = "essentials";
static ABOUT: &str = "Show the essential prime implicants and the remaining coverage chart";

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

    fn aliases(&self) -> &[&'static str] {
        &["epi", "chart"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmResult {
        let _config: Config = Config::from_iter(args);

        let function = context.get_function()?;
        let names = context.get_names()?;
        let result = Minimizer::new().analyse(function)?;

        println!("EPI {}:", function);
        for e in result.essentials() {
            println!("  {}  {}", e, e.render(&names, ""));
        }
        if result.residual().is_empty() {
            println!("All minterms are covered by essential prime implicants");
        } else {
            println!("Remaining chart:");
            print!("{}", result.residual());
        }
        Ok(())
    }
}
