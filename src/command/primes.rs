use std::ffi::OsString;

use itertools::Itertools;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::func::minimize::Minimizer;
use crate::helper::error::EmptyQmResult;

static NAME: &str = "primes";
static ABOUT: &str = "Compute the prime implicants of the function";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Show the covered minterms
    #[structopt(short, long)]
    verbose: bool,
}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn aliases(&self) -> &[&'static str] {
        &["pi", "implicants"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmResult {
        let config: Config = Config::from_iter(args);

        let function = context.get_function()?;
        let names = context.get_names()?;
        let primes = Minimizer::new().prime_implicants(function)?;

        println!("PI {}:", function);
        for p in primes.iter() {
            if config.verbose {
                println!("  {}  {:20} m({})", p, p.render(&names, ""), p.minterms().iter().join(","));
            } else {
                println!("  {}  {}", p, p.render(&names, ""));
            }
        }
        Ok(())
    }
}
