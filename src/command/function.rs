use std::ffi::OsString;

use log::debug;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::func::function::Function;
use crate::func::variables::VariableNames;
use crate::helper::error::{invalid_input, EmptyQmResult};

static NAME: &str = "function";
static ABOUT: &str = "Define the function to minimize";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Names of the variables, the first one is the most significant bit
    #[structopt(short = "n", long = "variables")]
    names: Vec<String>,

    /// Number of variables, when no name is given
    #[structopt(short, long)]
    count: Option<usize>,

    /// Minterms (sigma notation)
    #[structopt(short, long, use_delimiter = true)]
    minterms: Vec<usize>,

    /// Maxterms (pi notation), all other terms are minterms
    #[structopt(short = "M", long, use_delimiter = true)]
    maxterms: Vec<usize>,

    /// Don't care terms
    #[structopt(short, long = "dont-cares", use_delimiter = true)]
    dont_cares: Vec<usize>,
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
        &["fn", "load"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmResult {
        let config: Config = Config::from_iter(args);

        let names = if config.names.is_empty() {
            None
        } else {
            Some(VariableNames::parse(&config.names)?)
        };

        let count = match (&names, config.count) {
            (Some(n), Some(c)) => {
                n.check_count(c)?;
                c
            }
            (Some(n), None) => n.len(),
            (None, Some(c)) => c,
            (None, None) => {
                return Err(invalid_input(String::from(
                    "give either the names or the number of variables",
                )))
            }
        };

        if !config.minterms.is_empty() && !config.maxterms.is_empty() {
            return Err(invalid_input(String::from(
                "minterms and maxterms can not be combined",
            )));
        }

        let function = if config.maxterms.is_empty() {
            Function::new(count, &config.minterms, &config.dont_cares)?
        } else {
            Function::from_maxterms(count, &config.maxterms, &config.dont_cares)?
        };
        debug!("Loaded function {}", function);

        context.set_function(function, names);
        Ok(())
    }
}
