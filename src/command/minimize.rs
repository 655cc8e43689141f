use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::func::minimize::{Minimizer, DEFAULT_MAX_VARIABLES};
use crate::helper::error::EmptyQmResult;

static NAME: &str = "minimize";
static ABOUT: &str = "Find all minimal sums of products";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Separator between the literals of a product
    #[structopt(short, long, default_value = "")]
    separator: String,

    /// Reject constant functions
    #[structopt(long)]
    strict: bool,

    /// Reject functions with more variables
    #[structopt(long)]
    max_variables: Option<usize>,
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
        &["min", "sop"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmResult {
        let config: Config = Config::from_iter(args);

        let function = context.get_function()?;
        let names = context.get_names()?;
        let minimizer = Minimizer::new()
            .max_variables(config.max_variables.unwrap_or(DEFAULT_MAX_VARIABLES))
            .reject_constants(config.strict);

        let covers = minimizer.minimize_function(function)?;
        println!("Possible minimizations:");
        for cover in covers.iter() {
            println!("{}", cover.render(&names, &config.separator));
        }
        Ok(())
    }
}
