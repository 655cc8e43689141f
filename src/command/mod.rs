//! Define commands for the Command Line Interface
//!
//! This module provides facilities to register a collection of commands, where each command,
//! defined in a private submodule, is a thin wrapper over core API features.
//!
//! The CLI enables to chain several commands, each can use and modify a global context, currently
//! limited to a shared function and its variable names. The global CLI will thus start by searching
//! command names in the full list of arguments. The arguments between two successive commands
//! define the arguments of the first command.
//!
//! # Example
//!
//! The following command:
//!
//! ```qmkit function -n X Y Z -m 1 3 5 6 7 primes minimize --separator ·```
//!
//! defines the following subcommands:
//! * **function** ```-n X Y Z -m 1 3 5 6 7```
//! * **primes**
//! * **minimize** ```--separator ·```

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::sync::Arc;

use crate::func::function::Function;
use crate::func::variables::VariableNames;
use crate::helper::error::{invalid_input, EmptyQmResult, QmError, QmResult};

// Use a macro to load all command modules and add them to the list of available commands
macro_rules! cmdmods {
    ( $( $x:ident ),* ) => {
        $( mod $x; )*
        /// Single-instance CommandManager created and filled at runtime
        static COMMANDS: Lazy<CommandManager> = Lazy::new(|| {
            CommandManager::default()
            $(  .register( Arc::new( $x::CLI{}))  )*
        });
    };
}

// Define all available commands
cmdmods!(help, function, primes, essentials, minimize);

pub fn help_cmd(context: &mut CommandContext) -> EmptyQmResult {
    match COMMANDS.get_command("help") {
        Some(cmd) => cmd.run(context, &[OsString::from("help")]),
        None => Err(invalid_input(String::from("unknown command \"help\""))),
    }
}

/// Split the list of CLI parameters into separate slices for each successive command.
///
/// Scan the list of parameters to search for known commands and will consider that
/// they denote the start of the next command.
pub struct SelectedArgs {
    all_args: Vec<OsString>,
    next_slice: usize,
}

/// Register and retrieve commands
#[derive(Default)]
pub struct CommandManager {
    services: HashMap<&'static str, Arc<dyn CLICommand>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl CommandManager {
    pub fn register(mut self, action: Arc<dyn CLICommand>) -> Self {
        let name = action.name();
        for alias in action.aliases().iter() {
            self.aliases.insert(*alias, name);
        }
        self.services.insert(name, action);
        self
    }

    fn unroll_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).unwrap_or(&name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(self.unroll_alias(name))
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<dyn CLICommand>> {
        self.services.get(self.unroll_alias(name)).map(Arc::clone)
    }

    pub fn print_commands(&self) {
        println!("Available commands");
        println!("==================");
        let mut names: Vec<&&str> = self.services.keys().collect();
        names.sort();
        for name in names {
            let cmd = &self.services[*name];
            println!("  {:20} {}", name, cmd.about());
            if !cmd.aliases().is_empty() {
                println!("  {:20}   aliases: {}", "", cmd.aliases().join(", "));
            }
        }
    }
}

/// The execution context to allow successive commands to share a function
#[derive(Default)]
pub struct CommandContext {
    function: Option<Function>,
    names: Option<VariableNames>,
}

impl CommandContext {
    pub fn get_function(&self) -> QmResult<&Function> {
        match &self.function {
            Some(f) => Ok(f),
            None => Err(QmError::MissingFunction()),
        }
    }

    /// Variable names of the current function, using default names if none were given
    pub fn get_names(&self) -> QmResult<VariableNames> {
        let function = self.get_function()?;
        match &self.names {
            Some(names) => Ok(names.clone()),
            None => Ok(VariableNames::with_count(function.variables())),
        }
    }

    pub fn set_function(&mut self, function: Function, names: Option<VariableNames>) {
        self.function = Some(function);
        self.names = names;
    }
}

/// API for individual commands
pub trait CLICommand: Sync + Send {
    fn name(&self) -> &'static str;

    fn about(&self) -> &'static str;

    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyQmResult;
}

impl SelectedArgs {
    pub fn new() -> Self {
        Self::from_args(env::args_os().collect())
    }

    /// Split a custom list of arguments, the first one being the name of the program
    pub fn from_args(all_args: Vec<OsString>) -> Self {
        SelectedArgs {
            all_args,
            next_slice: 1,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_slice < self.all_args.len()
    }

    pub fn parse_next(&mut self, context: &mut CommandContext) -> EmptyQmResult {
        self.run_next_command(context, &COMMANDS)
    }

    fn run_next_command(
        &mut self,
        context: &mut CommandContext,
        manager: &CommandManager,
    ) -> EmptyQmResult {
        let next_command = match self.all_args.get(self.next_slice) {
            None => return Err(invalid_input(String::from("no command left to run"))),
            Some(arg) => arg.to_string_lossy().into_owned(),
        };
        let cmd = match manager.get_command(&next_command) {
            None => {
                // Skip the unknown slice to avoid looping on it
                self.scan();
                return Err(invalid_input(format!("unknown command \"{}\"", next_command)));
            }
            Some(c) => c,
        };

        let next_args = self.scan();

        cmd.run(context, next_args)
    }

    pub fn scan(&mut self) -> &[OsString] {
        let start = self.next_slice;
        if start >= self.all_args.len() {
            return &[];
        }

        // Find the end of the next slice!
        let mut end = self.all_args.len();
        for i in start + 1..end {
            let cur = self.all_args[i].to_string_lossy();
            if COMMANDS.contains(&cur) {
                end = i;
                break;
            }
        }

        self.next_slice = end;
        &self.all_args[start..end]
    }
}

impl Default for SelectedArgs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> SelectedArgs {
        SelectedArgs::from_args(s.split_whitespace().map(OsString::from).collect())
    }

    #[test]
    fn split_commands() {
        let mut a = args("qmkit function -c 3 -m 1 3 pi min --separator .");
        assert_eq!(a.scan().len(), 6);
        assert_eq!(a.scan(), &[OsString::from("pi")]);
        assert_eq!(a.scan().len(), 3);
        assert!(!a.has_next());
        assert!(a.scan().is_empty());

        let mut a = args("qmkit");
        assert!(!a.has_next());
        assert!(a.scan().is_empty());
    }

    #[test]
    fn aliases() {
        assert!(COMMANDS.contains("minimize"));
        assert!(COMMANDS.contains("min"));
        assert!(COMMANDS.contains("pi"));
        assert!(!COMMANDS.contains("fixpoints"));
    }

    #[test]
    fn run_chain() {
        let mut a = args("qmkit function -n X Y Z -m 1 3 5 6 7 primes essentials minimize");
        let mut context = CommandContext::default();
        while a.has_next() {
            a.parse_next(&mut context).unwrap();
        }
        assert_eq!(context.get_function().unwrap().minterms().len(), 5);
        assert_eq!(context.get_names().unwrap().to_string(), "X Y Z");
    }

    #[test]
    fn missing_function_and_unknown_command() {
        let mut context = CommandContext::default();
        let mut a = args("qmkit minimize");
        assert!(matches!(a.parse_next(&mut context), Err(QmError::MissingFunction())));

        // The unknown command and its arguments are skipped before the next known command
        let mut a = args("qmkit frobnicate -x function -c 2 -m 1");
        assert!(a.has_next());
        assert!(matches!(a.parse_next(&mut context), Err(QmError::InvalidInput(_))));
        assert!(a.has_next());
        a.parse_next(&mut context).unwrap();
        assert!(!a.has_next());

        // Running past the last command is an error, not a panic
        assert!(matches!(a.parse_next(&mut context), Err(QmError::InvalidInput(_))));
    }
}
