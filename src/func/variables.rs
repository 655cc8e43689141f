use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::helper::error::{invalid_input, QmResult};

static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").unwrap());

/// Give a name to each position of a term
pub trait VariableNamer {
    fn name(&self, uid: usize) -> String;
}

/// Ordered list of variable names, the first name matches the most significant bit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableNames {
    names: Vec<String>,
}

impl VariableNames {
    /// Default names: A, B, C... and x0, x1, x2... for more than 26 variables
    pub fn with_count(count: usize) -> Self {
        let names = (0..count)
            .map(|uid| {
                if count <= 26 {
                    ((b'A' + uid as u8) as char).to_string()
                } else {
                    format!("x{}", uid)
                }
            })
            .collect();
        VariableNames { names }
    }

    /// Use the given names, which must be valid and distinct identifiers
    pub fn parse<S: AsRef<str>>(names: &[S]) -> QmResult<Self> {
        let mut seen = HashSet::new();
        let mut result = Vec::with_capacity(names.len());
        for name in names.iter().map(|n| n.as_ref().trim()) {
            if !RE_NAME.is_match(name) {
                return Err(invalid_input(format!("invalid variable name \"{}\"", name)));
            }
            if !seen.insert(name) {
                return Err(invalid_input(format!("duplicate variable name \"{}\"", name)));
            }
            result.push(String::from(name));
        }
        Ok(VariableNames { names: result })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn check_count(&self, count: usize) -> QmResult<()> {
        if self.names.len() != count {
            return Err(invalid_input(format!(
                "{} variable names for {} variables",
                self.names.len(),
                count
            )));
        }
        Ok(())
    }
}

impl VariableNamer for VariableNames {
    fn name(&self, uid: usize) -> String {
        match self.names.get(uid) {
            Some(name) => name.clone(),
            None => format!("_{}", uid),
        }
    }
}

impl fmt::Display for VariableNames {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}
