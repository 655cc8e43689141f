use std::fmt;
use std::ops::Deref;
use std::vec::Vec;

use crate::func::term::Term;
use crate::func::variables::VariableNamer;

/// A sum of products given as a sorted list of terms.
/// The empty list corresponds to the "false" function.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cover {
    terms: Vec<Term>,
}

// Use the deref trick to delegate some functions to the inner vector
impl Deref for Cover {
    type Target = Vec<Term>;
    fn deref(&self) -> &Vec<Term> {
        &self.terms
    }
}

impl Cover {
    pub fn new(mut terms: Vec<Term>) -> Cover {
        terms.sort();
        terms.dedup();
        Cover { terms }
    }

    /// Total number of literals
    pub fn literal_cost(&self) -> usize {
        self.terms.iter().map(|t| t.defined_weight()).sum()
    }

    /// Test if one of the terms covers the given minterm
    pub fn covers(&self, minterm: usize) -> bool {
        self.terms.iter().any(|t| t.covers(minterm))
    }

    /// Write this cover as an algebraic expression, using the given separator between
    /// the literals of a product.
    pub fn render(&self, namer: &dyn VariableNamer, separator: &str) -> String {
        if self.terms.is_empty() {
            return String::from("0");
        }
        let products: Vec<String> = self.terms.iter().map(|t| t.render(namer, separator)).collect();
        products.join(" + ")
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for t in &self.terms {
            writeln!(f, "{}", t)?;
        }
        write!(f, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::variables::VariableNames;

    #[test]
    fn test_cover() {
        let names = VariableNames::parse(&["X", "Y", "Z"]).unwrap();
        let cover = Cover::new(vec![
            Term::from_str("--1").unwrap(),
            Term::from_str("11-").unwrap(),
            Term::from_str("--1").unwrap(),
        ]);

        assert_eq!(cover.len(), 2);
        assert_eq!(cover.literal_cost(), 3);
        assert!(cover.covers(6));
        assert!(!cover.covers(4));
        assert_eq!(cover.render(&names, ""), "XY + Z");
        assert_eq!(cover.render(&names, "·"), "X·Y + Z");
        assert_eq!(cover.to_string(), "11-\n--1\n");
    }

    #[test]
    fn test_constants() {
        let names = VariableNames::with_count(2);
        assert_eq!(Cover::default().render(&names, ""), "0");
        let one = Cover::new(vec![Term::unrestricted(2).unwrap()]);
        assert_eq!(one.render(&names, ""), "1");
    }
}
