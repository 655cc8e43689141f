use std::fmt;

use bit_set::BitSet;

use crate::func::term::Term;
use crate::helper::error::{invalid_input, QmResult};

/// Largest number of variables accepted in any case
pub const MAX_SUPPORTED_VARIABLES: usize = 24;

/// An incompletely specified Boolean function, given by its minterms and don't care terms.
#[derive(Clone, Debug)]
pub struct Function {
    variables: usize,
    minterms: BitSet,
    dont_cares: BitSet,
}

impl Function {
    /// Create a function from the list of minterms and don't cares.
    ///
    /// Duplicated values are ignored, but values outside of [0, 2^variables)
    /// and values used both as minterm and don't care are rejected.
    pub fn new(variables: usize, minterms: &[usize], dont_cares: &[usize]) -> QmResult<Self> {
        let size = space_size(variables)?;
        let minterms = collect_values(size, "minterm", minterms)?;
        let dont_cares = collect_values(size, "don't care", dont_cares)?;

        let mut overlap = minterms.clone();
        overlap.intersect_with(&dont_cares);
        if let Some(m) = overlap.iter().next() {
            return Err(invalid_input(format!(
                "{} is both a minterm and a don't care",
                m
            )));
        }

        Ok(Function {
            variables,
            minterms,
            dont_cares,
        })
    }

    /// Create a function from the list of maxterms and don't cares.
    ///
    /// All other input combinations are minterms.
    pub fn from_maxterms(variables: usize, maxterms: &[usize], dont_cares: &[usize]) -> QmResult<Self> {
        let size = space_size(variables)?;
        let maxterms = collect_values(size, "maxterm", maxterms)?;
        let dont_cares_set = collect_values(size, "don't care", dont_cares)?;
        if let Some(m) = maxterms.intersection(&dont_cares_set).next() {
            return Err(invalid_input(format!(
                "{} is both a maxterm and a don't care",
                m
            )));
        }

        let minterms: Vec<usize> = (0..size)
            .filter(|m| !maxterms.contains(*m) && !dont_cares_set.contains(*m))
            .collect();
        Function::new(variables, &minterms, dont_cares)
    }

    pub fn variables(&self) -> usize {
        self.variables
    }

    pub fn minterms(&self) -> &BitSet {
        &self.minterms
    }

    pub fn dont_cares(&self) -> &BitSet {
        &self.dont_cares
    }

    /// No minterm: the function is the constant "0"
    pub fn is_empty(&self) -> bool {
        self.minterms.is_empty()
    }

    /// At least one minterm and no maxterm: the function is the constant "1"
    pub fn is_tautology(&self) -> bool {
        !self.minterms.is_empty()
            && self.minterms.len() + self.dont_cares.len() == 1 << self.variables
    }

    /// Order 0 terms for all minterms and don't cares
    pub fn raw_terms(&self) -> QmResult<Vec<Term>> {
        self.minterms
            .iter()
            .chain(self.dont_cares.iter())
            .map(|m| Term::from_minterm(self.variables, m))
            .collect()
    }
}

fn space_size(variables: usize) -> QmResult<usize> {
    if variables == 0 {
        return Err(invalid_input(String::from("at least one variable is needed")));
    }
    if variables > MAX_SUPPORTED_VARIABLES {
        return Err(invalid_input(format!(
            "{} variables exceed the limit of {}",
            variables, MAX_SUPPORTED_VARIABLES
        )));
    }
    Ok(1 << variables)
}

fn collect_values(size: usize, kind: &str, values: &[usize]) -> QmResult<BitSet> {
    let mut result = BitSet::with_capacity(size);
    for v in values {
        if *v >= size {
            return Err(invalid_input(format!(
                "{} {} is out of range [0, {})",
                kind, v, size
            )));
        }
        result.insert(*v);
    }
    Ok(result)
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let minterms: Vec<String> = self.minterms.iter().map(|m| m.to_string()).collect();
        write!(f, "m({})", minterms.join(","))?;
        if !self.dont_cares.is_empty() {
            let dont_cares: Vec<String> = self.dont_cares.iter().map(|m| m.to_string()).collect();
            write!(f, " + d({})", dont_cares.join(","))?;
        }
        write!(f, "")
    }
}
