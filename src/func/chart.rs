use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use bit_set::BitSet;
use log::debug;

use crate::func::term::Term;
use crate::helper::error::{generic_error, QmResult};

/// Prime implicant chart: each column associates a minterm to the prime implicants covering it.
#[derive(Clone, Debug, Default)]
pub struct CoverageChart {
    columns: BTreeMap<usize, Vec<Term>>,
}

impl CoverageChart {
    /// Build the chart for the given minterms (don't cares excluded).
    ///
    /// Covering terms keep the order of the list of prime implicants.
    /// Every minterm must be covered by at least one of them.
    pub fn new(minterms: &BitSet, primes: &[Term]) -> QmResult<Self> {
        let mut columns = BTreeMap::new();
        for m in minterms.iter() {
            let column: Vec<Term> = primes.iter().filter(|p| p.covers(m)).cloned().collect();
            if column.is_empty() {
                return Err(generic_error(format!(
                    "minterm {} is not covered by any prime implicant",
                    m
                )));
            }
            columns.insert(m, column);
        }
        Ok(CoverageChart { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, minterm: usize) -> Option<&[Term]> {
        self.columns.get(&minterm).map(|c| c.as_slice())
    }

    pub fn columns(&self) -> impl Iterator<Item = (usize, &[Term])> {
        self.columns.iter().map(|(m, c)| (*m, c.as_slice()))
    }

    /// Extract the essential prime implicants and remove all the columns they satisfy.
    ///
    /// The remaining columns are covered by at least two terms, none of them essential.
    pub fn extract_essentials(&mut self) -> Vec<Term> {
        let essentials: BTreeSet<Term> = self
            .columns
            .values()
            .filter(|c| c.len() == 1)
            .map(|c| c[0].clone())
            .collect();

        let before = self.columns.len();
        self.columns
            .retain(|m, _| !essentials.iter().any(|e| e.covers(*m)));
        debug!(
            "{} essential prime implicants satisfy {} out of {} columns",
            essentials.len(),
            before - self.columns.len(),
            before
        );

        essentials.into_iter().collect()
    }
}

impl fmt::Display for CoverageChart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (m, column) in self.columns.iter() {
            write!(f, "{:>4}:", m)?;
            for t in column {
                write!(f, " {}", t)?;
            }
            writeln!(f)?;
        }
        write!(f, "")
    }
}
