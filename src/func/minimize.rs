//! Two-level minimization: prime implicants, essential prime implicants and Petrick's method.

use log::{debug, info};

use crate::func::chart::CoverageChart;
use crate::func::cover::Cover;
use crate::func::function::{Function, MAX_SUPPORTED_VARIABLES};
use crate::func::petrick::petrick;
use crate::func::primes::prime_implicants;
use crate::func::term::Term;
use crate::helper::error::{invalid_input, QmError, QmResult};

/// Default limit on the number of variables
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// Settings of the minimization
#[derive(Clone, Debug)]
pub struct Minimizer {
    max_variables: usize,
    reject_constants: bool,
}

/// Intermediate and final results of a minimization
#[derive(Clone, Debug)]
pub struct Minimization {
    primes: Vec<Term>,
    essentials: Vec<Term>,
    residual: CoverageChart,
    covers: Vec<Cover>,
}

impl Default for Minimizer {
    fn default() -> Self {
        Minimizer {
            max_variables: DEFAULT_MAX_VARIABLES,
            reject_constants: false,
        }
    }
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject functions with more variables (bounded by MAX_SUPPORTED_VARIABLES)
    pub fn max_variables(mut self, max: usize) -> Self {
        self.max_variables = max.min(MAX_SUPPORTED_VARIABLES);
        self
    }

    /// Report constant functions as errors instead of returning a constant cover
    pub fn reject_constants(mut self, reject: bool) -> Self {
        self.reject_constants = reject;
        self
    }

    fn check_variables(&self, variables: usize) -> QmResult<()> {
        if variables > self.max_variables {
            return Err(invalid_input(format!(
                "{} variables exceed the configured limit of {}",
                variables, self.max_variables
            )));
        }
        Ok(())
    }

    /// Find all minimal sums of products for the given minterms and don't cares
    pub fn minimize(
        &self,
        variables: usize,
        minterms: &[usize],
        dont_cares: &[usize],
    ) -> QmResult<Vec<Cover>> {
        self.check_variables(variables)?;
        let function = Function::new(variables, minterms, dont_cares)?;
        Ok(self.analyse(&function)?.covers)
    }

    pub fn minimize_function(&self, function: &Function) -> QmResult<Vec<Cover>> {
        Ok(self.analyse(function)?.covers)
    }

    /// Compute only the prime implicants, within the same variable limit
    pub fn prime_implicants(&self, function: &Function) -> QmResult<Vec<Term>> {
        self.check_variables(function.variables())?;
        if function.is_empty() {
            return Ok(vec![]);
        }
        prime_implicants(&function.raw_terms()?)
    }

    /// Run all steps of the minimization and keep the intermediate results
    pub fn analyse(&self, function: &Function) -> QmResult<Minimization> {
        self.check_variables(function.variables())?;
        debug!("Minimizing {} over {} variables", function, function.variables());

        if function.is_empty() {
            if self.reject_constants {
                return Err(QmError::EmptyFunction);
            }
            return Ok(Minimization::constant(vec![]));
        }

        if function.is_tautology() {
            if self.reject_constants {
                return Err(QmError::TautologyFunction);
            }
            let full = Term::unrestricted(function.variables())?;
            return Ok(Minimization::constant(vec![full]));
        }

        let primes = prime_implicants(&function.raw_terms()?)?;
        let mut residual = CoverageChart::new(function.minterms(), &primes)?;
        let essentials = residual.extract_essentials();

        let mut combinations = petrick(&residual)?;
        if combinations.is_empty() {
            combinations.push(vec![]);
        }
        let mut covers: Vec<Cover> = combinations
            .into_iter()
            .map(|extra| Cover::new(essentials.iter().cloned().chain(extra).collect()))
            .collect();
        covers.sort();

        info!(
            "{} prime implicants, {} essential, {} minimal solutions",
            primes.len(),
            essentials.len(),
            covers.len()
        );

        Ok(Minimization {
            primes,
            essentials,
            residual,
            covers,
        })
    }
}

impl Minimization {
    fn constant(terms: Vec<Term>) -> Self {
        Minimization {
            primes: terms.clone(),
            essentials: terms.clone(),
            residual: CoverageChart::default(),
            covers: vec![Cover::new(terms)],
        }
    }

    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    pub fn essentials(&self) -> &[Term] {
        &self.essentials
    }

    /// Columns which are not satisfied by essential prime implicants
    pub fn residual(&self) -> &CoverageChart {
        &self.residual
    }

    pub fn covers(&self) -> &[Cover] {
        &self.covers
    }

    pub fn into_covers(self) -> Vec<Cover> {
        self.covers
    }
}

/// Find all minimal sums of products with the default settings
pub fn minimize(variables: usize, minterms: &[usize], dont_cares: &[usize]) -> QmResult<Vec<Cover>> {
    Minimizer::default().minimize(variables, minterms, dont_cares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::variables::VariableNames;
    use itertools::Itertools;

    fn rendered(covers: &[Cover], names: &[&str]) -> Vec<String> {
        let names = VariableNames::parse(names).unwrap();
        covers.iter().map(|c| c.render(&names, "")).collect()
    }

    /// Check coverage, essential necessity and tie consistency
    fn check_solutions(variables: usize, minterms: &[usize], dont_cares: &[usize]) -> Minimization {
        let f = Function::new(variables, minterms, dont_cares).unwrap();
        let result = Minimizer::default().analyse(&f).unwrap();
        assert!(!result.covers().is_empty());

        let first = &result.covers()[0];
        for cover in result.covers() {
            assert_eq!(cover.len(), first.len());
            assert_eq!(cover.literal_cost(), first.literal_cost());

            for m in minterms {
                assert!(cover.covers(*m), "minterm {} is not covered", m);
            }
            for t in cover.iter() {
                for m in t.minterms().iter() {
                    assert!(minterms.contains(&m) || dont_cares.contains(&m));
                }
            }
            for e in result.essentials() {
                assert!(cover.contains(e));
                let others = cover.iter().filter(|t| *t != e).collect_vec();
                assert!(minterms
                    .iter()
                    .any(|m| !others.iter().any(|t| t.covers(*m))));
            }
        }
        result
    }

    #[test]
    fn three_variables() {
        let result = check_solutions(3, &[1, 3, 5, 6, 7], &[]);
        assert_eq!(rendered(result.covers(), &["X", "Y", "Z"]), vec!["XY + Z"]);
        assert_eq!(result.covers()[0].literal_cost(), 3);
        assert!(result.residual().is_empty());
    }

    #[test]
    fn three_variables_variants() {
        let result = check_solutions(3, &[2, 3, 5, 6, 7], &[]);
        assert_eq!(rendered(result.covers(), &["X", "Y", "Z"]), vec!["XZ + Y"]);

        let result = check_solutions(3, &[0, 1, 2, 5, 6, 7], &[]);
        assert_eq!(
            rendered(result.covers(), &["X", "Y", "Z"]),
            vec!["X'Y' + XZ + YZ'", "X'Z' + XY + Y'Z"]
        );
        assert!(result.essentials().is_empty());
    }

    #[test]
    fn with_dont_cares() {
        let result = check_solutions(4, &[4, 8, 10, 11, 12, 15], &[9, 14]);
        assert_eq!(
            rendered(result.covers(), &["A", "B", "C", "D"]),
            vec!["AB' + AC + BC'D'", "AC + AD' + BC'D'"]
        );
        assert_eq!(result.primes().len(), 4);
        assert_eq!(result.essentials().len(), 2);
    }

    #[test]
    fn tautology() {
        let covers = minimize(2, &[0, 1, 2, 3], &[]).unwrap();
        assert_eq!(covers.len(), 1);
        assert_eq!(covers[0].len(), 1);
        assert!(covers[0][0].is_unrestricted());
        assert_eq!(rendered(&covers, &["X", "Y"]), vec!["1"]);

        let covers = minimize(2, &[0, 3], &[1, 2]).unwrap();
        assert_eq!(rendered(&covers, &["X", "Y"]), vec!["1"]);

        let strict = Minimizer::new().reject_constants(true);
        assert!(matches!(
            strict.minimize(2, &[0, 1, 2, 3], &[]),
            Err(QmError::TautologyFunction)
        ));
    }

    #[test]
    fn empty_function() {
        let covers = minimize(2, &[], &[]).unwrap();
        assert_eq!(covers.len(), 1);
        assert!(covers[0].is_empty());
        assert_eq!(rendered(&covers, &["X", "Y"]), vec!["0"]);

        let strict = Minimizer::new().reject_constants(true);
        assert!(matches!(strict.minimize(2, &[], &[3]), Err(QmError::EmptyFunction)));
    }

    #[test]
    fn primes_only() {
        let f = Function::new(3, &[1, 3, 5, 6, 7], &[]).unwrap();
        let primes = Minimizer::default().prime_implicants(&f).unwrap();
        assert_eq!(primes, Minimizer::default().analyse(&f).unwrap().primes());
        assert_eq!(primes.len(), 2);

        let f = Function::new(3, &[], &[1]).unwrap();
        assert!(Minimizer::default().prime_implicants(&f).unwrap().is_empty());
    }

    #[test]
    fn single_variable() {
        let covers = minimize(1, &[0], &[]).unwrap();
        assert_eq!(rendered(&covers, &["X"]), vec!["X'"]);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(minimize(2, &[1], &[1]), Err(QmError::InvalidInput(_))));
        assert!(matches!(minimize(0, &[], &[]), Err(QmError::InvalidInput(_))));
        assert!(matches!(minimize(2, &[4], &[]), Err(QmError::InvalidInput(_))));

        let small = Minimizer::new().max_variables(3);
        assert!(matches!(small.minimize(4, &[1], &[]), Err(QmError::InvalidInput(_))));
        assert!(small.minimize(3, &[1], &[]).is_ok());

        let wide = Function::new(4, &[1], &[]).unwrap();
        assert!(matches!(small.prime_implicants(&wide), Err(QmError::InvalidInput(_))));
        let wide = Function::new(DEFAULT_MAX_VARIABLES + 1, &[1], &[]).unwrap();
        assert!(matches!(
            Minimizer::default().prime_implicants(&wide),
            Err(QmError::InvalidInput(_))
        ));
    }

    #[test]
    fn larger_function() {
        // f = m(0,2,5,6,7,8,10,12,13,14,15)
        // B'D' and BD are essential, minterms 6, 12 and 14 leave four equivalent choices
        let result = check_solutions(4, &[0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15], &[]);
        assert_eq!(result.primes().len(), 6);
        assert_eq!(result.essentials().len(), 2);
        assert_eq!(result.residual().len(), 3);
        assert_eq!(result.covers().len(), 4);
        for cover in result.covers() {
            assert_eq!(cover.len(), 4);
            assert_eq!(cover.literal_cost(), 8);
        }
        assert_eq!(
            rendered(&result.covers()[..1], &["A", "B", "C", "D"]),
            vec!["AB + B'D' + BC + BD"]
        );
    }

    #[test]
    fn six_variables_with_cyclic_chart() {
        let minterms = [
            1, 2, 5, 7, 9, 11, 12, 13, 14, 16, 17, 20, 24, 26, 27, 29, 31, 32, 33, 34, 36, 38, 39,
            40, 43, 45, 47, 48, 50, 51, 52, 55, 61,
        ];
        let result = check_solutions(6, &minterms, &[]);
        assert!(!result.residual().is_empty());
        assert_eq!(result.covers().len(), 3);
    }
}
