//! Petrick's method: select the cheapest sets of prime implicants covering the columns
//! left in the chart after the extraction of essential prime implicants.

use itertools::Itertools;
use log::debug;

use crate::func::algebra::{Conjunction, Disjunction};
use crate::func::chart::CoverageChart;
use crate::func::term::Term;
use crate::helper::error::{generic_error, QmResult};

/// Find all minimal combinations of terms satisfying every column of the chart.
///
/// Combinations use as few terms as possible, and then as few literals as possible.
/// Each combination is sorted, the list of combinations too.
/// An empty chart needs no extra term and gives an empty list.
pub fn petrick(chart: &CoverageChart) -> QmResult<Vec<Vec<Term>>> {
    if chart.is_empty() {
        return Ok(vec![]);
    }

    // Each column must be satisfied by at least one of its terms
    let pos: Conjunction<Disjunction<Term>> = chart
        .columns()
        .map(|(_, column)| Disjunction::of_literals(column.iter().cloned()))
        .collect();
    debug!("Petrick: product of {} sums", pos.len());

    let sop = pos.product_to_minimal_sum()?;
    debug!("Petrick: {} products left after absorption", sop.len());

    let candidates = sop
        .into_products()
        .into_iter()
        .map(|p| p.into_elements().into_iter().collect_vec())
        .collect_vec();
    select_minimal(candidates)
}

/// Total number of literals in a combination of terms
pub fn literal_cost(terms: &[Term]) -> usize {
    terms.iter().map(|t| t.defined_weight()).sum()
}

/// Keep the candidates with the fewest terms, and among them the ones with the fewest literals.
pub fn select_minimal(candidates: Vec<Vec<Term>>) -> QmResult<Vec<Vec<Term>>> {
    let min_terms = match candidates.iter().map(|c| c.len()).min() {
        None => return Err(generic_error(String::from("no candidate cover to select from"))),
        Some(n) => n,
    };
    let shortest = candidates
        .into_iter()
        .filter(|c| c.len() == min_terms)
        .collect_vec();

    let min_cost = shortest.iter().map(|c| literal_cost(c)).min().unwrap_or(0);
    let mut selected = shortest
        .into_iter()
        .filter(|c| literal_cost(c) == min_cost)
        .map(|mut c| {
            c.sort();
            c
        })
        .collect_vec();
    selected.sort();
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::primes::prime_implicants;
    use bit_set::BitSet;

    fn residual_chart(width: usize, minterms: &[usize], dont_cares: &[usize]) -> (CoverageChart, Vec<Term>) {
        let raw: Vec<Term> = minterms
            .iter()
            .chain(dont_cares.iter())
            .map(|m| Term::from_minterm(width, *m).unwrap())
            .collect();
        let primes = prime_implicants(&raw).unwrap();
        let on: BitSet = minterms.iter().cloned().collect();
        let mut chart = CoverageChart::new(&on, &primes).unwrap();
        let essentials = chart.extract_essentials();
        (chart, essentials)
    }

    fn patterns(combinations: &[Vec<Term>]) -> Vec<Vec<String>> {
        combinations
            .iter()
            .map(|c| c.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn empty_chart() {
        let (chart, essentials) = residual_chart(3, &[1, 3, 5, 6, 7], &[]);
        assert_eq!(essentials.len(), 2);
        assert!(petrick(&chart).unwrap().is_empty());
    }

    #[test]
    fn single_remaining_column() {
        let (chart, _) = residual_chart(4, &[4, 8, 10, 11, 12, 15], &[9, 14]);
        let r = petrick(&chart).unwrap();
        // 10-- and 1--0 both have two literals: two equivalent solutions
        assert_eq!(patterns(&r), vec![vec!["10--"], vec!["1--0"]]);
    }

    #[test]
    fn cyclic_chart_has_two_solutions() {
        // m(0,1,2,5,6,7): two covers with three terms each
        let (chart, essentials) = residual_chart(3, &[0, 1, 2, 5, 6, 7], &[]);
        assert!(essentials.is_empty());
        let r = petrick(&chart).unwrap();
        assert_eq!(
            patterns(&r),
            vec![vec!["00-", "1-1", "-10"], vec!["0-0", "11-", "-01"]]
        );
        for c in r.iter() {
            assert_eq!(literal_cost(c), 6);
            for m in [0, 1, 2, 5, 6, 7].iter() {
                assert!(c.iter().any(|t| t.covers(*m)));
            }
        }
    }

    #[test]
    fn six_variables() {
        let minterms = [
            1, 2, 5, 7, 9, 11, 12, 13, 14, 16, 17, 20, 24, 26, 27, 29, 31, 32, 33, 34, 36, 38, 39,
            40, 43, 45, 47, 48, 50, 51, 52, 55, 61,
        ];
        let (chart, _) = residual_chart(6, &minterms, &[]);
        assert!(!chart.is_empty());
        let r = petrick(&chart).unwrap();
        assert!(!r.is_empty());
        let cost = literal_cost(&r[0]);
        for c in r.iter() {
            assert_eq!(c.len(), r[0].len());
            assert_eq!(literal_cost(c), cost);
            for (m, _) in chart.columns() {
                assert!(c.iter().any(|t| t.covers(m)));
            }
        }
    }

    #[test]
    fn fewer_literals_win() {
        let a = Term::from_str("1--").unwrap();
        let b = Term::from_str("10-").unwrap();
        let c = Term::from_str("0-1").unwrap();
        let d = Term::from_str("011").unwrap();
        let r = select_minimal(vec![
            vec![a.clone(), c.clone()],
            vec![b.clone(), c.clone()],
            vec![b.clone(), d.clone()],
            vec![a.clone(), b.clone(), c.clone()],
        ])
        .unwrap();
        assert_eq!(r, vec![vec![c, a]]);
    }

    #[test]
    fn no_candidate() {
        assert!(select_minimal(vec![]).is_err());
    }
}
