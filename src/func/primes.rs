//! Search for prime implicants by iterative merging of terms.
//!
//! Each generation contains terms of the same order. Two terms of a generation
//! can only be merged if they differ in a single fixed position, their weights
//! then differ by exactly one. Generations are thus split into buckets of
//! terms with the same weight, and only adjacent buckets are compared.

use std::collections::BTreeSet;

use bit_set::BitSet;
use itertools::Itertools;
use log::debug;

use crate::func::term::Term;
use crate::helper::error::{generic_error, invalid_input, QmResult};

/// Compute all prime implicants covering a set of terms (usually minterms and don't cares).
///
/// The result is sorted and free of duplicates.
pub fn prime_implicants(raw: &[Term]) -> QmResult<Vec<Term>> {
    let mut current = first_generation(raw)?;
    let max_rounds = current.first().map(|t| t.width() + 1).unwrap_or(0);

    let mut primes = BTreeSet::new();
    let mut round = 0;
    while !current.is_empty() {
        if round >= max_rounds {
            return Err(generic_error(format!(
                "prime implicant search did not terminate after {} rounds",
                round
            )));
        }

        let (next, merged) = merge_generation(&current)?;
        let found = current
            .iter()
            .enumerate()
            .filter(|(idx, _)| !merged.contains(*idx))
            .map(|(_, t)| t.clone())
            .collect_vec();
        debug!(
            "generation {}: {} terms, {} merged, {} prime implicants",
            round,
            current.len(),
            merged.len(),
            found.len()
        );
        primes.extend(found);

        current = next;
        round += 1;
    }

    Ok(primes.into_iter().collect())
}

/// Sort and deduplicate the initial terms, which must all share the same width and order
fn first_generation(raw: &[Term]) -> QmResult<Vec<Term>> {
    if let Some(first) = raw.first() {
        for t in raw.iter() {
            if t.width() != first.width() || t.order() != first.order() {
                return Err(invalid_input(format!(
                    "terms {} and {} can not be part of the same generation",
                    first, t
                )));
            }
        }
    }
    let generation: BTreeSet<Term> = raw.iter().cloned().collect();
    Ok(generation.into_iter().collect())
}

/// Merge all compatible pairs of a generation.
///
/// Returns the next generation and the indices of merged terms in the current one.
fn merge_generation(current: &[Term]) -> QmResult<(Vec<Term>, BitSet)> {
    let buckets = (0..current.len()).into_group_map_by(|idx| current[*idx].weight());

    let mut merged = BitSet::with_capacity(current.len());
    let mut next = BTreeSet::new();
    for (weight, lower) in buckets.iter() {
        let upper = match buckets.get(&(weight + 1)) {
            None => continue,
            Some(b) => b,
        };
        for (&i, &j) in lower.iter().cartesian_product(upper.iter()) {
            if current[i].distance(&current[j]) != 1 {
                continue;
            }
            merged.insert(i);
            merged.insert(j);
            next.insert(current[i].merge(&current[j])?);
        }
    }

    Ok((next.into_iter().collect(), merged))
}
