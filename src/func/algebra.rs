//! Symbolic conjunctions and disjunctions over an arbitrary literal type.
//!
//! A [`Disjunction`] is either a plain sum of literals, or a canonical sum of products
//! (each product being a [`Conjunction`] of literals). A product of sums is represented
//! as a conjunction of disjunctions, and can be expanded into a canonical sum of products.
//!
//! All elements are stored in ordered sets: equality is the exact equality of the sets
//! of elements, and iteration order is deterministic. Absorption is an explicit
//! pairwise inclusion test and does not rely on equality.

use std::collections::BTreeSet;
use std::fmt;
use std::iter::FromIterator;

use itertools::Itertools;

use crate::helper::error::{generic_error, QmResult};

/// Logical AND of a set of elements
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Conjunction<E> {
    elements: BTreeSet<E>,
}

/// Logical OR of a set of literals or of a set of products of literals
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Disjunction<L> {
    /// Sum of literals, as found in a product of sums
    NonCanonical(BTreeSet<L>),
    /// Sum of products
    Canonical(BTreeSet<Conjunction<L>>),
}

impl<E: Ord + Clone> Conjunction<E> {
    /// Create an empty conjunction, corresponding to the "true" constant
    pub fn new() -> Self {
        Conjunction {
            elements: BTreeSet::new(),
        }
    }

    pub fn single(element: E) -> Self {
        let mut c = Conjunction::new();
        c.insert(element);
        c
    }

    pub fn insert(&mut self, element: E) -> bool {
        self.elements.insert(element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.elements.iter()
    }

    /// Test if all elements of this conjunction are also elements of another one.
    /// The other conjunction is then absorbed by this one (a + ab = a).
    pub fn is_subset(&self, other: &Conjunction<E>) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Conjunction of all elements of both conjunctions
    pub fn union(&self, other: &Conjunction<E>) -> Self {
        Conjunction {
            elements: self.elements.union(&other.elements).cloned().collect(),
        }
    }

    pub fn into_elements(self) -> BTreeSet<E> {
        self.elements
    }
}

impl<E: Ord + Clone> Default for Conjunction<E> {
    fn default() -> Self {
        Conjunction::new()
    }
}

impl<E: Ord + Clone> FromIterator<E> for Conjunction<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Conjunction {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<L: Ord + Clone> Disjunction<L> {
    /// Create a sum of literals
    pub fn of_literals<I: IntoIterator<Item = L>>(literals: I) -> Self {
        Disjunction::NonCanonical(literals.into_iter().collect())
    }

    /// Create a sum of products
    pub fn of_products<I: IntoIterator<Item = Conjunction<L>>>(products: I) -> Self {
        Disjunction::Canonical(products.into_iter().collect())
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Disjunction::Canonical(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Disjunction::NonCanonical(literals) => literals.len(),
            Disjunction::Canonical(products) => products.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turn a sum of literals into a sum of single-literal products.
    /// A canonical sum is returned unchanged.
    pub fn canonicalize(self) -> Self {
        match self {
            Disjunction::NonCanonical(literals) => {
                Disjunction::Canonical(literals.into_iter().map(Conjunction::single).collect())
            }
            canonical => canonical,
        }
    }

    /// Retrieve the products of the canonical form of this sum
    pub fn into_products(self) -> BTreeSet<Conjunction<L>> {
        match self {
            Disjunction::NonCanonical(literals) => {
                literals.into_iter().map(Conjunction::single).collect()
            }
            Disjunction::Canonical(products) => products,
        }
    }

    /// Products of this sum if it is canonical
    pub fn products(&self) -> Option<&BTreeSet<Conjunction<L>>> {
        match self {
            Disjunction::Canonical(products) => Some(products),
            Disjunction::NonCanonical(_) => None,
        }
    }

    /// Distribute the conjunction of two sums: (a+b)(c+d) = ac+ad+bc+bd
    pub fn multiply(self, other: Disjunction<L>) -> Self {
        let left = self.into_products();
        let right = other.into_products();
        Disjunction::Canonical(
            left.iter()
                .cartesian_product(right.iter())
                .map(|(a, b)| a.union(b))
                .collect(),
        )
    }

    /// Remove all products absorbed by another product of the sum (a + ab = a).
    ///
    /// The remaining products are the minimal ones for inclusion.
    pub fn absorb(self) -> Self {
        let products = self.into_products().into_iter().collect_vec();
        let kept = products
            .iter()
            .enumerate()
            .filter(|(i, p)| {
                !products
                    .iter()
                    .enumerate()
                    .any(|(j, q)| *i != j && q.is_subset(p))
            })
            .map(|(_, p)| p.clone());
        Disjunction::Canonical(kept.collect())
    }
}

impl<L: Ord + Clone> Conjunction<Disjunction<L>> {
    /// Expand a product of sums into a sum of products.
    ///
    /// A product of a single sum is returned as is. An empty product is rejected.
    pub fn product_to_sum(self) -> QmResult<Disjunction<L>> {
        self.expand(false)
    }

    /// Expand a product of sums into a sum of products, without absorbed products.
    ///
    /// Absorption is applied after each multiplication to keep the intermediate sums small,
    /// the result is the same as `product_to_sum` followed by `absorb`.
    pub fn product_to_minimal_sum(self) -> QmResult<Disjunction<L>> {
        Ok(self.expand(true)?.absorb())
    }

    fn expand(self, absorb: bool) -> QmResult<Disjunction<L>> {
        let mut sums = self.elements.into_iter().collect_vec();
        let mut result = match sums.pop() {
            None => return Err(generic_error(String::from("can not expand an empty product"))),
            Some(s) => s,
        };
        while let Some(next) = sums.pop() {
            result = next.multiply(result);
            if absorb {
                result = result.absorb();
            }
        }
        Ok(result)
    }
}

impl<E: fmt::Display> fmt::Display for Conjunction<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.elements.is_empty() {
            return write!(f, "1");
        }
        write!(f, "{}", self.elements.iter().join("·"))
    }
}

impl<L: fmt::Display> fmt::Display for Disjunction<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Disjunction::NonCanonical(literals) => literals.iter().join(" + "),
            Disjunction::Canonical(products) => products.iter().join(" + "),
        };
        if s.is_empty() {
            return write!(f, "(0)");
        }
        write!(f, "({})", s)
    }
}
