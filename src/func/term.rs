use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use bit_set::BitSet;

use crate::func::variables::VariableNamer;
use crate::helper::error::{invalid_input, QmError, QmResult};

/// Value of a single position in a term
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Symbol {
    Zero,
    One,
    Free,
}

/// Terms are subspaces of a fixed number of variables in which some variables
/// are fixed (true or false), while others are free.
///
/// Like patterns, they are represented as a pair of bitsets to store positive and
/// negative positions, where position 0 is the most significant bit of a minterm index.
/// A term also remembers the set of minterms it covers.
///
/// Two terms are equal if they have the same pattern, the covered minterms are
/// fully determined by the pattern.
#[derive(Clone, Debug)]
pub struct Term {
    width: usize,
    positive: BitSet,
    negative: BitSet,
    minterms: BitSet,
}

impl Term {
    /// Create the term of a single minterm, with all positions fixed.
    pub fn from_minterm(width: usize, minterm: usize) -> QmResult<Term> {
        if width >= usize::BITS as usize || minterm >> width != 0 {
            return Err(invalid_input(format!(
                "minterm {} is out of range for {} variables",
                minterm, width
            )));
        }
        let mut positive = BitSet::with_capacity(width);
        let mut negative = BitSet::with_capacity(width);
        for idx in 0..width {
            if minterm >> (width - 1 - idx) & 1 == 1 {
                positive.insert(idx);
            } else {
                negative.insert(idx);
            }
        }
        let mut minterms = BitSet::new();
        minterms.insert(minterm);
        Ok(Term {
            width,
            positive,
            negative,
            minterms,
        })
    }

    /// Create the unrestricted term covering the full space.
    /// This term corresponds to the "true" function.
    pub fn unrestricted(width: usize) -> QmResult<Term> {
        if width >= usize::BITS as usize {
            return Err(invalid_input(format!("{} variables is too many", width)));
        }
        let minterms = (0..1usize << width).collect();
        Ok(Term {
            width,
            positive: BitSet::new(),
            negative: BitSet::new(),
            minterms,
        })
    }

    /// Create a term from a string of '0', '1' and '-' symbols.
    /// The covered minterms are derived from the pattern.
    pub fn from_str(descr: &str) -> QmResult<Term> {
        let width = descr.chars().count();
        let mut t = Term::unrestricted(width)?;
        for (idx, c) in descr.chars().enumerate() {
            match c {
                '0' => t.fix(idx, false),
                '1' => t.fix(idx, true),
                '-' => (),
                _ => return Err(invalid_input(format!("invalid symbol '{}' in term", c))),
            }
        }
        Ok(t)
    }

    fn fix(&mut self, idx: usize, value: bool) {
        let shift = self.width - 1 - idx;
        if value {
            self.positive.insert(idx);
        } else {
            self.negative.insert(idx);
        }
        let expected = value as usize;
        let minterms = self.minterms.iter().filter(|m| m >> shift & 1 == expected).collect();
        self.minterms = minterms;
    }

    /// Number of positions (variables)
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn symbol(&self, idx: usize) -> Symbol {
        if self.positive.contains(idx) {
            Symbol::One
        } else if self.negative.contains(idx) {
            Symbol::Zero
        } else {
            Symbol::Free
        }
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.width).map(move |idx| self.symbol(idx))
    }

    /// Number of positions fixed at 1
    pub fn weight(&self) -> usize {
        self.positive.len()
    }

    /// Number of fixed positions, i.e. the number of literals of the product
    pub fn defined_weight(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Number of free positions: a term of order k covers 2^k minterms
    pub fn order(&self) -> usize {
        self.width - self.defined_weight()
    }

    pub fn minterms(&self) -> &BitSet {
        &self.minterms
    }

    pub fn covers(&self, minterm: usize) -> bool {
        self.minterms.contains(minterm)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Count the positions holding different symbols (a free position differs from a fixed one)
    pub fn distance(&self, other: &Term) -> usize {
        let mut diff = self.positive.clone();
        diff.symmetric_difference_with(&other.positive);
        let mut ndiff = self.negative.clone();
        ndiff.symmetric_difference_with(&other.negative);
        diff.union_with(&ndiff);
        diff.len()
    }

    /// Merge two terms of the same order which differ in a single position.
    ///
    /// The differing position becomes free and the covered minterms are united.
    /// Any other pair of terms is rejected.
    pub fn merge(&self, other: &Term) -> QmResult<Term> {
        let distance = self.distance(other);
        if self.width != other.width || self.order() != other.order() || distance != 1 {
            return Err(QmError::UnmergeableTermPair {
                left: self.to_string(),
                right: other.to_string(),
                distance,
            });
        }
        let mut positive = self.positive.clone();
        positive.intersect_with(&other.positive);
        let mut negative = self.negative.clone();
        negative.intersect_with(&other.negative);
        let mut minterms = self.minterms.clone();
        minterms.union_with(&other.minterms);
        Ok(Term {
            width: self.width,
            positive,
            negative,
            minterms,
        })
    }

    /// Product of literals for this term, an empty product is the constant "1".
    pub fn render(&self, namer: &dyn VariableNamer, separator: &str) -> String {
        let literals: Vec<String> = self
            .symbols()
            .enumerate()
            .filter_map(|(idx, s)| match s {
                Symbol::Zero => Some(format!("{}'", namer.name(idx))),
                Symbol::One => Some(namer.name(idx)),
                Symbol::Free => None,
            })
            .collect();
        if literals.is_empty() {
            return String::from("1");
        }
        literals.join(separator)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Term) -> bool {
        self.width == other.width
            && self.positive == other.positive
            && self.negative == other.negative
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        for s in self.symbols() {
            s.hash(state);
        }
    }
}

impl Ord for Term {
    /// Order by pattern, then by covered minterms
    fn cmp(&self, other: &Term) -> Ordering {
        self.width
            .cmp(&other.width)
            .then_with(|| self.symbols().cmp(other.symbols()))
            .then_with(|| self.minterms.iter().cmp(other.minterms.iter()))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Term) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self
            .symbols()
            .map(|s| match s {
                Symbol::Zero => '0',
                Symbol::One => '1',
                Symbol::Free => '-',
            })
            .collect();
        write!(f, "{}", &s)
    }
}
