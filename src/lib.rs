//! The `Quine-McCluskey Kit (qmkit)` crate provides data structures and algorithms
//! to find minimal sums of products of Boolean functions given by their minterms
//! and don't care terms.
//!
//! Prime implicants are computed by iterative merging of terms, essential prime
//! implicants are extracted from the coverage chart, and Petrick's method selects
//! the cheapest combinations of the remaining prime implicants.
//!
//! ```
//! use qmkit::func::minimize::minimize;
//! use qmkit::func::variables::VariableNames;
//!
//! let names = VariableNames::parse(&["X", "Y", "Z"]).unwrap();
//! let covers = minimize(3, &[1, 3, 5, 6, 7], &[]).unwrap();
//! assert_eq!(covers[0].render(&names, ""), "XY + Z");
//! ```

extern crate thiserror;

pub mod command;
pub mod func;
pub mod helper;
