//! Represent and minimize Boolean functions

pub mod algebra;
pub mod chart;
pub mod cover;
pub mod function;
pub mod minimize;
pub mod petrick;
pub mod primes;
pub mod term;
pub mod variables;
