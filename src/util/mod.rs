//! Generic helpers shared by the expansion grammar.

mod cartesian;

pub use cartesian::cartesian_product;
