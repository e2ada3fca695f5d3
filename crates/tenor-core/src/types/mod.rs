//! Domain types shared across the Tenor crates.

mod compounding;

pub use compounding::Compounding;
