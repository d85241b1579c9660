//! Procedures on a context.

pub mod solve;
