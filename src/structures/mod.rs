//! Key structures, such as literals and clauses.
//!
//! Structures are passed to the external solver in their DIMACS representation, and so the canonical representations here are the DIMACS-native ones: signed integers for literals and vectors of signed integers for clauses.
//!
//! # Formulas
//!
//! A formula 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! Formulas do not have a structure of their own.
//! Instead, the clauses added to a context are collected in the [formula database](crate::db::formula), whose insertion order fixes the order in which clauses are serialized.

pub mod atom;
pub mod clause;
pub mod literal;
