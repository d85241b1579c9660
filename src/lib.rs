//! A library for posing boolean satisfiability problems to an external solver process.
//!
//! satgate is a façade: it accumulates a formula in conjunctive normal form, serializes the formula to DIMACS, runs a solver binary over the file, classifies what the binary said, and decodes a satisfying assignment from the file the binary wrote.
//! The solving itself is entirely the binary's business --- the library implements no solver, and is developed to sit between an automaton-induction procedure (which constructs the clauses) and a parallel SAT solver (which consumes them).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config) naming the solver executable and a core count.
//! Clauses are added [programatically](crate::context::GenericContext::add_clause), individually or [by formula](crate::context::GenericContext::append_formula), and persist across solves.
//!
//! A [solve](crate::procedures::solve) is synchronous and self-contained: each call encodes the formula into a fresh temporary directory, blocks on the solver process, and discards the directory before returning.
//! The outcome is a `bool` --- `true` with a [model](crate::context::GenericContext::model) exactly when the solver reported satisfiable and an assignment was decoded.
//! Everything else, from a clean unsatisfiable report to a solver crash, is `false`; the [report](crate::context::GenericContext::report) accessor and the log record the difference.
//!
//! Useful starting points:
//! - The [solve procedure](crate::procedures::solve), for the shape of a call and the collapse of outcomes.
//! - The [process module](crate::process), for the invocation contract with the binary (fixed flags, classification markers) and the capability trait tests substitute.
//! - The [builder module](crate::builder), for the interchange formats crossing the process boundary.
//!
//! # Example
//!
//! Building a formula and inspecting the encoding requires no solver:
//!
//! ```rust
//! # use satgate::config::Config;
//! # use satgate::context::Context;
//! let mut ctx = Context::from_config(Config::new("./painless", 4));
//!
//! ctx.add_clause(vec![1, -2]);
//! ctx.add_clause(vec![2, 3, -1]);
//!
//! assert_eq!(ctx.atom_count(), 3);
//! assert_eq!(ctx.clause_count(), 2);
//!
//! let mut encoded = Vec::new();
//! assert!(ctx.formula_db.write_dimacs(&mut encoded).is_ok());
//! assert_eq!(encoded, b"p cnf 3 2\n1 -2 0\n2 3 -1 0\n");
//! ```
//!
//! Solving requires the binary:
//!
//! ```rust,no_run
//! # use satgate::config::Config;
//! # use satgate::context::Context;
//! let mut ctx = Context::from_config(Config::new("./painless", 4));
//! ctx.add_clause(vec![1, -2]);
//!
//! match ctx.solve(&[]) {
//!     Ok(true) => {
//!         // Position i of the model is read as the value of atom i + 1.
//!         let model = ctx.model();
//!     }
//!     Ok(false) => {} // Unsatisfiable, or some logged failure.
//!     Err(e) => panic!("called with assumptions: {e:?}"),
//! }
//! ```
//!
//! # Notes
//!
//! - The mapping from assignment positions to atoms is an unchecked contract with the solver binary: the decoder assumes literals are emitted for atoms 1..*n* in increasing order.
//! - A context is not safe for concurrent solves; see [context].
//! - No validation is applied to clauses: zero or duplicate literals pass through to the encoding verbatim.

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;
pub mod process;
pub mod reports;

pub mod misc;
