//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is a vector of literals.
//! Order is preserved: solving does not require it, but deterministic serialization does.
//!
//! ```rust
//! # use satgate::structures::clause::Clause;
//! let clause = vec![1, -2, 3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
//! ```

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over the atoms of the clause, in clause order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !string.is_empty() {
                string.push(' ');
            }
            string.push('0');
        }
        string
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn size(&self) -> usize {
        self.len()
    }
}
