//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is a signed integer in the DIMACS style: the magnitude is the atom, and the sign is the polarity.
//! A nonzero integer is expected, though not enforced --- see [atom](crate::structures::atom).
//!
//! ```rust
//! # use satgate::structures::literal::{CLiteral, Literal};
//! let literal: CLiteral = -79;
//!
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert_eq!(literal.negate(), 79);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The negation of the literal.
    fn negate(&self) -> Self;
}

/// The canonical implementation of a literal: a signed integer, DIMACS style.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        *self >= 0
    }

    fn negate(&self) -> Self {
        -*self
    }
}
