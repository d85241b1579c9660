/*!
Atoms (aka. 'variables').

Atoms are things to which assigning a (boolean) value is of interest.

Each atom is the magnitude of some [literal](crate::structures::literal) added to a context, and so in any well-formed formula atoms are positive integers.
Still, the representation covers `0`: the façade does not validate input, and an atom of `0` will be counted and serialized like any other (the external solver reads a `0` as a clause terminator --- the consequences of sending one belong to the caller).

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;
