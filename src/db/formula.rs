//! The formula database.
//!
//! Clauses are stored in insertion order, and the atom of every literal added is noted in a set.
//! The pair fixes the `p cnf <atoms> <clauses>` header of the DIMACS serialization, and insertion order fixes the body.
//!
//! No validation is made: duplicate clauses are stored (and counted) once per addition, and duplicate or zero literals within a clause are stored verbatim.
//!
//! The database is never cleared by a solve --- clauses accumulate until the database is dropped.

use std::collections::HashSet;

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
};

/// The clauses of a context, together with the set of atoms those clauses mention.
#[derive(Debug, Default)]
pub struct FormulaDB {
    /// The clauses added, in insertion order.
    clauses: Vec<CClause>,

    /// Every atom mentioned by some clause added.
    atoms: HashSet<Atom>,
}

impl FormulaDB {
    /// Appends a clause to the formula and notes the atoms of the clause.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) {
        let clause = clause.into();
        for atom in clause.atoms() {
            self.atoms.insert(atom);
        }
        self.clauses.push(clause);
    }

    /// Appends each clause of a formula, in the order given.
    pub fn append_formula(&mut self, clauses: impl IntoIterator<Item = CClause>) {
        for clause in clauses {
            self.add_clause(clause);
        }
    }

    /// The number of distinct atoms mentioned by the formula.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// The number of clauses in the formula, duplicates included.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the clauses of the formula, in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }
}
