//! Serialization of a formula database to DIMACS CNF.
//!
//! The output is exactly a problem line followed by one line per clause, in insertion order:
//!
//! ```text
//! p cnf <atom_count> <clause_count>
//! <literal> … <literal> 0
//! ```
//!
//! No comment lines are emitted, and identical database state always yields byte-identical output.

use std::io::{self, Write};

use crate::{db::formula::FormulaDB, structures::clause::Clause};

impl FormulaDB {
    /// Writes the formula to the given sink in DIMACS CNF form, flushing on success.
    ///
    /// Errors from the sink are propagated, and in every case the sink is released with the scope of the call.
    pub fn write_dimacs(&self, mut sink: impl Write) -> io::Result<()> {
        writeln!(sink, "p cnf {} {}", self.atom_count(), self.clause_count())?;
        for clause in self.clauses() {
            writeln!(sink, "{}", clause.as_dimacs(true))?;
        }
        sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(formula: &FormulaDB) -> String {
        let mut buffer = Vec::new();
        formula.write_dimacs(&mut buffer).expect("write to buffer");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn empty_formula() {
        let formula = FormulaDB::default();
        assert_eq!(encoded(&formula), "p cnf 0 0\n");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut formula = FormulaDB::default();
        formula.add_clause(vec![2, 3, -1]);
        formula.add_clause(vec![1, -2]);
        assert_eq!(encoded(&formula), "p cnf 3 2\n2 3 -1 0\n1 -2 0\n");
    }

    #[test]
    fn duplicate_literals_verbatim() {
        let mut formula = FormulaDB::default();
        formula.add_clause(vec![4, 4, -4]);
        assert_eq!(encoded(&formula), "p cnf 1 1\n4 4 -4 0\n");
    }
}
