/*!
Tools for moving a formula across the process boundary.

Two directions:
- [write_dimacs](crate::db::formula::FormulaDB::write_dimacs) serializes the formula database to the DIMACS CNF text handed to the external solver.
- [decode_model](crate::builder::decode_model) reads the assignment file the solver writes back.

Both operate on injectable stream adapters ([io::Write](std::io::Write) and [io::BufRead](std::io::BufRead)) rather than paths, so a buffer works as well as a file.

# Example

```rust
# use satgate::db::formula::FormulaDB;
let mut formula = FormulaDB::default();
formula.add_clause(vec![1, -2]);
formula.add_clause(vec![2, 3, -1]);

let mut encoded = Vec::new();
assert!(formula.write_dimacs(&mut encoded).is_ok());

assert_eq!(encoded, b"p cnf 3 2\n1 -2 0\n2 3 -1 0\n");
```
*/

mod dimacs;

mod model;
pub use model::decode_model;
