//! Databases for holding state of a context.
//!
//! A single database, for the moment: the [formula database](crate::db::formula), which collects the clauses given to a context together with the atoms those clauses mention.

pub mod formula;
