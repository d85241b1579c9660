use crate::{
    config::Config,
    db::formula::FormulaDB,
    process::SolverProcess,
    reports::Report,
    structures::clause::CClause,
};

/// A generic context, parameterised to a solver process.
///
/// # Example
///
/// ```rust
/// # use satgate::config::Config;
/// # use satgate::context::GenericContext;
/// # use satgate::process::ExternalSolver;
/// let solver = ExternalSolver::new("./painless");
/// let context = GenericContext::with_process(Config::new("./painless", 4), solver);
/// ```
pub struct GenericContext<P: SolverProcess> {
    /// The configuration of a context.
    pub config: Config,

    /// The formula database.
    /// See [db::formula](crate::db::formula) for details.
    pub formula_db: FormulaDB,

    /// The process a solve runs.
    pub(crate) process: P,

    /// The assignment decoded by the most recent solve, if any.
    pub(crate) model: Vec<bool>,

    /// The classification of the most recent solve.
    pub(crate) report: Report,
}

impl<P: SolverProcess> GenericContext<P> {
    /// Creates a context from a configuration and a given solver process.
    pub fn with_process(config: Config, process: P) -> Self {
        Self {
            config,
            formula_db: FormulaDB::default(),
            process,
            model: Vec::new(),
            report: Report::Unknown,
        }
    }

    /// Appends a clause to the formula of the context.
    ///
    /// Clauses persist across solves; there is no way to retract one.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) {
        self.formula_db.add_clause(clause);
    }

    /// Appends each clause of a formula to the context, in the order given.
    pub fn append_formula(&mut self, clauses: impl IntoIterator<Item = CClause>) {
        self.formula_db.append_formula(clauses);
    }

    /// The number of distinct atoms mentioned by the formula of the context.
    pub fn atom_count(&self) -> usize {
        self.formula_db.atom_count()
    }

    /// The number of clauses in the formula of the context.
    pub fn clause_count(&self) -> usize {
        self.formula_db.clause_count()
    }

    /// The assignment decoded by the most recent solve.
    ///
    /// Empty if no solve has run, or the most recent solve returned false.
    pub fn model(&self) -> &[bool] {
        &self.model
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        self.report
    }
}
