/*!
Reports for the context.
*/

/// High-level reports regarding a solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Report {
    /// The formula of the context is satisfiable, with a decoded assignment to witness.
    Satisfiable,

    /// The solver reported the formula of the context unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    ///
    /// Holds before any solve, after output with no classification marker, and after a satisfiable report whose assignment could not be decoded.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
