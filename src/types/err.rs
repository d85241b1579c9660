//! Error types used in the library.
//!
//! Only [ErrorKind::UnsupportedAssumptions] ever crosses a call to [solve](crate::context::GenericContext::solve) --- it marks a caller contract violation rather than a solving outcome.
//! Every other failure (a process which would not launch, output with no classification marker, a missing or unreadable assignment file) is logged and collapsed into the `false` solve outcome.

/// Errors a context may return to a caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A solve was requested under assumptions, which this façade does not support.
    UnsupportedAssumptions,
}

/// Errors when running the external solver.
#[derive(Debug)]
pub enum ProcessError {
    /// The process could not be launched, e.g. as the executable is missing or unrunnable.
    ///
    /// Distinct, by construction, from a solver which ran and reported an unsatisfiable formula or some failure of its own.
    Launch(std::io::Error),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Launch(e)
    }
}
