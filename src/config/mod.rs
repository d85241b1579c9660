/*!
Configuration of a context.

Two values, both supplied by whoever instantiates the context --- nothing is read from the environment or from files:
- the path to the external solver executable, and
- the number of cores the solver is asked to use (passed through the `-ncores` flag, the only parallelism in the system).
*/

use std::path::PathBuf;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The path to the external solver executable.
    pub solver_path: PathBuf,

    /// The number of cores the solver is asked to use.
    pub cores: u32,
}

impl Config {
    /// A configuration from a solver path and a core count.
    pub fn new(solver_path: impl Into<PathBuf>, cores: u32) -> Self {
        Self {
            solver_path: solver_path.into(),
            cores,
        }
    }
}
