use crate::{config::Config, process::ExternalSolver};

use super::GenericContext;

/// A context which runs solves through an [ExternalSolver].
pub type Context = GenericContext<ExternalSolver>;

impl Context {
    /// Creates a context from some given configuration, taking the solver executable from the configured path.
    pub fn from_config(config: Config) -> Self {
        let solver = ExternalSolver::new(&config.solver_path);
        Self::with_process(config, solver)
    }
}
