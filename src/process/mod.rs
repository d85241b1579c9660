/*!
The external solver as a capability.

A context is generic over something which implements [SolverProcess]: given the path of an encoded formula and a path at which to leave an assignment, run a solve and hand back whatever the process said.
The [ExternalSolver] implementation spawns the configured binary; tests substitute implementations which produce canned output without a process table.

# Invocation

The binary is called with a fixed flag template --- only the core count and the two trailing file paths vary:

```text
<solver> -no-luby -rinc=1.5 -phase-saving=0 -rnd-freq=0.02 -ncores=<cores> -limitEx=10 -det=0 -ctrl=0 <input> <output>
```

The call is synchronous and unbounded: it returns when the process exits, and not before.
stdout and stderr are captured in full, not streamed.

# Classification markers

Satisfiability is read off the captured stdout by substring, using [UNSATISFIABLE_MARKER] and [SATISFIABLE_MARKER].
The marker text is a contract with the target binary, not something this crate controls.
Note the unsatisfiable marker contains the satisfiable marker as a substring, so any classification must test for it first.
*/

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::types::err::ProcessError;

/// The stdout substring by which the solver reports an unsatisfiable formula.
pub const UNSATISFIABLE_MARKER: &str = "UNSATISFIABLE";

/// The stdout substring by which the solver reports a satisfiable formula.
pub const SATISFIABLE_MARKER: &str = "SATISFIABLE";

/// Everything a solver process said: captured streams and the exit code, unclassified.
#[derive(Clone, Debug)]
pub struct CapturedOutput {
    /// The captured standard output, lossily decoded.
    pub stdout: String,

    /// The captured standard error, lossily decoded.
    pub stderr: String,

    /// The exit code, if the process exited with one.
    pub code: Option<i32>,
}

/// Something which runs a solve over a pair of files.
pub trait SolverProcess {
    /// Runs the solver on the formula at `input`, directing any assignment to `output`, and blocks until it completes.
    ///
    /// Failure to launch is the only error: a solver which ran and reported anything at all is an `Ok`, whatever it reported.
    fn run(
        &self,
        input: &Path,
        output: &Path,
        cores: u32,
    ) -> Result<CapturedOutput, ProcessError>;
}

/// A solver binary on disk, invoked with the fixed flag template.
#[derive(Clone, Debug)]
pub struct ExternalSolver {
    /// The path to the solver executable.
    path: PathBuf,
}

impl ExternalSolver {
    /// An external solver using the executable at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SolverProcess for ExternalSolver {
    fn run(
        &self,
        input: &Path,
        output: &Path,
        cores: u32,
    ) -> Result<CapturedOutput, ProcessError> {
        log::trace!(target: crate::misc::log::targets::PROCESS, "Calling {:?} on {input:?}", self.path);

        let captured = Command::new(&self.path)
            .arg("-no-luby")
            .arg("-rinc=1.5")
            .arg("-phase-saving=0")
            .arg("-rnd-freq=0.02")
            .arg(format!("-ncores={cores}"))
            .arg("-limitEx=10")
            .arg("-det=0")
            .arg("-ctrl=0")
            .arg(input)
            .arg(output)
            .output()
            .map_err(ProcessError::Launch)?;

        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&captured.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&captured.stderr).into_owned(),
            code: captured.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_a_launch_failure() {
        let solver = ExternalSolver::new("/nonexistent/solver/binary");
        let outcome = solver.run(Path::new("in.cnf"), Path::new("out.txt"), 1);
        assert!(matches!(outcome, Err(ProcessError::Launch(_))));
    }
}
