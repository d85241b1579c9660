//! Determines the satisfiability of the formula in a context, by way of the external solver.
//!
//! # Overview
//!
//! A solve is a straight line through the process boundary:
//!
//! ```none
//! +--------------+     +--------------+     +----------------+     +--------------+
//! | write_dimacs | --> | process::run | --> | classify stdout | --> | decode_model |
//! +--------------+     +--------------+     +----------------+     +--------------+
//! ```
//!
//! held together by a temporary directory which exists for exactly one call.
//! The directory holds two files --- the encoded formula and whatever assignment the solver leaves --- and is removed when the call returns, whatever the outcome.
//!
//! The call blocks until the solver process exits.
//! There is no timeout and no cancellation: a solver which never exits blocks the calling thread indefinitely.
//!
//! # Outcomes
//!
//! Every outcome except one collapses into the returned `bool`:
//! - `Ok(true)` with a stored model, when the solver reported satisfiable and an assignment was decoded;
//! - `Ok(false)` otherwise --- a clean unsatisfiable report, a launch failure, unclassifiable output, and a missing or undecodable assignment file are indistinguishable here, though the non-clean paths each leave a diagnostic log line and [report](crate::context::GenericContext::report) distinguishes [Unknown](Report::Unknown) from [Unsatisfiable](Report::Unsatisfiable);
//! - `Err(`[UnsupportedAssumptions](ErrorKind::UnsupportedAssumptions)`)`, the one loud failure, when called with assumptions.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
};

use crate::{
    builder::decode_model,
    context::GenericContext,
    misc::log::targets,
    process::{SolverProcess, SATISFIABLE_MARKER, UNSATISFIABLE_MARKER},
    reports::Report,
    structures::literal::CLiteral,
    types::err::{ErrorKind, ProcessError},
};

/// The name of the encoded formula file within a solve's temporary directory.
const FORMULA_FILE: &str = "formula.cnf";

/// The name of the file the solver is asked to write an assignment to.
const MODEL_FILE: &str = "model.txt";

impl<P: SolverProcess> GenericContext<P> {
    /// Solves the formula of the context, and returns whether a satisfying assignment was found.
    ///
    /// The model of the context is cleared at entry and populated only on a decoded satisfiable outcome; the formula is untouched, and may be extended and solved again.
    ///
    /// `assumptions` must be empty.
    /// Solving under assumptions is unsupported, and a non-empty set returns [ErrorKind::UnsupportedAssumptions] before any process is invoked.
    pub fn solve(&mut self, assumptions: &[CLiteral]) -> Result<bool, ErrorKind> {
        if !assumptions.is_empty() {
            return Err(ErrorKind::UnsupportedAssumptions);
        }

        self.model.clear();
        self.report = Report::Unknown;

        // Dropped at every return below, taking both files with it.
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(e) => {
                log::error!(target: targets::SOLVE, "Failed to create a working directory: {e}");
                return Ok(false);
            }
        };
        let formula_path = dir.path().join(FORMULA_FILE);
        let model_path = dir.path().join(MODEL_FILE);

        let encode_result = File::create(&formula_path)
            .and_then(|file| self.formula_db.write_dimacs(BufWriter::new(file)));
        if let Err(e) = encode_result {
            log::error!(target: targets::ENCODE, "Failed to write the formula to {formula_path:?}: {e}");
            return Ok(false);
        }

        let output = match self.process.run(&formula_path, &model_path, self.config.cores) {
            Ok(output) => output,
            Err(ProcessError::Launch(e)) => {
                log::error!(
                    target: targets::PROCESS,
                    "Failed to launch the solver at {:?}: {e}",
                    self.config.solver_path
                );
                return Ok(false);
            }
        };

        // UNSATISFIABLE contains SATISFIABLE, so is checked first.
        if output.stdout.contains(UNSATISFIABLE_MARKER) {
            self.report = Report::Unsatisfiable;
            return Ok(false);
        }

        if output.stdout.contains(SATISFIABLE_MARKER) {
            let decoded = match File::open(&model_path) {
                Ok(file) => decode_model(BufReader::new(file)),
                Err(_) => None,
            };
            match decoded {
                Some(model) => {
                    self.model = model;
                    self.report = Report::Satisfiable;
                    return Ok(true);
                }
                None => {
                    log::error!(
                        target: targets::DECODE,
                        "The solver reported a satisfiable formula, but no assignment was decoded from {model_path:?}"
                    );
                    return Ok(false);
                }
            }
        }

        log::error!(
            target: targets::PROCESS,
            "Indeterminate solver output (exit code {:?})\n{}\n=================\n{}",
            output.code,
            if output.stdout.is_empty() { "No stdout!" } else { output.stdout.as_str() },
            if output.stderr.is_empty() { "No stderr!" } else { output.stderr.as_str() },
        );
        Ok(false)
    }
}
