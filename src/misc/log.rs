/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made on the failure paths of a solve, carrying the diagnostics (exit code, captured streams) which the boolean solve contract discards.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to serializing the formula.
    pub const ENCODE: &str = "encode";

    /// Logs related to [running the solver process](crate::process).
    pub const PROCESS: &str = "process";

    /// Logs related to [decoding an assignment](crate::builder::decode_model).
    pub const DECODE: &str = "decode";

    /// Logs related to the overall [solve procedure](crate::procedures::solve).
    pub const SOLVE: &str = "solve";
}
