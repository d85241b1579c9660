/*!
The context --- to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the [solver process](crate::process::SolverProcess), which is the seam tests use to substitute canned output for a real binary.
[from_config](Context::from_config) is implemented for a context rather than a generic context, as a configured [ExternalSolver](crate::process::ExternalSolver) is the one process anyone but a test wants.

A context is not safe for concurrent solves: the formula and model are plain instance state, so calls to [solve](GenericContext::solve) from multiple threads on a shared context require external mutual exclusion around the whole call.
Distinct contexts never interfere --- each solve works in its own temporary directory.

# Example
```rust,no_run
# use satgate::config::Config;
# use satgate::context::Context;
let mut ctx = Context::from_config(Config::new("./painless", 4));

ctx.add_clause(vec![1, -2]);
ctx.add_clause(vec![2, 3, -1]);

if let Ok(true) = ctx.solve(&[]) {
    // One bool per assignment token, position i for atom i + 1.
    let model = ctx.model();
}
```
*/

mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
