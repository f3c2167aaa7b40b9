//! Navigation domain module - the sequential-access state machine.
//!
//! A visitor with `n` recorded answers may only see or answer question `n`.
//! Every other index is redirected back to `n` with a one-shot warning.
//!
//! ```text
//! n = answers so far, q = requested index, C = question count
//!
//!   q != n                 -> warn, redirect to n
//!   q == n < C, view       -> render question n
//!   q == n < C, answer     -> append, redirect to n + 1 (or complete)
//!   q == n < C, no answer  -> redirect to n
//!   q == n == C            -> render thank-you
//! ```

mod errors;
mod navigator;
mod state;

pub use errors::NavigationError;
pub use navigator::{NavigationOutcome, Navigator};
pub use state::ProgressState;
