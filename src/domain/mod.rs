//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `survey` - Survey definition: title, instructions, ordered questions
//! - `visitor` - Per-visitor session: answers and one-shot notices
//! - `navigation` - Sequential-access state machine over a survey

pub mod foundation;
pub mod navigation;
pub mod survey;
pub mod visitor;
