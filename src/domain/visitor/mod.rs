//! Visitor session domain module.
//!
//! Each visitor owns exactly one session holding their ordered answers and a
//! queue of one-shot notices. Sessions are keyed by `VisitorId` and are never
//! shared between visitors.

mod notice;
mod session;

pub use notice::{Notice, NoticeLevel, INVALID_QUESTION_MESSAGE};
pub use session::VisitorSession;
