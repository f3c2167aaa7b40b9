//! Survey Flow - Multi-page survey web flow
//!
//! Serves a fixed survey one question per page. Each visitor's answers live
//! in a server-side session keyed by a signed cookie, and navigation is
//! strictly sequential: a visitor can only view or answer the next
//! unanswered question.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
