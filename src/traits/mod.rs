//! Trait seams for session persistence backends.

pub mod session;
