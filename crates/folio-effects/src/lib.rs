//! Small, stateless-or-nearly view effects.
//!
//! None of these touch the interpreter. Front ends drive them from their
//! own event loop and render whatever they produce.

pub mod counter;
pub mod konami;
pub mod typewriter;
