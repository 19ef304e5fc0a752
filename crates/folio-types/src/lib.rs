//! Foundation types for folio.
//!
//! This crate contains the front-end agnostic types shared by every folio
//! crate: the error enum, input events, scrollback style tags, runtime
//! configuration and the portfolio profile data that commands render.

pub mod config;
pub mod error;
pub mod input;
pub mod profile;
pub mod style;
