//! # Placer Headless
//!
//! Drives a [`placer_core`] placement session from a scripted frame
//! sequence instead of a live engine loop. Used for CI verification
//! and quick inspection of placement behavior.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod render;
pub mod runner;
pub mod script;
