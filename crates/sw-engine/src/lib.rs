//! Playback state machine for the skywave narrative engine.
//!
//! Advances an ordered step catalog through time via an explicit
//! `tick(elapsed_ms)` entry point, so the clock source (interval timer,
//! frame callback, or a test calling ticks synchronously) stays
//! decoupled from the state machine.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod engine;

pub use engine::{CatalogError, Engine, TickOutcome};
