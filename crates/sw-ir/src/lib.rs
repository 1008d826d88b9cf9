//! Core story types for the skywave narrative playback engine.
//!
//! This crate defines the data the engine runs on: the ordered catalog
//! of story steps, the state snapshot handed to presentation adapters,
//! and the intensity curve that modulates visual effects within a step.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod catalog;
mod curve;
mod snapshot;
mod step;

pub use catalog::{OutOfRangeError, StepCatalog};
pub use curve::wave_intensity;
pub use snapshot::Snapshot;
pub use step::{Stage, StoryStep, EFFECT_REVEAL_SPAN, MAX_EFFECTS};
