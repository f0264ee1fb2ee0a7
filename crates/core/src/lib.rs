#![deny(unsafe_code)]
//! Core types for the driftnet particle-field simulator.
//!
//! Provides the `Simulator` trait, the `Particle` and `Pointer` data model,
//! the `Rgba` color type, the `SplitMix64` PRNG, `Preset` reproduction specs,
//! and parameter helpers.

pub mod color;
pub mod error;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod preset;
pub mod prng;
pub mod simulator;

pub use color::Rgba;
pub use error::FieldError;
pub use particle::Particle;
pub use pointer::Pointer;
pub use preset::Preset;
pub use prng::SplitMix64;
pub use simulator::Simulator;
