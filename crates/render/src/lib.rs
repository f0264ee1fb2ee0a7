#![deny(unsafe_code)]
//! CPU rasterization for the driftnet particle field.
//!
//! [`Raster`] is an owned RGBA pixel surface with source-over compositing;
//! [`scene`] composes a frame from a particle slice (discs first, then the
//! all-pairs proximity edges). PNG export lives behind the `png` feature
//! (default on) so embedders can drop the `image` dependency.

pub mod raster;
pub mod scene;

#[cfg(feature = "png")]
pub mod snapshot;

pub use raster::Raster;
pub use scene::{edge_alpha, render, EdgeStyle};
