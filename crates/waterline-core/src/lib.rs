//! Core types for marker-based water-level estimation.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete fiducial detector or frame source; marker corner
//! pixels arrive from the caller and calibration is derived from the marker's
//! known physical size.

mod error;
mod image;
mod logger;
mod marker;
mod quad;
mod rotation;
mod stripes;

pub use error::GeometryError;
pub use image::{sample_bilinear, sample_bilinear_u8, GrayImage, GrayImageView};
pub use logger::init_with_level;
pub use marker::MarkerGeometry;
pub use quad::Quad;
pub use rotation::FrameRotation;
pub use stripes::StripeGeometry;
