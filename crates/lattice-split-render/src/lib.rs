//! Geometry and drawing interface for Lattice Split.
//!
//! This crate provides the value types shared by layout and painting code:
//!
//! - [`Point`], [`Size`], [`Rect`]: 2D geometry in logical pixels
//! - [`Icon`]: A themed image resource with known pixel dimensions
//! - [`Renderer`]: The drawing interface widgets paint through
//!
//! Rendering backends are external; anything implementing [`Renderer`] can
//! draw a split container's divider.

mod icon;
mod renderer;
mod types;

pub use icon::Icon;
pub use renderer::{DrawCommand, RecordingRenderer, Renderer};
pub use types::{Point, Rect, Size};
