//! Isometric rendering of the z = sin(r)/r surface.
//!
//! The pipeline is strictly one way:
//! - [`sampler`] evaluates the height function
//! - [`projection`] maps grid corners onto the canvas
//! - [`shading`] filters degenerate cells and picks fill colours
//! - [`surface`] walks the grid and streams polygons
//! - [`svg`] writes the document envelope

pub mod canvas;
pub mod error;
pub mod projection;
pub mod sampler;
pub mod shading;
pub mod surface;
pub mod svg;

pub use canvas::Canvas;
pub use error::{RenderError, RenderResult};
pub use projection::{GridPoint, Projector};
pub use shading::Fill;
pub use surface::{CellPolygon, RenderSummary, RenderedSurface, SurfaceBuilder};
