//! Surface API Service Library
//!
//! HTTP layer serving the rendered sin(r)/r surface as SVG.

pub mod handlers;
pub mod metrics;
pub mod params;
pub mod routes;
pub mod state;
