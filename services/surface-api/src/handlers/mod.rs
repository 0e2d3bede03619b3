//! HTTP request handlers for the surface API.

pub mod health;
pub mod surface;
