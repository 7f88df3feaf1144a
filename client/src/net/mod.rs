//! Network layer: REST helpers and wire types for the `/api` surface.

pub mod api;
pub mod types;
