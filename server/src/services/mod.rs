//! Domain services behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Services own file formats and model calls; routes only translate between
//! JSON bodies and these calls.

pub mod generation;
pub mod poems;
pub mod preferences;
