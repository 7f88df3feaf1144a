//! Client-side reactive state models.
//!
//! DESIGN
//! ======
//! Plain data structs wrapped in `RwSignal` and provided via context by
//! `app::App`. Keeping them signal-free makes the transition logic testable
//! without a reactive runtime.

pub mod editor;
pub mod toast;
