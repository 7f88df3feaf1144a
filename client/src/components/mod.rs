//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render editor chrome and feedback surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod icons;
pub mod line_picker;
pub mod toast_host;
