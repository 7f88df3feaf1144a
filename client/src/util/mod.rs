//! Browser helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Local storage access and the auth token live here so pages never touch
//! `web_sys` directly.

pub mod auth;
pub mod storage;
