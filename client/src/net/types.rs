//! Wire types exchanged with the server's `/api` routes.
//!
//! Field names match the JSON bodies the server reads and writes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub current_text: String,
}

/// Candidate lines, index-aligned with the temperature that produced them.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub alternatives: Vec<String>,
    pub temperatures: Vec<f64>,
}

/// Which alternative the writer picked, logged for later tuning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferenceRecord {
    pub current_text: String,
    pub alternatives: Vec<String>,
    pub chosen: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavePoemRequest {
    pub id: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavePoemResponse {
    pub status: String,
    pub id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoemSummary {
    pub id: String,
    pub first_line: String,
    pub created: String,
    pub filename: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoemContent {
    pub content: String,
}

/// Error body returned by every failing `/api` route.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}
