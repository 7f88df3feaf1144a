//! Poem editor state.
//!
//! DESIGN
//! ======
//! The poem is a list of committed lines plus a free-text draft. Generation
//! runs on the committed text and the draft together; choosing an
//! alternative commits it as a new line and yields the preference record the
//! page sends to the server.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::{GenerateResponse, PreferenceRecord};

const POEM_ID_LEN: usize = 12;

/// One generated candidate line.
#[derive(Clone, Debug, PartialEq)]
pub struct Alternative {
    pub text: String,
    pub temperature: f64,
}

#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub poem_id: String,
    pub lines: Vec<String>,
    pub draft: String,
    pub alternatives: Vec<Alternative>,
    pub generating: bool,
    pub saving: bool,
    pub loading: bool,
    pub fullscreen: bool,
    pub dirty: bool,
}

impl EditorState {
    /// Fresh editor with a newly minted poem id.
    pub fn new_poem() -> Self {
        Self { poem_id: new_poem_id(), ..Self::default() }
    }

    /// Editor for an existing poem's stored content.
    pub fn from_content(poem_id: &str, content: &str) -> Self {
        Self { poem_id: poem_id.to_owned(), lines: content.lines().map(str::to_owned).collect(), ..Self::default() }
    }

    pub fn poem_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Text sent for generation: committed lines followed by a non-empty draft.
    pub fn context_text(&self) -> String {
        let draft = self.draft.trim_end();
        match (self.lines.is_empty(), draft.is_empty()) {
            (_, true) => self.poem_text(),
            (true, false) => draft.to_owned(),
            (false, false) => format!("{}\n{draft}", self.poem_text()),
        }
    }

    pub fn set_alternatives(&mut self, response: GenerateResponse) {
        self.alternatives = response
            .alternatives
            .into_iter()
            .zip(response.temperatures)
            .map(|(text, temperature)| Alternative { text, temperature })
            .collect();
        self.generating = false;
    }

    /// Commit the alternative at `index` and return the preference to record.
    ///
    /// The draft, if any, is committed first so the chosen line follows it.
    pub fn accept(&mut self, index: usize) -> Option<PreferenceRecord> {
        let chosen = self.alternatives.get(index)?.text.clone();
        let record = PreferenceRecord {
            current_text: self.context_text(),
            alternatives: self.alternatives.iter().map(|a| a.text.clone()).collect(),
            chosen: chosen.clone(),
        };
        self.accept_draft();
        self.lines.push(chosen.trim().to_owned());
        self.alternatives.clear();
        self.dirty = true;
        Some(record)
    }

    /// Commit the draft as a line. Returns `false` for a blank draft.
    pub fn accept_draft(&mut self) -> bool {
        let draft = self.draft.trim_end();
        if draft.trim().is_empty() {
            self.draft.clear();
            return false;
        }
        self.lines.push(draft.to_owned());
        self.draft.clear();
        self.dirty = true;
        true
    }

    pub fn remove_line(&mut self, index: usize) -> Option<String> {
        if index >= self.lines.len() {
            return None;
        }
        self.dirty = true;
        Some(self.lines.remove(index))
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Whether routing to `poem_id` should fetch it from the server.
    pub fn needs_load(&self, poem_id: &str) -> bool {
        self.poem_id != poem_id
    }

    /// Whether there is anything worth saving.
    pub fn can_save(&self) -> bool {
        !self.context_text().trim().is_empty()
    }
}

/// Random lowercase hex id, safe for use inside server file names.
pub fn new_poem_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(POEM_ID_LEN);
    id
}
