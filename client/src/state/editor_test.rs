use super::*;

fn response(lines: &[&str]) -> GenerateResponse {
    GenerateResponse {
        alternatives: lines.iter().map(|s| (*s).to_owned()).collect(),
        temperatures: vec![0.1, 0.5, 0.9, 1.2, 1.5][..lines.len()].to_vec(),
    }
}

#[test]
fn new_poem_id_is_short_and_filename_safe() {
    let id = new_poem_id();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_ne!(id, new_poem_id());
}

#[test]
fn from_content_splits_lines() {
    let state = EditorState::from_content("abc", "one\ntwo\nthree");
    assert_eq!(state.poem_id, "abc");
    assert_eq!(state.lines, vec!["one", "two", "three"]);
    assert!(!state.dirty);
}

#[test]
fn context_text_appends_draft() {
    let mut state = EditorState::from_content("p", "roses are red");
    assert_eq!(state.context_text(), "roses are red");
    state.draft = "violets  ".to_owned();
    assert_eq!(state.context_text(), "roses are red\nviolets");
}

#[test]
fn context_text_with_only_draft() {
    let state = EditorState { draft: "first".to_owned(), ..EditorState::default() };
    assert_eq!(state.context_text(), "first");
}

#[test]
fn set_alternatives_zips_temperatures() {
    let mut state = EditorState { generating: true, ..EditorState::default() };
    state.set_alternatives(response(&["a", "b"]));
    assert!(!state.generating);
    assert_eq!(state.alternatives.len(), 2);
    assert_eq!(state.alternatives[1], Alternative { text: "b".to_owned(), temperature: 0.5 });
}

#[test]
fn accept_commits_line_and_returns_preference() {
    let mut state = EditorState::from_content("p", "line one");
    state.set_alternatives(response(&[" next a", "next b"]));

    let record = state.accept(0).unwrap();
    assert_eq!(record.current_text, "line one");
    assert_eq!(record.alternatives, vec![" next a", "next b"]);
    assert_eq!(record.chosen, " next a");

    assert_eq!(state.lines, vec!["line one", "next a"]);
    assert!(state.alternatives.is_empty());
    assert!(state.dirty);
}

#[test]
fn accept_commits_pending_draft_first() {
    let mut state = EditorState::from_content("p", "one");
    state.draft = "two".to_owned();
    state.set_alternatives(response(&["three"]));

    let record = state.accept(0).unwrap();
    assert_eq!(record.current_text, "one\ntwo");
    assert_eq!(state.lines, vec!["one", "two", "three"]);
    assert!(state.draft.is_empty());
}

#[test]
fn accept_out_of_range_is_none() {
    let mut state = EditorState::default();
    state.set_alternatives(response(&["x"]));
    assert!(state.accept(3).is_none());
    assert_eq!(state.alternatives.len(), 1);
}

#[test]
fn accept_draft_ignores_blank() {
    let mut state = EditorState { draft: "   ".to_owned(), ..EditorState::default() };
    assert!(!state.accept_draft());
    assert!(state.lines.is_empty());
    assert!(state.draft.is_empty());
    assert!(!state.dirty);
}

#[test]
fn remove_line_bounds_checked() {
    let mut state = EditorState::from_content("p", "a\nb");
    assert_eq!(state.remove_line(0).as_deref(), Some("a"));
    assert_eq!(state.remove_line(5), None);
    assert_eq!(state.lines, vec!["b"]);
}

#[test]
fn toggle_fullscreen_flips() {
    let mut state = EditorState::default();
    assert!(state.toggle_fullscreen());
    assert!(!state.toggle_fullscreen());
}

#[test]
fn can_save_requires_text() {
    let mut state = EditorState::default();
    assert!(!state.can_save());
    state.draft = "x".to_owned();
    assert!(state.can_save());
}

#[test]
fn saved_poem_is_not_reloaded_under_its_own_route() {
    let mut state = EditorState::new_poem();
    state.draft = "first line".to_owned();
    state.accept_draft();
    let id = state.poem_id.clone();
    assert!(!state.needs_load(&id));
    assert_eq!(state.lines, vec!["first line"]);
    assert!(state.needs_load("someone_else"));
}
