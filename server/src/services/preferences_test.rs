use super::*;

fn record(chosen: &str) -> PreferenceRecord {
    PreferenceRecord {
        current_text: "the sea".into(),
        alternatives: vec!["a".into(), "b".into(), chosen.into()],
        chosen: chosen.into(),
    }
}

#[tokio::test]
async fn read_before_any_append_is_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let log = PreferenceLog::new(tmp.path().join(PREFERENCES_FILE_NAME));
    assert!(matches!(log.read_all().await, Err(PreferenceError::Missing)));
}

#[tokio::test]
async fn append_writes_one_json_object_per_line() {
    let tmp = tempfile::tempdir().unwrap();
    let log = PreferenceLog::new(tmp.path().join("nested").join(PREFERENCES_FILE_NAME));

    log.append(&record("first")).await.unwrap();
    log.append(&record("second\nwith newline")).await.unwrap();

    let bytes = log.read_all().await.unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: Vec<PreferenceRecord> = lines.iter().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(parsed[0], record("first"));
    assert_eq!(parsed[1].chosen, "second\nwith newline");
}

#[tokio::test]
async fn concurrent_appends_do_not_interleave() {
    let tmp = tempfile::tempdir().unwrap();
    let log = std::sync::Arc::new(PreferenceLog::new(tmp.path().join(PREFERENCES_FILE_NAME)));

    let mut handles = Vec::new();
    for i in 0..20 {
        let log = log.clone();
        handles.push(tokio::spawn(async move { log.append(&record(&format!("line {i}"))).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let text = String::from_utf8(log.read_all().await.unwrap()).unwrap();
    assert_eq!(text.lines().count(), 20);
    assert!(text.lines().all(|l| serde_json::from_str::<PreferenceRecord>(l).is_ok()));
}
