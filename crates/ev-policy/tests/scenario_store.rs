use chrono::{TimeZone, Utc};
use ev_policy::policy::{
    JsonFileSink, PolicyDecisionEngine, SaveOutcome, SavedScenario, ScenarioParameters,
    ScenarioStore,
};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ev-policy-{}-{name}.json", std::process::id()))
}

fn save_baseline(store: &mut ScenarioStore<JsonFileSink>, name: &str) -> SaveOutcome {
    let engine = PolicyDecisionEngine::default();
    let scenario = ScenarioParameters::baseline();
    let assessment = engine.assess(&scenario);
    let recommendations = engine.recommend(&scenario, &assessment);
    let timestamp = Utc
        .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    store.save_at(name, scenario, assessment, recommendations, timestamp)
}

#[test]
fn json_sink_rewrites_the_whole_list_on_each_save() {
    let path = scratch_path("rewrite");
    let mut store = ScenarioStore::new(JsonFileSink::new(&path));

    assert_eq!(save_baseline(&mut store, "first"), SaveOutcome::Saved);
    assert_eq!(save_baseline(&mut store, "second"), SaveOutcome::Saved);

    let raw = std::fs::read_to_string(&path).expect("store file written");
    let saved: Vec<SavedScenario> = serde_json::from_str(&raw).expect("saved list parses");
    std::fs::remove_file(&path).ok();

    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].name, "first");
    assert_eq!(saved[1].name, "second");
    assert_eq!(saved[0].timestamp.to_rfc3339(), "2025-03-14T09:30:00+00:00");
    assert_eq!(saved[1].data, ScenarioParameters::baseline());
    assert_eq!(saved[1].recommendations.len(), 2);
    assert!(raw.contains("\"timestamp\": \"2025-03-14T09:30:00Z\""));
}

#[test]
fn unwritable_path_keeps_entry_in_memory() {
    let path = std::env::temp_dir()
        .join("ev-policy-missing-dir")
        .join("nested")
        .join("saved.json");
    let mut store = ScenarioStore::new(JsonFileSink::new(&path));

    let outcome = save_baseline(&mut store, "offline");

    match outcome {
        SaveOutcome::SaveFailed(reason) => assert!(reason.contains("saved.json")),
        SaveOutcome::Saved => panic!("write into a missing directory should fail"),
    }
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries()[0].name, "offline");
}
