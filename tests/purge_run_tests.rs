use docpurge::config::Config;
use docpurge::store::InMemoryStore;
use docpurge::{PurgeError, purge};

fn parsed_config() -> Config {
    let config: Config = toml::from_str(
        r#"
        [firestore]
        project_id = "demo"

        [purge]
        total_limit = 500

        [[purge.collections]]
        name = "events"
        collection = "analytics_events"

        [[purge.collections]]
        name = "sessions"
        collection = "user_sessions"

        [[purge.collections]]
        name = "audit"
        collection = "audit_log"
        "#,
    )
    .unwrap();
    config.validate().unwrap();
    config
}

#[tokio::test]
async fn a_configured_run_spreads_the_limit_across_collections() {
    let store = InMemoryStore::new();
    store.seed("analytics_events", 300).await;
    store.seed("user_sessions", 300).await;
    store.seed("audit_log", 300).await;

    let config = parsed_config();
    let report = purge::run(&store, &config.purge).await.unwrap();

    assert_eq!(report.total_deleted, 500);
    assert_eq!(store.count("analytics_events").await, 0);
    assert_eq!(store.count("user_sessions").await, 100);
    // Untouched: the global limit was consumed before this collection.
    assert_eq!(store.count("audit_log").await, 300);
}

#[tokio::test]
async fn a_second_run_finds_what_is_left() {
    let store = InMemoryStore::new();
    store.seed("analytics_events", 300).await;
    store.seed("user_sessions", 300).await;
    store.seed("audit_log", 300).await;

    let config = parsed_config();
    purge::run(&store, &config.purge).await.unwrap();
    let second = purge::run(&store, &config.purge).await.unwrap();

    assert_eq!(second.total_deleted, 400);
    assert_eq!(store.count("user_sessions").await, 0);
    assert_eq!(store.count("audit_log").await, 0);

    let third = purge::run(&store, &config.purge).await.unwrap();
    assert_eq!(third.total_deleted, 0);
}

#[test]
fn config_validation_catches_a_missing_project() {
    let config: Config = toml::from_str(
        r#"
        [purge]
        total_limit = 10
        "#,
    )
    .unwrap();

    assert!(matches!(config.validate(), Err(PurgeError::Config(_))));
}
