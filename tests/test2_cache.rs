use gametrack::cache::TtlCache;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn cached_value_is_returned_unchanged_before_the_ttl_elapses() {
    let cache = TtlCache::new();
    let value = json!({"games": [{"gameId": "1"}]});

    cache.set("scoreboard", value.clone(), 60).await;
    assert_eq!(cache.get("scoreboard").await, Some(value));
}

#[tokio::test]
async fn entry_expires_once_the_ttl_has_passed() {
    let cache = TtlCache::new();
    cache.set("standings", json!({"east": []}), 1).await;

    assert!(cache.get("standings").await.is_some());
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(cache.get("standings").await, None);
}

#[tokio::test]
async fn zero_ttl_entries_are_already_expired() {
    let cache = TtlCache::new();
    cache.set("teams", json!([]), 0).await;
    assert_eq!(cache.get("teams").await, None);
}

#[tokio::test]
async fn missing_key_is_empty_and_keys_do_not_collide() {
    let cache = TtlCache::new();
    cache.set("teams", json!(["a"]), 60).await;

    assert_eq!(cache.get("leaders_home").await, None);
    assert_eq!(cache.get("teams").await, Some(json!(["a"])));
}

#[tokio::test]
async fn set_overwrites_the_previous_entry() {
    let cache = TtlCache::new();
    cache.set("scoreboard", json!({"games": []}), 60).await;
    cache.set("scoreboard", json!({"games": ["x"]}), 60).await;

    assert_eq!(cache.get("scoreboard").await, Some(json!({"games": ["x"]})));
}
