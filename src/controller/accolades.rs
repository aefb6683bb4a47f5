use crate::controller::provider::StatsClient;
use log::warn;
use serde_json::{Map, Value};
use std::path::Path;

/// Reads the hand-maintained accolades file. Missing or corrupt files are
/// worth a warning but never an error; the endpoint just serves empty lists.
pub fn load_accolades(path: &Path) -> Map<String, Value> {
    if !path.exists() {
        return Map::new();
    }
    match std::fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<Map<String, Value>>(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!("failed to parse accolades file {}: {e}", path.display());
                Map::new()
            }
        },
        Err(e) => {
            warn!("failed to read accolades file {}: {e}", path.display());
            Map::new()
        }
    }
}

/// Looks a player up by id first, then by display name via the provider's
/// player-info endpoint. Anything that goes wrong resolves to an empty list.
pub async fn accolades_for_player(
    path: &Path,
    player_id: i64,
    provider: &StatsClient,
) -> Vec<Value> {
    let accolades = load_accolades(path);
    if accolades.is_empty() {
        return Vec::new();
    }

    if let Some(found) = accolades.get(&player_id.to_string()) {
        return as_list(found);
    }

    match provider.player_info(player_id).await {
        Ok(records) => {
            let name = records
                .first()
                .and_then(|r| r.get("DISPLAY_FIRST_LAST"))
                .and_then(Value::as_str);
            if let Some(found) = name.and_then(|n| accolades.get(n)) {
                return as_list(found);
            }
            Vec::new()
        }
        Err(_) => Vec::new(),
    }
}

fn as_list(value: &Value) -> Vec<Value> {
    value.as_array().cloned().unwrap_or_default()
}
