use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Skater and goalie rows for one club, passed through as the provider
/// sends them. Both arrays are required; a payload without them is rejected
/// at deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerStatsBundle {
    pub skaters: Vec<Value>,
    pub goalies: Vec<Value>,
}
