use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is the key of the store's
/// mapping, not a field here, so `GET /activities` serializes straight to an
/// object keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
