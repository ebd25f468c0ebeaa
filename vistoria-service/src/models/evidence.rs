use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Photo or document attached to an inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub id: i64,
    pub inspection_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    /// Non-conformity category, when applicable
    pub category: Option<String>,
    pub file_url: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
