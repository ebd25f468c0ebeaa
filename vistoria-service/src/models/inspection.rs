use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    #[default]
    Draft,
    Scheduled,
    InProgress,
    InReview,
    Completed,
    Reviewed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    pub id: i64,
    pub protocol_number: String,
    /// Technician assigned to the visit
    pub user_id: i64,
    pub client_id: i64,
    pub project_id: i64,
    pub status: InspectionStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub roof_model: Option<String>,
    pub quantity: Option<i64>,
    /// Roof area in m²
    pub area: Option<i64>,
    pub installation_date: Option<DateTime<Utc>>,
    /// Warranty period in years
    pub warranty: Option<String>,
    pub invoice: Option<String>,
    pub technical_analysis: Option<serde_json::Value>,
    pub conclusion: Option<String>,
    pub recommendation: Option<String>,
    pub signature: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
