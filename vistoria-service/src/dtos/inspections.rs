use crate::models::InspectionStatus;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInspectionRequest {
    #[validate(length(min = 1))]
    pub protocol_number: String,
    pub user_id: i64,
    pub client_id: i64,
    pub project_id: i64,
    #[serde(default)]
    pub status: InspectionStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub roof_model: Option<String>,
    pub quantity: Option<i64>,
    pub area: Option<i64>,
    pub installation_date: Option<DateTime<Utc>>,
    pub warranty: Option<String>,
    pub invoice: Option<String>,
    pub technical_analysis: Option<serde_json::Value>,
    pub conclusion: Option<String>,
    pub recommendation: Option<String>,
    pub signature: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateInspectionRequest {
    pub protocol_number: Option<String>,
    pub user_id: Option<i64>,
    pub client_id: Option<i64>,
    pub project_id: Option<i64>,
    pub status: Option<InspectionStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub roof_model: Option<String>,
    pub quantity: Option<i64>,
    pub area: Option<i64>,
    pub installation_date: Option<DateTime<Utc>>,
    pub warranty: Option<String>,
    pub invoice: Option<String>,
    pub technical_analysis: Option<serde_json::Value>,
    pub conclusion: Option<String>,
    pub recommendation: Option<String>,
    pub signature: Option<String>,
}

/// Filters applied with first-match precedence: user, client, project,
/// status.
#[derive(Debug, Deserialize)]
pub struct InspectionListParams {
    pub user_id: Option<i64>,
    pub client_id: Option<i64>,
    pub project_id: Option<i64>,
    pub status: Option<InspectionStatus>,
}
