use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEvidenceRequest {
    pub inspection_id: i64,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub kind: String,
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub file_url: String,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvidenceRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub file_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EvidenceListParams {
    pub inspection_id: Option<i64>,
}
