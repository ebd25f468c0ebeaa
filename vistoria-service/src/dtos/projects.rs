use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    pub client_id: i64,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    pub zip_code: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub client_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub client_id: Option<i64>,
}
