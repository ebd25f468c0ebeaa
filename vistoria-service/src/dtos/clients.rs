use crate::models::ClientType;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ClientType,
    pub document: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ClientType>,
    pub document: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub email: Option<String>,
}
