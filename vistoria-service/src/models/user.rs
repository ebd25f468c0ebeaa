use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    // Never leaves the process
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
}
