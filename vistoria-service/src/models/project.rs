use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A site (empreendimento) belonging to a client; inspections happen here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub address: String,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
