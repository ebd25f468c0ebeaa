use crate::models::{Client, ClientType, Evidence, Inspection, InspectionStatus, Project, User};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Full report payload joining the inspection with its related records.
/// Sections are null when the referenced record is missing; the integrity
/// pass warns about those at startup but requests still succeed.
#[derive(Debug, Serialize)]
pub struct InspectionReport {
    pub id: i64,
    pub protocol_number: String,
    pub status: InspectionStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client: Option<ReportClient>,
    pub project: Option<ReportSite>,
    pub product: ReportProduct,
    pub technician: Option<ReportTechnician>,
    pub conclusion: Option<String>,
    pub recommendation: Option<String>,
    pub evidences: Vec<ReportEvidence>,
}

impl InspectionReport {
    pub fn assemble(
        inspection: Inspection,
        client: Option<Client>,
        project: Option<Project>,
        technician: Option<User>,
        evidences: Vec<Evidence>,
    ) -> Self {
        Self {
            id: inspection.id,
            protocol_number: inspection.protocol_number,
            status: inspection.status,
            scheduled_date: inspection.scheduled_date,
            start_time: inspection.start_time,
            end_time: inspection.end_time,
            created_at: inspection.created_at,
            updated_at: inspection.updated_at,
            client: client.map(ReportClient::from),
            project: project.map(ReportSite::from),
            product: ReportProduct {
                roof_model: inspection.roof_model,
                quantity: inspection.quantity,
                area: inspection.area,
                installation_date: inspection.installation_date,
                warranty: inspection.warranty,
            },
            technician: technician.map(ReportTechnician::from),
            conclusion: inspection.conclusion,
            recommendation: inspection.recommendation,
            evidences: evidences.into_iter().map(ReportEvidence::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportClient {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ClientType,
    pub document: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub email: Option<String>,
}

impl From<Client> for ReportClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            kind: client.kind,
            document: client.document,
            contact_name: client.contact_name,
            contact_phone: client.contact_phone,
            email: client.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportSite {
    pub id: i64,
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
}

impl From<Project> for ReportSite {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            address: project.address,
            number: project.number,
            complement: project.complement,
            neighborhood: project.neighborhood,
            city: project.city,
            state: project.state,
            zip_code: project.zip_code,
            latitude: project.latitude,
            longitude: project.longitude,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportProduct {
    pub roof_model: Option<String>,
    pub quantity: Option<i64>,
    pub area: Option<i64>,
    pub installation_date: Option<DateTime<Utc>>,
    pub warranty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportTechnician {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for ReportTechnician {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportEvidence {
    pub id: i64,
    pub file_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Evidence> for ReportEvidence {
    fn from(evidence: Evidence) -> Self {
        Self {
            id: evidence.id,
            file_url: evidence.file_url,
            kind: evidence.kind,
            category: evidence.category,
            notes: evidence.notes,
            created_at: evidence.created_at,
        }
    }
}

/// Result of a generate-report request.
#[derive(Debug, Serialize)]
pub struct GeneratedReport {
    pub id: String,
    pub inspection_id: i64,
    pub generated_at: DateTime<Utc>,
    pub download_url: String,
    pub status: String,
}
