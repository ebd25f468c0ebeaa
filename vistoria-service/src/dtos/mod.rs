pub mod clients;
pub mod evidences;
pub mod inspections;
pub mod projects;
pub mod reports;

pub use clients::{CreateClientRequest, UpdateClientRequest};
pub use evidences::{CreateEvidenceRequest, EvidenceListParams, UpdateEvidenceRequest};
pub use inspections::{CreateInspectionRequest, InspectionListParams, UpdateInspectionRequest};
pub use projects::{CreateProjectRequest, ProjectListParams, UpdateProjectRequest};
pub use reports::{GeneratedReport, InspectionReport};
