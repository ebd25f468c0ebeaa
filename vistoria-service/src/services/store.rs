use crate::dtos::{
    CreateClientRequest, CreateEvidenceRequest, CreateInspectionRequest, CreateProjectRequest,
    UpdateClientRequest, UpdateEvidenceRequest, UpdateInspectionRequest, UpdateProjectRequest,
};
use crate::models::{Client, ClientType, Evidence, Inspection, InspectionStatus, Project, User};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;
use service_core::error::AppError;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Per-table record counts after a reset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResetSummary {
    pub users: usize,
    pub clients: usize,
    pub projects: usize,
    pub inspections: usize,
    pub evidences: usize,
}

/// Persistence seam for the document API. One implementation today
/// (in-process memory); handlers only see the trait object.
#[async_trait]
pub trait Store: Send + Sync {
    async fn user(&self, id: i64) -> Option<User>;

    async fn client(&self, id: i64) -> Option<Client>;
    async fn clients(&self) -> Vec<Client>;
    async fn create_client(&self, req: CreateClientRequest) -> Client;
    async fn update_client(&self, id: i64, req: UpdateClientRequest) -> Option<Client>;

    async fn project(&self, id: i64) -> Option<Project>;
    async fn projects(&self) -> Vec<Project>;
    async fn projects_by_client(&self, client_id: i64) -> Vec<Project>;
    async fn create_project(&self, req: CreateProjectRequest) -> Project;
    async fn update_project(&self, id: i64, req: UpdateProjectRequest) -> Option<Project>;

    async fn inspection(&self, id: i64) -> Option<Inspection>;
    async fn inspections(&self) -> Vec<Inspection>;
    async fn inspections_by_user(&self, user_id: i64) -> Vec<Inspection>;
    async fn inspections_by_client(&self, client_id: i64) -> Vec<Inspection>;
    async fn inspections_by_project(&self, project_id: i64) -> Vec<Inspection>;
    async fn inspections_by_status(&self, status: InspectionStatus) -> Vec<Inspection>;
    async fn create_inspection(&self, req: CreateInspectionRequest)
        -> Result<Inspection, AppError>;
    async fn update_inspection(
        &self,
        id: i64,
        req: UpdateInspectionRequest,
    ) -> Result<Option<Inspection>, AppError>;

    async fn evidence(&self, id: i64) -> Option<Evidence>;
    async fn evidences_by_inspection(&self, inspection_id: i64) -> Vec<Evidence>;
    async fn create_evidence(&self, req: CreateEvidenceRequest) -> Evidence;
    async fn update_evidence(&self, id: i64, req: UpdateEvidenceRequest) -> Option<Evidence>;
    async fn delete_evidence(&self, id: i64) -> bool;

    /// Dangling inspection references, one message per problem. Logged at
    /// startup; never fails the process.
    async fn integrity_issues(&self) -> Vec<String>;
    /// Drop everything and restore the seed dataset.
    async fn reset(&self) -> ResetSummary;
}

pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new(seed: bool) -> Self {
        let tables = if seed { Tables::seeded() } else { Tables::new() };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

struct Tables {
    users: HashMap<i64, User>,
    clients: HashMap<i64, Client>,
    projects: HashMap<i64, Project>,
    inspections: HashMap<i64, Inspection>,
    evidences: HashMap<i64, Evidence>,
    next_user_id: i64,
    next_client_id: i64,
    next_project_id: i64,
    next_inspection_id: i64,
    next_evidence_id: i64,
}

impl Tables {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            clients: HashMap::new(),
            projects: HashMap::new(),
            inspections: HashMap::new(),
            evidences: HashMap::new(),
            next_user_id: 1,
            next_client_id: 1,
            next_project_id: 1,
            next_inspection_id: 1,
            next_evidence_id: 1,
        }
    }

    fn insert_user(
        &mut self,
        username: &str,
        password: &str,
        name: &str,
        email: &str,
        role: &str,
    ) -> i64 {
        let id = self.next_user_id;
        self.next_user_id += 1;
        self.users.insert(
            id,
            User {
                id,
                username: username.to_string(),
                password: password.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                role: role.to_string(),
                avatar: None,
            },
        );
        id
    }

    fn insert_client(&mut self, req: CreateClientRequest) -> Client {
        let id = self.next_client_id;
        self.next_client_id += 1;
        let now = Utc::now();
        let client = Client {
            id,
            name: req.name,
            kind: req.kind,
            document: req.document,
            contact_name: req.contact_name,
            contact_phone: req.contact_phone,
            email: req.email,
            created_at: now,
            updated_at: now,
        };
        self.clients.insert(id, client.clone());
        client
    }

    fn insert_project(&mut self, req: CreateProjectRequest) -> Project {
        let id = self.next_project_id;
        self.next_project_id += 1;
        let now = Utc::now();
        let project = Project {
            id,
            client_id: req.client_id,
            name: req.name,
            address: req.address,
            number: req.number,
            complement: req.complement,
            neighborhood: req.neighborhood,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            latitude: req.latitude,
            longitude: req.longitude,
            created_at: now,
            updated_at: now,
        };
        self.projects.insert(id, project.clone());
        project
    }

    /// Reference checks are the caller's concern; seed data goes through
    /// here unchecked.
    fn insert_inspection(&mut self, req: CreateInspectionRequest) -> Inspection {
        let id = self.next_inspection_id;
        self.next_inspection_id += 1;
        let now = Utc::now();
        let inspection = Inspection {
            id,
            protocol_number: req.protocol_number,
            user_id: req.user_id,
            client_id: req.client_id,
            project_id: req.project_id,
            status: req.status,
            scheduled_date: req.scheduled_date,
            start_time: req.start_time,
            end_time: req.end_time,
            roof_model: req.roof_model,
            quantity: req.quantity,
            area: req.area,
            installation_date: req.installation_date,
            warranty: req.warranty,
            invoice: req.invoice,
            technical_analysis: req.technical_analysis,
            conclusion: req.conclusion,
            recommendation: req.recommendation,
            signature: req.signature,
            created_at: now,
            updated_at: now,
        };
        self.inspections.insert(id, inspection.clone());
        inspection
    }

    fn insert_evidence(&mut self, req: CreateEvidenceRequest) -> Evidence {
        let id = self.next_evidence_id;
        self.next_evidence_id += 1;
        let evidence = Evidence {
            id,
            inspection_id: req.inspection_id,
            kind: req.kind,
            category: req.category,
            file_url: req.file_url,
            notes: req.notes,
            created_at: Utc::now(),
        };
        self.evidences.insert(id, evidence.clone());
        evidence
    }

    /// Sample dataset the dev server starts with: the field team's demo
    /// users, three clients with one site each, and six visits in various
    /// stages.
    fn seeded() -> Self {
        let mut tables = Tables::new();

        tables.insert_user(
            "tecnico",
            "senha123",
            "João da Silva",
            "joao@brasilit.com",
            "technician",
        );
        tables.insert_user("admin", "admin123", "Admin", "admin@brasilit.com", "admin");

        let client1 = tables
            .insert_client(CreateClientRequest {
                name: "Condomínio Solar das Flores".to_string(),
                kind: ClientType::Company,
                document: Some("12.345.678/0001-90".to_string()),
                contact_name: Some("Pedro Santos".to_string()),
                contact_phone: Some("(11) 98765-4321".to_string()),
                email: Some("contato@solardasflores.com.br".to_string()),
            })
            .id;

        let client2 = tables
            .insert_client(CreateClientRequest {
                name: "Residencial Vila Nova".to_string(),
                kind: ClientType::Company,
                document: Some("23.456.789/0001-12".to_string()),
                contact_name: Some("Maria Oliveira".to_string()),
                contact_phone: Some("(11) 97654-3210".to_string()),
                email: Some("contato@vilanovo.com.br".to_string()),
            })
            .id;

        let client3 = tables
            .insert_client(CreateClientRequest {
                name: "Escola Municipal Monteiro Lobato".to_string(),
                kind: ClientType::Company,
                document: Some("34.567.890/0001-23".to_string()),
                contact_name: Some("José Pereira".to_string()),
                contact_phone: Some("(11) 96543-2109".to_string()),
                email: Some("contato@escolamonteiro.edu.br".to_string()),
            })
            .id;

        let project1 = tables
            .insert_project(CreateProjectRequest {
                client_id: client1,
                name: "Condomínio Solar das Flores".to_string(),
                address: "Av. Paulista".to_string(),
                number: Some("1000".to_string()),
                complement: Some("Bloco A".to_string()),
                neighborhood: Some("Bela Vista".to_string()),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: Some("01310-000".to_string()),
                latitude: Some("-23.5630".to_string()),
                longitude: Some("-46.6543".to_string()),
            })
            .id;

        let project2 = tables
            .insert_project(CreateProjectRequest {
                client_id: client2,
                name: "Residencial Vila Nova".to_string(),
                address: "Rua das Flores".to_string(),
                number: Some("123".to_string()),
                complement: None,
                neighborhood: Some("Centro".to_string()),
                city: "Campinas".to_string(),
                state: "SP".to_string(),
                zip_code: Some("13010-000".to_string()),
                latitude: Some("-22.9064".to_string()),
                longitude: Some("-47.0616".to_string()),
            })
            .id;

        let project3 = tables
            .insert_project(CreateProjectRequest {
                client_id: client3,
                name: "Escola Municipal Monteiro Lobato".to_string(),
                address: "Av. Brasil".to_string(),
                number: Some("500".to_string()),
                complement: None,
                neighborhood: Some("Jardim América".to_string()),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: Some("01430-000".to_string()),
                latitude: Some("-23.5728".to_string()),
                longitude: Some("-46.6444".to_string()),
            })
            .id;

        tables.insert_inspection(CreateInspectionRequest {
            protocol_number: "VT-2023-0782".to_string(),
            user_id: 1,
            client_id: client1,
            project_id: project1,
            status: InspectionStatus::Completed,
            scheduled_date: Some(seed_date(2023, 4, 22, 14, 30)),
            start_time: Some(seed_date(2023, 4, 22, 14, 30)),
            end_time: Some(seed_date(2023, 4, 22, 16, 0)),
            roof_model: Some("Telha Ondulada".to_string()),
            quantity: Some(250),
            area: Some(500),
            installation_date: Some(seed_date(2021, 8, 15, 0, 0)),
            warranty: Some("7".to_string()),
            invoice: None,
            technical_analysis: None,
            conclusion: Some("Aprovado".to_string()),
            recommendation: Some("Manutenção preventiva anual".to_string()),
            signature: None,
        });

        tables.insert_inspection(CreateInspectionRequest {
            protocol_number: "VT-2023-0781".to_string(),
            user_id: 1,
            client_id: client2,
            project_id: project2,
            status: InspectionStatus::InReview,
            scheduled_date: Some(seed_date(2023, 4, 21, 9, 0)),
            start_time: Some(seed_date(2023, 4, 21, 9, 0)),
            end_time: Some(seed_date(2023, 4, 21, 10, 30)),
            roof_model: Some("Telha Plana".to_string()),
            quantity: Some(180),
            area: Some(350),
            installation_date: Some(seed_date(2020, 6, 10, 0, 0)),
            warranty: Some("7".to_string()),
            invoice: None,
            technical_analysis: None,
            conclusion: Some("Pendente revisão".to_string()),
            recommendation: Some("Aguardando análise técnica".to_string()),
            signature: None,
        });

        tables.insert_inspection(CreateInspectionRequest {
            protocol_number: "VT-2023-0780".to_string(),
            user_id: 1,
            client_id: client3,
            project_id: project3,
            status: InspectionStatus::InProgress,
            scheduled_date: Some(seed_date(2023, 4, 20, 13, 0)),
            start_time: Some(seed_date(2023, 4, 20, 13, 0)),
            end_time: None,
            roof_model: Some("Fibrocimento".to_string()),
            quantity: Some(300),
            area: Some(600),
            installation_date: Some(seed_date(2019, 12, 5, 0, 0)),
            warranty: Some("5".to_string()),
            invoice: None,
            technical_analysis: None,
            conclusion: None,
            recommendation: None,
            signature: None,
        });

        // Upcoming visits
        let now = Utc::now();
        for (protocol, client_id, project_id, in_hours, roof_model) in [
            ("VT-2023-0783", client1, project1, 1, "Telha Ondulada"),
            ("VT-2023-0784", client2, project2, 24, "Telha Plana"),
            ("VT-2023-0785", client3, project3, 96, "Fibrocimento"),
        ] {
            tables.insert_inspection(CreateInspectionRequest {
                protocol_number: protocol.to_string(),
                user_id: 1,
                client_id,
                project_id,
                status: InspectionStatus::Scheduled,
                scheduled_date: Some(now + Duration::hours(in_hours)),
                start_time: None,
                end_time: None,
                roof_model: Some(roof_model.to_string()),
                quantity: None,
                area: None,
                installation_date: None,
                warranty: None,
                invoice: None,
                technical_analysis: None,
                conclusion: None,
                recommendation: None,
                signature: None,
            });
        }

        tables
    }
}

fn seed_date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}

#[async_trait]
impl Store for MemoryStore {
    async fn user(&self, id: i64) -> Option<User> {
        self.tables.read().await.users.get(&id).cloned()
    }

    async fn client(&self, id: i64) -> Option<Client> {
        self.tables.read().await.clients.get(&id).cloned()
    }

    async fn clients(&self) -> Vec<Client> {
        let tables = self.tables.read().await;
        let mut clients: Vec<Client> = tables.clients.values().cloned().collect();
        clients.sort_by_key(|c| c.id);
        clients
    }

    async fn create_client(&self, req: CreateClientRequest) -> Client {
        self.tables.write().await.insert_client(req)
    }

    async fn update_client(&self, id: i64, req: UpdateClientRequest) -> Option<Client> {
        let mut tables = self.tables.write().await;
        let client = tables.clients.get_mut(&id)?;
        if let Some(name) = req.name {
            client.name = name;
        }
        if let Some(kind) = req.kind {
            client.kind = kind;
        }
        if let Some(document) = req.document {
            client.document = Some(document);
        }
        if let Some(contact_name) = req.contact_name {
            client.contact_name = Some(contact_name);
        }
        if let Some(contact_phone) = req.contact_phone {
            client.contact_phone = Some(contact_phone);
        }
        if let Some(email) = req.email {
            client.email = Some(email);
        }
        client.updated_at = Utc::now();
        Some(client.clone())
    }

    async fn project(&self, id: i64) -> Option<Project> {
        self.tables.read().await.projects.get(&id).cloned()
    }

    async fn projects(&self) -> Vec<Project> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables.projects.values().cloned().collect();
        projects.sort_by_key(|p| p.id);
        projects
    }

    async fn projects_by_client(&self, client_id: i64) -> Vec<Project> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| p.client_id == client_id)
            .cloned()
            .collect();
        projects.sort_by_key(|p| p.id);
        projects
    }

    async fn create_project(&self, req: CreateProjectRequest) -> Project {
        self.tables.write().await.insert_project(req)
    }

    async fn update_project(&self, id: i64, req: UpdateProjectRequest) -> Option<Project> {
        let mut tables = self.tables.write().await;
        let project = tables.projects.get_mut(&id)?;
        if let Some(client_id) = req.client_id {
            project.client_id = client_id;
        }
        if let Some(name) = req.name {
            project.name = name;
        }
        if let Some(address) = req.address {
            project.address = address;
        }
        if let Some(number) = req.number {
            project.number = Some(number);
        }
        if let Some(complement) = req.complement {
            project.complement = Some(complement);
        }
        if let Some(neighborhood) = req.neighborhood {
            project.neighborhood = Some(neighborhood);
        }
        if let Some(city) = req.city {
            project.city = city;
        }
        if let Some(state) = req.state {
            project.state = state;
        }
        if let Some(zip_code) = req.zip_code {
            project.zip_code = Some(zip_code);
        }
        if let Some(latitude) = req.latitude {
            project.latitude = Some(latitude);
        }
        if let Some(longitude) = req.longitude {
            project.longitude = Some(longitude);
        }
        project.updated_at = Utc::now();
        Some(project.clone())
    }

    async fn inspection(&self, id: i64) -> Option<Inspection> {
        self.tables.read().await.inspections.get(&id).cloned()
    }

    async fn inspections(&self) -> Vec<Inspection> {
        let tables = self.tables.read().await;
        let mut inspections: Vec<Inspection> = tables.inspections.values().cloned().collect();
        inspections.sort_by_key(|i| i.id);
        inspections
    }

    async fn inspections_by_user(&self, user_id: i64) -> Vec<Inspection> {
        self.filtered_inspections(|i| i.user_id == user_id).await
    }

    async fn inspections_by_client(&self, client_id: i64) -> Vec<Inspection> {
        self.filtered_inspections(|i| i.client_id == client_id)
            .await
    }

    async fn inspections_by_project(&self, project_id: i64) -> Vec<Inspection> {
        self.filtered_inspections(|i| i.project_id == project_id)
            .await
    }

    async fn inspections_by_status(&self, status: InspectionStatus) -> Vec<Inspection> {
        self.filtered_inspections(|i| i.status == status).await
    }

    async fn create_inspection(
        &self,
        req: CreateInspectionRequest,
    ) -> Result<Inspection, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.clients.contains_key(&req.client_id) {
            return Err(AppError::NotFound(anyhow::anyhow!(
                "Client with id {} not found",
                req.client_id
            )));
        }
        if !tables.projects.contains_key(&req.project_id) {
            return Err(AppError::NotFound(anyhow::anyhow!(
                "Project with id {} not found",
                req.project_id
            )));
        }
        if tables
            .inspections
            .values()
            .any(|i| i.protocol_number == req.protocol_number)
        {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Protocol number {} already exists",
                req.protocol_number
            )));
        }

        let inspection = tables.insert_inspection(req);
        tracing::debug!(
            inspection_id = inspection.id,
            client_id = inspection.client_id,
            project_id = inspection.project_id,
            "Inspection created"
        );
        Ok(inspection)
    }

    async fn update_inspection(
        &self,
        id: i64,
        req: UpdateInspectionRequest,
    ) -> Result<Option<Inspection>, AppError> {
        let mut tables = self.tables.write().await;

        let (current_client, current_project, current_protocol) =
            match tables.inspections.get(&id) {
                Some(i) => (i.client_id, i.project_id, i.protocol_number.clone()),
                None => return Ok(None),
            };

        if let Some(client_id) = req.client_id {
            if client_id != current_client && !tables.clients.contains_key(&client_id) {
                return Err(AppError::NotFound(anyhow::anyhow!(
                    "Client with id {} not found",
                    client_id
                )));
            }
        }
        if let Some(project_id) = req.project_id {
            if project_id != current_project && !tables.projects.contains_key(&project_id) {
                return Err(AppError::NotFound(anyhow::anyhow!(
                    "Project with id {} not found",
                    project_id
                )));
            }
        }
        if let Some(ref protocol) = req.protocol_number {
            if *protocol != current_protocol
                && tables
                    .inspections
                    .values()
                    .any(|i| i.protocol_number == *protocol)
            {
                return Err(AppError::Conflict(anyhow::anyhow!(
                    "Protocol number {} already exists",
                    protocol
                )));
            }
        }

        let Some(inspection) = tables.inspections.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(protocol_number) = req.protocol_number {
            inspection.protocol_number = protocol_number;
        }
        if let Some(user_id) = req.user_id {
            inspection.user_id = user_id;
        }
        if let Some(client_id) = req.client_id {
            inspection.client_id = client_id;
        }
        if let Some(project_id) = req.project_id {
            inspection.project_id = project_id;
        }
        if let Some(status) = req.status {
            inspection.status = status;
        }
        if let Some(scheduled_date) = req.scheduled_date {
            inspection.scheduled_date = Some(scheduled_date);
        }
        if let Some(start_time) = req.start_time {
            inspection.start_time = Some(start_time);
        }
        if let Some(end_time) = req.end_time {
            inspection.end_time = Some(end_time);
        }
        if let Some(roof_model) = req.roof_model {
            inspection.roof_model = Some(roof_model);
        }
        if let Some(quantity) = req.quantity {
            inspection.quantity = Some(quantity);
        }
        if let Some(area) = req.area {
            inspection.area = Some(area);
        }
        if let Some(installation_date) = req.installation_date {
            inspection.installation_date = Some(installation_date);
        }
        if let Some(warranty) = req.warranty {
            inspection.warranty = Some(warranty);
        }
        if let Some(invoice) = req.invoice {
            inspection.invoice = Some(invoice);
        }
        if let Some(technical_analysis) = req.technical_analysis {
            inspection.technical_analysis = Some(technical_analysis);
        }
        if let Some(conclusion) = req.conclusion {
            inspection.conclusion = Some(conclusion);
        }
        if let Some(recommendation) = req.recommendation {
            inspection.recommendation = Some(recommendation);
        }
        if let Some(signature) = req.signature {
            inspection.signature = Some(signature);
        }
        inspection.updated_at = Utc::now();

        tracing::debug!(
            inspection_id = id,
            client_id = inspection.client_id,
            project_id = inspection.project_id,
            "Inspection updated"
        );
        Ok(Some(inspection.clone()))
    }

    async fn evidence(&self, id: i64) -> Option<Evidence> {
        self.tables.read().await.evidences.get(&id).cloned()
    }

    async fn evidences_by_inspection(&self, inspection_id: i64) -> Vec<Evidence> {
        let tables = self.tables.read().await;
        let mut evidences: Vec<Evidence> = tables
            .evidences
            .values()
            .filter(|e| e.inspection_id == inspection_id)
            .cloned()
            .collect();
        evidences.sort_by_key(|e| e.id);
        evidences
    }

    async fn create_evidence(&self, req: CreateEvidenceRequest) -> Evidence {
        self.tables.write().await.insert_evidence(req)
    }

    async fn update_evidence(&self, id: i64, req: UpdateEvidenceRequest) -> Option<Evidence> {
        let mut tables = self.tables.write().await;
        let evidence = tables.evidences.get_mut(&id)?;
        if let Some(kind) = req.kind {
            evidence.kind = kind;
        }
        if let Some(category) = req.category {
            evidence.category = Some(category);
        }
        if let Some(file_url) = req.file_url {
            evidence.file_url = file_url;
        }
        if let Some(notes) = req.notes {
            evidence.notes = Some(notes);
        }
        Some(evidence.clone())
    }

    async fn delete_evidence(&self, id: i64) -> bool {
        self.tables.write().await.evidences.remove(&id).is_some()
    }

    async fn integrity_issues(&self) -> Vec<String> {
        let tables = self.tables.read().await;
        let mut ids: Vec<i64> = tables.inspections.keys().copied().collect();
        ids.sort_unstable();

        let mut issues = Vec::new();
        for id in ids {
            let inspection = &tables.inspections[&id];
            if !tables.clients.contains_key(&inspection.client_id) {
                issues.push(format!(
                    "inspection {} references missing client {}",
                    id, inspection.client_id
                ));
            }
            if !tables.projects.contains_key(&inspection.project_id) {
                issues.push(format!(
                    "inspection {} references missing project {}",
                    id, inspection.project_id
                ));
            }
        }
        issues
    }

    async fn reset(&self) -> ResetSummary {
        let mut tables = self.tables.write().await;
        *tables = Tables::seeded();
        ResetSummary {
            users: tables.users.len(),
            clients: tables.clients.len(),
            projects: tables.projects.len(),
            inspections: tables.inspections.len(),
            evidences: tables.evidences.len(),
        }
    }
}

impl MemoryStore {
    async fn filtered_inspections<F>(&self, keep: F) -> Vec<Inspection>
    where
        F: Fn(&Inspection) -> bool,
    {
        let tables = self.tables.read().await;
        let mut inspections: Vec<Inspection> = tables
            .inspections
            .values()
            .filter(|i| keep(i))
            .cloned()
            .collect();
        inspections.sort_by_key(|i| i.id);
        inspections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_has_sample_dataset() {
        let store = MemoryStore::new(true);
        assert_eq!(store.clients().await.len(), 3);
        assert_eq!(store.projects().await.len(), 3);
        assert_eq!(store.inspections().await.len(), 6);
        assert!(store.evidences_by_inspection(1).await.is_empty());

        let completed = store
            .inspections_by_status(InspectionStatus::Completed)
            .await;
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].protocol_number, "VT-2023-0782");
    }

    #[tokio::test]
    async fn empty_store_starts_blank() {
        let store = MemoryStore::new(false);
        assert!(store.clients().await.is_empty());
        assert!(store.inspections().await.is_empty());
        assert!(store.integrity_issues().await.is_empty());
    }

    #[tokio::test]
    async fn create_inspection_rejects_duplicate_protocol() {
        let store = MemoryStore::new(true);
        let result = store
            .create_inspection(CreateInspectionRequest {
                protocol_number: "VT-2023-0782".to_string(),
                user_id: 1,
                client_id: 1,
                project_id: 1,
                status: InspectionStatus::Draft,
                scheduled_date: None,
                start_time: None,
                end_time: None,
                roof_model: None,
                quantity: None,
                area: None,
                installation_date: None,
                warranty: None,
                invoice: None,
                technical_analysis: None,
                conclusion: None,
                recommendation: None,
                signature: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn create_inspection_rejects_dangling_references() {
        let store = MemoryStore::new(true);
        let result = store
            .create_inspection(CreateInspectionRequest {
                protocol_number: "VT-2024-0001".to_string(),
                user_id: 1,
                client_id: 999,
                project_id: 1,
                status: InspectionStatus::Draft,
                scheduled_date: None,
                start_time: None,
                end_time: None,
                roof_model: None,
                quantity: None,
                area: None,
                installation_date: None,
                warranty: None,
                invoice: None,
                technical_analysis: None,
                conclusion: None,
                recommendation: None,
                signature: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_refreshes_timestamp_and_merges() {
        let store = MemoryStore::new(true);
        let before = store.client(1).await.unwrap();

        let updated = store
            .update_client(
                1,
                UpdateClientRequest {
                    contact_name: Some("Novo Contato".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, before.name);
        assert_eq!(updated.contact_name.as_deref(), Some("Novo Contato"));
        assert!(updated.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn reset_restores_seed_counts() {
        let store = MemoryStore::new(true);
        store
            .create_client(CreateClientRequest {
                name: "Extra".to_string(),
                kind: ClientType::Person,
                document: None,
                contact_name: None,
                contact_phone: None,
                email: None,
            })
            .await;
        assert_eq!(store.clients().await.len(), 4);

        let summary = store.reset().await;
        assert_eq!(summary.users, 2);
        assert_eq!(summary.clients, 3);
        assert_eq!(summary.projects, 3);
        assert_eq!(summary.inspections, 6);
        assert_eq!(summary.evidences, 0);
        assert_eq!(store.clients().await.len(), 3);
    }
}
