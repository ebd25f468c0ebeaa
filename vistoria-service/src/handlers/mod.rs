pub mod clients;
pub mod dev;
pub mod evidences;
pub mod health;
pub mod inspections;
pub mod projects;
pub mod reports;

pub use health::health_check;
