mod client;
mod evidence;
mod inspection;
mod project;
mod user;

pub use client::{Client, ClientType};
pub use evidence::Evidence;
pub use inspection::{Inspection, InspectionStatus};
pub use project::Project;
pub use user::User;
