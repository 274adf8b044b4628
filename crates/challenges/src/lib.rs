//! Challenge orchestration — theme templates and the builder that
//! turns a theme plus a user's history into an issued challenge.

pub mod builder;
pub mod templates;

pub use builder::ChallengeBuilder;
pub use templates::TemplateRegistry;
