use crate::domain::{entities::PostLayout, error::DomainError, value_objects::Title};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_title(raw: &str) -> Result<Title, DomainError> {
        Title::new(raw)
    }

    pub fn validate_layout(layout: &PostLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
