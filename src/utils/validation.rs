use crate::utils::error::{TicketError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects only the empty string. Whitespace-only text passes, like a
/// `required,min=1` field rule.
pub fn validate_required_text(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TicketError::validation(field_name, "cannot be empty"));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(TicketError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Supported values: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(TicketError::ConfigValidation {
            field: field_name.to_string(),
            message: "list cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TicketError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
