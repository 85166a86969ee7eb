//! Scenario validation support.

use super::Scenario;
use crate::error::ValidationError;
use std::collections::HashSet;

/// Trait for scenario validation.
///
/// Implemented by [`Scenario`] and run by the loader before a scenario is
/// returned.
///
/// # Examples
///
/// ```rust
/// use signal_hub::scenario::{Scenario, Validate};
///
/// let mut scenario = Scenario::original();
/// assert!(scenario.validate().is_ok());
///
/// scenario.observers[1].name = scenario.observers[0].name.clone();
/// assert!(scenario.validate().is_err());
/// ```
pub trait Validate {
    /// Validate the value.
    ///
    /// # Errors
    ///
    /// Should return a `ValidationError` describing what validation failed.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Scenario {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for (index, observer) in self.observers.iter().enumerate() {
            let field = format!("observers[{}].name", index);
            if observer.name.trim().is_empty() {
                errors.push(ValidationError::invalid_field(field, "must not be empty"));
            } else if !seen.insert(observer.name.as_str()) {
                errors.push(ValidationError::invalid_field(
                    field,
                    format!("duplicate observer name '{}'", observer.name),
                ));
            }
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}
