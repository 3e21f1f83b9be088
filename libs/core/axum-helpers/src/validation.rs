//! Ordered validation chains.
//!
//! A chain is an explicit list of predicate+message pairs evaluated eagerly:
//! every declared rule runs, every failure is collected, and only then is
//! pass/fail decided. Reported errors follow declaration order, and one field
//! may contribute several errors at once.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field (or path parameter)
    pub field: String,
    /// Human-readable description of the violated rule
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collects failed checks in declaration order.
///
/// ```
/// use axum_helpers::validation::ErrorBag;
///
/// let mut bag = ErrorBag::new();
/// bag.check("name", false, "name cannot be empty");
/// bag.check("price", true, "price must be a number");
/// assert_eq!(bag.into_result().unwrap_err().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ErrorBag {
    errors: Vec<FieldError>,
}

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field` unless `ok` holds. Returns `ok` so
    /// callers can make later rules conditional on earlier ones.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> bool {
        if !ok {
            self.errors.push(FieldError::new(field, message));
        }
        ok
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finish the chain: `Ok` when nothing failed, otherwise every collected
    /// error in declaration order.
    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// A deserialized payload that carries its own validation chain.
///
/// `Valid` is the strongly-typed shape produced once every rule passed;
/// implementors keep the raw payload loosely typed so that type mismatches
/// surface as field errors rather than deserialization failures.
pub trait ValidateChain {
    type Valid;

    fn validate(self) -> Result<Self::Valid, Vec<FieldError>>;
}
