//! Write-boundary checks for new expenses

use thiserror::Error;
use validator::Validate;

use super::model::{CreateExpenseRequest, NewExpense};

/// Rejection of a create request at the write boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description and amount required")]
    MissingRequired,

    #[error("amount must be a number")]
    InvalidAmount,
}

/// Check required fields and coerce form strings into a [`NewExpense`].
///
/// `recurring` is true only for the literal string `"true"`. Every other
/// optional field is passed through as submitted.
pub fn validate_for_create(input: CreateExpenseRequest) -> Result<NewExpense, ValidationError> {
    input
        .validate()
        .map_err(|_| ValidationError::MissingRequired)?;

    let (Some(description), Some(amount)) = (input.description, input.amount) else {
        return Err(ValidationError::MissingRequired);
    };

    let amount = parse_amount(&amount)?;

    Ok(NewExpense {
        description,
        amount,
        date: None,
        category: input.category,
        recurring: input.recurring.as_deref() == Some("true"),
        frequency: input.frequency,
        notes: input.notes,
    })
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidAmount),
    }
}
