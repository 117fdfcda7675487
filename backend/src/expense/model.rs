//! Expense record shapes, persisted and as submitted

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub category: Option<String>,
    pub recurring: bool,
    pub frequency: Option<String>,
    pub notes: Option<String>,
}

impl Expense {
    /// Materialize a validated record, filling the generated fields.
    pub fn from_new(new: NewExpense) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: new.description,
            amount: new.amount,
            date: new.date.unwrap_or_else(Utc::now),
            category: new.category,
            recurring: new.recurring,
            frequency: new.frequency,
            notes: new.notes,
        }
    }
}

/// A validated expense that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    /// Creation time is used when absent
    pub date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub recurring: bool,
    pub frequency: Option<String>,
    pub notes: Option<String>,
}

/// Form body of `POST /api/expenses`, as submitted
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub amount: Option<String>,
    pub category: Option<String>,
    pub recurring: Option<String>,
    pub frequency: Option<String>,
    pub notes: Option<String>,
}

/// Response of a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateExpenseResponse {
    pub message: String,
    pub expense: Expense,
}
