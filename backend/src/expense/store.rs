//! Expense data access and its PostgreSQL implementation

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use super::model::{Expense, NewExpense};

/// Failure reaching or writing to the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Data access for expense records.
///
/// Records are immutable once created; there is no update or delete.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Every stored expense, in no particular order.
    async fn list_all(&self) -> Result<Vec<Expense>, StoreError>;

    /// Expenses whose category equals `category` exactly. An empty string
    /// matches records with an empty or absent category.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Expense>, StoreError>;

    /// Expenses flagged as recurring.
    async fn list_recurring(&self) -> Result<Vec<Expense>, StoreError>;

    /// Persist a new expense and return it with its generated fields.
    async fn create(&self, expense: NewExpense) -> Result<Expense, StoreError>;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// PostgreSQL-backed store, one row per expense in `expenses`
#[derive(Clone)]
pub struct PgExpenseStore {
    db_pool: PgPool,
}

impl PgExpenseStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ExpenseStore for PgExpenseStore {
    async fn list_all(&self) -> Result<Vec<Expense>, StoreError> {
        let expenses = sqlx::query_as::<_, Expense>("SELECT * FROM expenses")
            .fetch_all(&self.db_pool)
            .await?;

        Ok(expenses)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Expense>, StoreError> {
        let query = if category.is_empty() {
            "SELECT * FROM expenses WHERE COALESCE(category, '') = $1"
        } else {
            "SELECT * FROM expenses WHERE category = $1"
        };

        let expenses = sqlx::query_as::<_, Expense>(query)
            .bind(category)
            .fetch_all(&self.db_pool)
            .await?;

        Ok(expenses)
    }

    async fn list_recurring(&self) -> Result<Vec<Expense>, StoreError> {
        let expenses = sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE recurring = TRUE")
            .fetch_all(&self.db_pool)
            .await?;

        Ok(expenses)
    }

    async fn create(&self, expense: NewExpense) -> Result<Expense, StoreError> {
        let expense = Expense::from_new(expense);

        let saved = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (
                id, description, amount, date, category, recurring, frequency, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(expense.id)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(&expense.category)
        .bind(expense.recurring)
        .bind(&expense.frequency)
        .bind(&expense.notes)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::debug!(id = %saved.id, "Expense row inserted");

        Ok(saved)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::db::check_health(&self.db_pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
