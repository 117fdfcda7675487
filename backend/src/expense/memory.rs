//! In-memory expense store

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Expense, NewExpense};
use super::store::{ExpenseStore, StoreError};

/// In-process store, lost on restart
#[derive(Clone, Default)]
pub struct MemoryExpenseStore {
    expenses: Arc<RwLock<Vec<Expense>>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Expense>
    where
        F: Fn(&Expense) -> bool,
    {
        let expenses = self.expenses.read().await;
        expenses.iter().filter(|e| predicate(e)).cloned().collect()
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn list_all(&self) -> Result<Vec<Expense>, StoreError> {
        Ok(self.expenses.read().await.clone())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Expense>, StoreError> {
        Ok(self
            .filtered(|e| e.category.as_deref().unwrap_or("") == category)
            .await)
    }

    async fn list_recurring(&self) -> Result<Vec<Expense>, StoreError> {
        Ok(self.filtered(|e| e.recurring).await)
    }

    async fn create(&self, expense: NewExpense) -> Result<Expense, StoreError> {
        let expense = Expense::from_new(expense);
        self.expenses.write().await.push(expense.clone());
        Ok(expense)
    }
}
