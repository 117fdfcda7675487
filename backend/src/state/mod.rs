//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::expense::ExpenseStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub expense_store: Arc<dyn ExpenseStore>,
}

impl AppState {
    pub fn new(expense_store: Arc<dyn ExpenseStore>) -> Self {
        Self { expense_store }
    }
}

impl FromRef<AppState> for Arc<dyn ExpenseStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.expense_store.clone()
    }
}
