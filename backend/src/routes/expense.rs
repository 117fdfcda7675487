//! Expense route definitions

use axum::{routing::get, Router};

use crate::handlers::*;
use crate::state::AppState;

pub fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/api/expenses", get(list_expenses).post(create_expense))
        .route("/api/expenses/recurring", get(list_recurring_expenses))
        .route(
            "/api/expenses/category/:category",
            get(list_expenses_by_category),
        )
}
