//! Expense handlers

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Form, Json,
};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::expense::{
    validate_for_create, CreateExpenseRequest, CreateExpenseResponse, Expense, ExpenseStore,
};

/// GET /api/expenses
pub async fn list_expenses(
    State(store): State<Arc<dyn ExpenseStore>>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = store.list_all().await?;
    Ok(Json(expenses))
}

/// POST /api/expenses - validate the form, then persist
pub async fn create_expense(
    State(store): State<Arc<dyn ExpenseStore>>,
    form: Result<Form<CreateExpenseRequest>, FormRejection>,
) -> ApiResult<(StatusCode, Json<CreateExpenseResponse>)> {
    let Form(request) = form?;
    tracing::info!(?request, "Received expense");

    let new_expense = validate_for_create(request)?;

    let expense = store
        .create(new_expense)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!(id = %expense.id, amount = expense.amount, "Expense added");

    Ok((
        StatusCode::CREATED,
        Json(CreateExpenseResponse {
            message: "Expense added successfully".to_string(),
            expense,
        }),
    ))
}

/// GET /api/expenses/category/:category
pub async fn list_expenses_by_category(
    State(store): State<Arc<dyn ExpenseStore>>,
    category: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<Expense>>> {
    let Path(category) = category?;
    let expenses = store.list_by_category(&category).await?;
    Ok(Json(expenses))
}

/// GET /api/expenses/recurring
pub async fn list_recurring_expenses(
    State(store): State<Arc<dyn ExpenseStore>>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = store.list_recurring().await?;
    Ok(Json(expenses))
}
