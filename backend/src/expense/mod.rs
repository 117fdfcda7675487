//! Expense records: schema, validation and storage

pub mod memory;
pub mod model;
pub mod store;
pub mod validation;

pub use memory::MemoryExpenseStore;
pub use model::*;
pub use store::{ExpenseStore, PgExpenseStore, StoreError};
pub use validation::{validate_for_create, ValidationError};
