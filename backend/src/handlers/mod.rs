//! API handlers for the money tracker

mod expense;
mod health;

pub use expense::*;
pub use health::{health_check, HealthResponse};
