//! Money Tracker Backend Library
//!
//! Expense records, their validation and storage, and the HTTP routes
//! exposing them.

pub mod config;
pub mod db;
pub mod error;
pub mod expense;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
