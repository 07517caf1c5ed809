//! HTTP handlers

pub mod auth;
pub mod categories;
pub mod employees;
pub mod form;
pub mod health;
pub mod summary;

pub use health::health;
