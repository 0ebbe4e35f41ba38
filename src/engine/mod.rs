//! Orchestration: validation and grouped application.

pub mod grouped;
pub mod validator;
