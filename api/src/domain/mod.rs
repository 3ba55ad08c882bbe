//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `validation`: Order-creation payload validation

pub mod entities;
pub mod validation;
