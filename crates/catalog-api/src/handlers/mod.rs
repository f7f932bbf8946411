//! Route handlers organized by domain.

pub mod category;
pub mod health;
