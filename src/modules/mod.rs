//! Terminal handlers, one module per route group.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `model.rs`: response DTOs
//! - `router.rs`: Axum router configuration

pub mod admin;
pub mod ping;
pub mod users;
