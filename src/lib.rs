//! # Savely API
//!
//! HTTP service for a personal finance application, built with Axum.
//!
//! The interesting part of this crate is the request pipeline in
//! [`middleware`]: every request is assigned a correlation id and logged once
//! on completion, and protected routes verify a bearer token before the
//! handler runs.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/      # correlation, credential extraction, auth, admin gate, pipeline
//! ├── modules/         # terminal handlers (ping, users, admin)
//! ├── utils/           # tracing helpers
//! ├── docs.rs          # OpenAPI document
//! ├── router.rs        # route table
//! └── state.rs         # shared collaborators
//! ```
//!
//! ## Access levels
//!
//! | Route group | Guard |
//! |-------------|-------|
//! | `/api/v1/ping` | none |
//! | `/api/v1/users` | valid bearer token |
//! | `/api/v1/admin` | valid bearer token whose label is `<email>,admin` |
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! HTTP_HOST=0.0.0.0
//! HTTP_PORT=8080
//! HTTP_ALLOWED_ORIGINS=http://localhost:3000
//! LOG_LEVEL=info
//! LOG_FORMAT=compact
//! LOG_DIR=storage/logs
//! ```

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use savely_auth;
pub use savely_config;
pub use savely_core;
