//! Request pipeline stages.
//!
//! - [`correlation`]: correlation id assignment and completion logging
//! - [`credential`]: bearer credential extraction shared by the guards
//! - [`auth`]: authentication stage and the [`AuthUser`](auth::AuthUser) extractor
//! - [`admin`]: admin gate
//! - [`pipeline`]: ordered composition of the stages per route group
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The guard extracts the token and hands it to the [`TokenVerifier`](savely_auth::TokenVerifier)
//! 3. On success an [`AuthContext`](savely_auth::AuthContext) is attached to the request
//! 4. Handlers read it with [`AuthUser`](auth::AuthUser)
//!
//! # Example
//!
//! ```ignore
//! let app = Pipeline::new(state)
//!     .public("/api/v1/ping", init_ping_router())
//!     .authenticated("/api/v1/users", init_users_router())
//!     .admin("/api/v1/admin", init_admin_router())
//!     .build();
//! ```

pub mod admin;
pub mod auth;
pub mod correlation;
pub mod credential;
pub mod pipeline;
