//! # Savely Config
//!
//! Configuration types for the Savely API, loaded from environment variables:
//!
//! - [`jwt`]: token verification configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: HTTP listener configuration
//! - [`logging`]: log level, format and output directory
//!
//! # Example
//!
//! ```ignore
//! use savely_config::{CorsConfig, JwtConfig, LogConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use logging::{LogConfig, LogFormat};
pub use server::ServerConfig;
