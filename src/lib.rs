// MIT License - Copyright (c) 2026 prosegur-smart contributors
// Prosegur Smart client
//
//! # prosegur-smart
//!
//! Client for the Prosegur Smart alarm service (Portugal and the
//! Movistar Prosegur Alarmas service in Spain).
//!
//! Retrieve an installation, read its contract and status, and order the
//! panel to arm or disarm. Requests go through the [`Auth`] trait;
//! [`SmartAuth`] is the HTTP implementation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use prosegur_smart::{AuthConfig, Country, Installation, SmartAuth};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AuthConfig::builder()
//!         .user("user@example.com")
//!         .password("secret")
//!         .country(Country::Portugal)
//!         .build();
//!     let auth = SmartAuth::new(config);
//!
//!     let Some(installation) = Installation::retrieve(&auth, 0).await? else {
//!         anyhow::bail!("no installation available");
//!     };
//!     println!("{}: {}", installation.contract()?, installation.status()?);
//!
//!     if installation.arm(&auth).await? {
//!         println!("armed");
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod installation;
pub mod status;

// Re-exports for convenience
pub use auth::smart::{SmartAuth, SmartResponse};
pub use auth::{Auth, Method, Response};
pub use config::{AuthConfig, AuthConfigBuilder, Country};
pub use error::{ProsegurError, Result};
pub use installation::Installation;
pub use status::Status;
