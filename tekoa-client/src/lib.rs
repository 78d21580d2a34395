//! HTTP client for the Tekoá Hub content store API
//!
//! The content store is an external REST service that owns every cultural
//! content record. This crate provides the typed client the gateway uses to
//! talk to it: list/get/create/update/delete over `{base_url}/api/conteudos`,
//! plus draft validation so a bad submission never leaves the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use tekoa_client::{ContentStoreClient, StoreConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContentStoreClient::new(StoreConfig {
//!     base_url: "http://localhost:3000".into(),
//!     ..Default::default()
//! });
//!
//! let all = client.list().await?;
//! println!("{} records", all.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::ContentStoreClient;
pub use error::{Result, StoreError};
pub use types::{Category, Content, ContentDraft, ContentType, StoreConfig};
