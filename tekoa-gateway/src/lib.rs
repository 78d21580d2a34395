//! Tekoá Hub gateway - web front-end for the cultural collection
//!
//! Serves the site pages and the gallery/admin JSON API over the remote
//! content store.
//!
//! ## Services
//!
//! - **Pages**: embedded site shells (home, explore, about, admin)
//! - **View engine**: pure filter/search/sort derivation of the gallery
//! - **Like ledger**: gateway-local persisted like state
//! - **Admin CRUD**: validated pass-through to the content store

pub mod config;
pub mod error;
pub mod likes;
pub mod routes;
pub mod state;
pub mod view;

pub use config::Args;
pub use error::{GatewayError, Result};
pub use state::{GatewayState, SharedState};
