//! folio-core - Core library for Folio
//!
//! This crate contains the portfolio document model, the share-link codec,
//! the Supabase-backed auth gate and document store, and the view-state
//! controller that ties editing, navigation and debounced remote saves
//! together. Presentation layers only talk to [`Controller`].

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod models;
pub mod remote;
pub mod share;
pub mod state;
pub mod sync;
pub mod util;

pub use controller::{AppState, Bootstrap, Controller, ControllerState, View};
pub use error::{Error, NavigationError, NavigationResult, Result};
pub use models::{PortfolioData, Theme};
pub use state::SyncStatus;
