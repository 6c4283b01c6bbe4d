//! Application services
//!
//! Platform adapters the controller and views depend on.

mod cloud_store;
mod export;
mod session_store;

pub use cloud_store::CloudStore;
pub use export::save_export_with_dialog;
pub use session_store::KeyringSessionStore;
