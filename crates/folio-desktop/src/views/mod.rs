//! One component per screen

mod editor;
mod landing;
mod login;
mod preview;
mod profile;
mod theme_selection;

pub use editor::Editor;
pub use landing::Landing;
pub use login::Login;
pub use preview::Preview;
pub use profile::Profile;
pub use theme_selection::ThemeSelection;
