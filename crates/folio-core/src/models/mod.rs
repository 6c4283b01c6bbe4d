//! Data models for Folio

mod portfolio;
mod theme;

pub use portfolio::{
    Category, Certification, ItemId, PortfolioData, Project, Qualification, Skill, SocialNetwork,
};
pub use theme::Theme;
