pub mod app;
pub mod card_view;
pub mod error_modal;
pub mod fonts;
pub mod import_modal;
pub mod message_overlay;
pub mod modal;
pub mod settings_modal;
pub mod theme;
pub mod top_bar;

pub use app::KapianApp;
