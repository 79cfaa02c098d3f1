pub mod article;
pub mod cmds;
pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod i18n;
pub mod router;
pub mod slug;
pub mod ui;
