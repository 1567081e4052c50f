pub mod app;
pub mod chat;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod request;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
