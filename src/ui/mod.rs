//! Terminal front end plus the MVI reducers the deck controller runs on.

pub mod events;
pub mod footer;
pub mod gesture;
pub mod header;
pub mod input;
pub mod layout;
pub mod loading;
pub mod mvi;
pub mod navigation;
pub mod particles;
pub mod rejection;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;
