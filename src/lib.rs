pub mod api;
pub mod bot;
pub mod core;
pub mod error;
pub mod state;
