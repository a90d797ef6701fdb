//! PRAS-MAN game library crate.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod platform;
pub mod render;
pub mod share;
pub mod systems;
