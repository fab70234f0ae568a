//! Purrville library crate — re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is a headless smoke driver. This library
//! crate exposes the same modules so that `tests/` integration tests can
//! import engine types, systems, and resources without a window or GPU —
//! which is also how any real front end would embed the engine.

pub mod cats;
pub mod data;
pub mod decor;
pub mod economy;
pub mod shared;
