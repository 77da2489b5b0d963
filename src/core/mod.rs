//! Configuration, data model and the shared per-process state.

pub mod config;
pub mod models;
pub mod state;
