// src/core/mod.rs
pub mod classifier;
pub mod engine;
pub mod extractor;
pub mod filters;
pub mod gate;
pub mod matcher;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod tokens;
pub mod types;
