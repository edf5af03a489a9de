// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod persistence;
pub use crate::core::engine::MintEngine;
pub use crate::core::registry::{CurrencyRegistry, CurrencyTable};
pub use crate::core::types::{Label, RecognitionRequest, RecognitionResult};
pub use crate::error::{MintError, Result};
