//! libortho crate root
//!
//! This crate provides the orthography-profile grapheme-to-phoneme engine:
//! a bundled-language registry with embedded rule files, per-language
//! transcription engines and a line-oriented `Backend` that injects
//! configurable separators into the phone stream.
//!
//! Public API exported here:
//! - `Backend` from `backend`
//! - `TranscriptionEngine` from `engine`
//! - `is_supported_language` and `supported_languages` from `registry`
//!
//! # Example
//! ```
//! use libortho::{Backend, Separator};
//!
//! let backend = Backend::new("cree").unwrap();
//! let out = backend
//!     .phonemize(&["achi acho"], &Separator::default(), true)
//!     .unwrap();
//! assert_eq!(out, vec!["ʌtʃɪ ʌtʃʊ"]);
//! ```

pub mod backend;
pub mod engine;
pub mod error;
pub mod registry;

pub use backend::Backend;
pub use engine::TranscriptionEngine;
pub use error::ConfigError;
pub use registry::{is_supported_language, supported_languages, RULE_FILE_EXTENSION};

// Convenience re-exports for common types used by callers.
pub use libg2p_core::{
    default_separator, Config, Punctuation, RuleSet, Separator, TransduceError, Transducer,
};
