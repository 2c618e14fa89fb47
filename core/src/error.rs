//! Error types for the page core
//!
//! Animation and reveal behaviour never surfaces errors: an unsupported host
//! fails open and bad durations are clamped. These types cover the edges where
//! a caller does get to decide (watcher construction, config, form input).

use thiserror::Error;

use crate::page::InquiryField;

/// Errors creating a visibility observer
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("visibility observation unsupported: {reason}")]
    Unsupported { reason: String },
}

/// Errors loading the site content document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config TOML")]
    ParseToml {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid site config: {reason}")]
    Invalid { reason: String },
}

/// Errors submitting the admission inquiry form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("please check: {}", format_fields(.fields))]
    Invalid { fields: Vec<InquiryField> },
}

impl InquiryError {
    /// Fields that failed validation, in form order
    pub fn fields(&self) -> &[InquiryField] {
        match self {
            InquiryError::Invalid { fields } => fields,
        }
    }
}

fn format_fields(fields: &[InquiryField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
