//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab index {index} out of range for {count} tabs")]
    InvalidIndex { index: isize, count: usize },

    #[error("Configuration mismatch: {descriptors} tabs but {contents} content entries")]
    ConfigurationMismatch { descriptors: usize, contents: usize },

    #[error("Tab label cannot be empty")]
    EmptyLabel,

    #[error("Unknown key: {0}")]
    UnknownKey(String),
}
