//! Output buffer for SQL serialization
//!
//! Serialization appends into a [`SqlBuffer`]. Keywords go through
//! [`SqlBuffer::push_keyword`] so their casing follows [`RenderOptions`];
//! identifiers and other text are written verbatim.

use serde::{Deserialize, Serialize};

/// Casing applied to emitted SQL keywords
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    /// `SELECT`, `JOIN`, `ON` (default)
    #[default]
    Upper,
    /// `select`, `join`, `on`
    Lower,
}

/// Options controlling how relations and statements render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Casing for keywords
    #[serde(default)]
    pub keyword_case: KeywordCase,
}

/// Append-only SQL text buffer.
///
/// Text written before a serialization error is kept; callers that need
/// all-or-nothing output should discard the buffer on failure.
#[derive(Debug, Clone, Default)]
pub struct SqlBuffer {
    sql: String,
    options: RenderOptions,
}

impl SqlBuffer {
    /// Create an empty buffer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with the given options
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            sql: String::new(),
            options,
        }
    }

    /// Options this buffer renders with
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Append text verbatim
    pub fn push_str(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    /// Append a keyword (with any surrounding spaces), applying keyword casing
    pub fn push_keyword(&mut self, keyword: &str) {
        match self.options.keyword_case {
            KeywordCase::Upper => self.sql.push_str(&keyword.to_ascii_uppercase()),
            KeywordCase::Lower => self.sql.push_str(&keyword.to_ascii_lowercase()),
        }
    }

    /// SQL written so far
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Consume the buffer and return the SQL text
    pub fn into_string(self) -> String {
        self.sql
    }
}

#[cfg(test)]
#[path = "buffer_test.rs"]
mod tests;
