//! Delimiter-joining instance
//!
//! [`Joiner`] owns a mutable delimiter and concatenates two strings around it.
//! Callables bound to a joiner keep a reference to it, never a copy of the
//! delimiter, so a delimiter change is visible through every callable already
//! bound to that joiner.

use crate::contract::Summator;
use parking_lot::RwLock;
use std::sync::Arc;

/// Delimiter used by [`Joiner::new`]
pub const DEFAULT_DELIMITER: &str = ".";

/// Joins two strings around its current delimiter
#[derive(Debug)]
pub struct Joiner {
    delimiter: RwLock<String>,
}

impl Joiner {
    /// Create joiner using [`DEFAULT_DELIMITER`]
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    /// Create joiner with the given delimiter
    #[inline]
    #[must_use]
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: RwLock::new(delimiter.into()),
        }
    }

    /// Current delimiter
    #[must_use]
    pub fn delimiter(&self) -> String {
        self.delimiter.read().clone()
    }

    /// Replace the delimiter
    pub fn set_delimiter(&self, delimiter: impl Into<String>) {
        let delimiter = delimiter.into();
        tracing::debug!("Joiner delimiter set to {:?}", delimiter);
        *self.delimiter.write() = delimiter;
    }

    /// `left`, current delimiter, `right`
    #[must_use]
    pub fn join(&self, left: String, right: String) -> String {
        let delimiter = self.delimiter.read();
        let mut out = String::with_capacity(left.len() + delimiter.len() + right.len());
        out.push_str(&left);
        out.push_str(&delimiter);
        out.push_str(&right);
        out
    }

    /// Summator borrowing this joiner
    pub fn bound_to_self(&self) -> impl Summator<String> + '_ {
        move |left: String, right: String| self.join(left, right)
    }

    /// Summator sharing ownership of this joiner
    pub fn bind(self: &Arc<Self>) -> impl Summator<String> + 'static {
        let this = Arc::clone(self);
        move |left: String, right: String| this.join(left, right)
    }

    /// Summator that takes ownership of this joiner
    pub fn into_summator(self) -> impl Summator<String> + 'static {
        move |left: String, right: String| self.join(left, right)
    }
}

impl Default for Joiner {
    fn default() -> Self {
        Self::new()
    }
}
