//! CPE 2.3 identifier normalization.
//!
//! A `cpe23Uri` looks like `cpe:2.3:a:vendor:product:version:...`. The
//! first five colon-delimited segments form the normalized product key and
//! the sixth is the version. Observed versions accumulate per key, in key
//! insertion order; wildcard and not-applicable versions contribute no
//! explicit version.

use indexmap::IndexMap;
use thiserror::Error;

const WILDCARD: &str = "*";
const NOT_APPLICABLE: &str = "-";
const ESCAPE_PLACEHOLDER: &str = "\\";

/// A CPE entry that cannot contribute a product key. Skip-record only:
/// the caller logs it and the batch continues.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CpeError {
    #[error("CPE identifier has fewer than six segments: {0}")]
    TooFewSegments(String),

    #[error("CPE product segment is a placeholder: {0}")]
    PlaceholderProduct(String),
}

/// Accumulates observed versions per normalized product key.
#[derive(Debug, Default)]
pub struct ProductVersions {
    keys: IndexMap<String, Vec<String>>,
}

impl ProductVersions {
    /// Register one versioned identifier.
    ///
    /// Duplicate versions are allowed here; deduplication happens at
    /// assembly time.
    pub fn record(&mut self, cpe23_uri: &str) -> Result<(), CpeError> {
        let segments: Vec<&str> = cpe23_uri.split(':').collect();
        if segments.len() < 6 {
            return Err(CpeError::TooFewSegments(cpe23_uri.to_string()));
        }

        let product = segments[4];
        if product == WILDCARD || product == ESCAPE_PLACEHOLDER {
            return Err(CpeError::PlaceholderProduct(cpe23_uri.to_string()));
        }

        let key = segments[..5].join(":");
        let version = segments[5];
        let versions = self.keys.entry(key).or_default();
        if version != WILDCARD && version != NOT_APPLICABLE {
            versions.push(version.to_string());
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys with their raw (possibly duplicated) version lists, in
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Short product name: the final colon-delimited segment of the key.
pub fn product_name(key: &str) -> &str {
    key.rsplit(':').next().unwrap_or(key)
}
