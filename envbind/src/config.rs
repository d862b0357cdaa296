//! Binder configuration

use serde::{Deserialize, Serialize};

/// Settings fixed when a [`Binder`](crate::Binder) is built.
///
/// All four settings are required, both in [`BinderConfig::new`] and when
/// deserialized.
///
/// ```rust
/// use envbind::BinderConfig;
///
/// let config = BinderConfig::from_json(
///     r#"{"tag_name": "env", "delimiter": "__", "use_field_name_fallback": true, "skip_non_zero": false}"#,
/// )?;
/// assert_eq!(config.delimiter, "__");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinderConfig {
    /// Name of the tag that carries an explicit key segment.
    pub tag_name: String,
    /// Joins key segments.
    pub delimiter: String,
    /// Use the uppercased field name when a field has no tag.
    pub use_field_name_fallback: bool,
    /// Leave scalar fields that already hold a non-zero value untouched.
    pub skip_non_zero: bool,
}

impl BinderConfig {
    pub fn new(
        tag_name: impl Into<String>,
        delimiter: impl Into<String>,
        use_field_name_fallback: bool,
        skip_non_zero: bool,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            delimiter: delimiter.into(),
            use_field_name_fallback,
            skip_non_zero,
        }
    }

    /// Read a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
