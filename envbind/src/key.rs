//! Composition of lookup keys from field segments.

use crate::config::BinderConfig;
use crate::field::FieldDescriptor;

/// Builds composed keys according to a binder configuration.
///
/// A key under construction always ends with the delimiter once any segment
/// has been appended; [`KeyComposer::finish`] removes that trailing delimiter
/// before lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyComposer<'a> {
    config: &'a BinderConfig,
}

impl<'a> KeyComposer<'a> {
    pub(crate) fn new(config: &'a BinderConfig) -> Self {
        Self { config }
    }

    /// Segment contributed by `field`, if any.
    ///
    /// The explicit tag wins over the field name; both are uppercased.
    pub(crate) fn segment(&self, field: &FieldDescriptor) -> Option<String> {
        match field.tag(&self.config.tag_name) {
            Some(tag) => Some(tag.to_uppercase()),
            None if self.config.use_field_name_fallback => Some(field.name.to_uppercase()),
            None => None,
        }
    }

    /// `key` extended by the segment of `field` and one delimiter.
    pub(crate) fn extend(&self, key: &str, field: &FieldDescriptor) -> String {
        match self.segment(field) {
            Some(segment) => format!("{key}{segment}{}", self.config.delimiter),
            None => key.to_string(),
        }
    }

    /// Final lookup key: `key` with one trailing delimiter removed.
    pub(crate) fn finish<'k>(&self, key: &'k str) -> &'k str {
        key.strip_suffix(self.config.delimiter.as_str())
            .unwrap_or(key)
    }
}
