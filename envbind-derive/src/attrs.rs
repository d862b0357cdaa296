//! Attribute parsing for `#[tag(...)]` and `#[bind(...)]` annotations.
//!
//! This module extracts the explicit key segments and binding options
//! attached to struct fields during macro expansion.

use syn::ext::IdentExt;
use syn::{Field, Lit};

/// Parsed `#[tag(...)]` and `#[bind(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// `(tag name, segment)` pairs in the order they were written.
    ///
    /// Several `#[tag(...)]` attributes on the same field are merged.
    pub tags: Vec<(String, String)>,

    /// `#[bind(skip)]`: never descend into or assign this field.
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[tag(...)]` and `#[bind(...)]` attributes from a
    /// struct field.
    ///
    /// Attributes with other names are left for other macros. Inside
    /// `#[tag(...)]`, every entry must be `name = "segment"` and a tag name
    /// may appear only once per field. `#[bind(...)]` only knows `skip`.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if attr.path().is_ident("bind") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        attrs.skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("unknown bind attribute, expected `skip`"))
                    }
                })?;
                continue;
            }
            if !attr.path().is_ident("tag") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let name = match meta.path.get_ident() {
                    Some(ident) => ident.unraw().to_string(),
                    None => return Err(meta.error("tag name must be a single identifier")),
                };

                if attrs.tags.iter().any(|(existing, _)| *existing == name) {
                    return Err(meta.error(format!("duplicate tag `{name}`")));
                }

                let value = meta.value()?;
                let segment: Lit = value.parse()?;
                match segment {
                    Lit::Str(s) => attrs.tags.push((name, s.value())),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "tag value must be a string literal",
                        ))
                    }
                }
                Ok(())
            })?;
        }

        Ok(attrs)
    }
}
