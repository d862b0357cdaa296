//! Depth-first binding of environment variables into a struct tree.

use std::any::type_name;

use tracing::{debug, trace};

use crate::coerce::coerce;
use crate::config::BinderConfig;
use crate::env::{Environment, ProcessEnv};
use crate::error::{BindError, CoercionError};
use crate::field::{Bindable, Field, FieldDescriptor, ScalarSlot, Slot};
use crate::key::KeyComposer;

/// Populates struct fields from environment variables.
///
/// A binder walks the fields of a `#[derive(Bindable)]` struct in
/// declaration order. Each field contributes a key segment (its tag under
/// [`BinderConfig::tag_name`], or its name when
/// [`BinderConfig::use_field_name_fallback`] is set), and scalar leaves are
/// looked up under the delimiter-joined segments of their path.
#[derive(Debug, Clone)]
pub struct Binder {
    config: BinderConfig,
}

impl Binder {
    /// Create a binder. All four settings are required.
    pub fn new(
        tag_name: impl Into<String>,
        delimiter: impl Into<String>,
        use_field_name_fallback: bool,
        skip_non_zero: bool,
    ) -> Self {
        Self::from_config(BinderConfig::new(
            tag_name,
            delimiter,
            use_field_name_fallback,
            skip_non_zero,
        ))
    }

    /// Create a binder from a prepared [`BinderConfig`].
    pub fn from_config(config: BinderConfig) -> Self {
        Self { config }
    }

    /// Settings this binder was created with.
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Bind the process environment into `target`.
    ///
    /// # Errors
    ///
    /// - `target` is not a struct
    /// - an environment value cannot be parsed into its field's type
    /// - a hand-written `Bindable` implementation disagrees with its field table
    pub fn bind<T: Field>(&self, target: &mut T) -> Result<(), BindError> {
        self.bind_from(&ProcessEnv, target)
    }

    /// Bind values from `env` into `target`.
    ///
    /// Same as [`Binder::bind`] with an explicit environment source.
    pub fn bind_from<E, T>(&self, env: &E, target: &mut T) -> Result<(), BindError>
    where
        E: Environment + ?Sized,
        T: Field,
    {
        let type_name = type_name::<T>();
        let root = match target.slot() {
            Slot::Struct(root) => root,
            other => {
                return Err(BindError::InvalidArgument {
                    type_name,
                    found: other.kind(),
                })
            }
        };

        debug!(target_type = type_name, tag = %self.config.tag_name, "binding environment");
        let walk = Walk {
            config: &self.config,
            keys: KeyComposer::new(&self.config),
            env,
        };
        walk.fields(root, "")?;
        debug!(target_type = type_name, "environment bound");
        Ok(())
    }
}

/// State of one bind call.
struct Walk<'a, E: ?Sized> {
    config: &'a BinderConfig,
    keys: KeyComposer<'a>,
    env: &'a E,
}

impl<E: Environment + ?Sized> Walk<'_, E> {
    /// Process every direct field of `target` under `key`.
    fn fields(&self, target: &mut dyn Bindable, key: &str) -> Result<(), BindError> {
        for (index, field) in target.descriptors().iter().enumerate() {
            let slot = target.field_mut(index).ok_or(BindError::InvalidFieldKind {
                field: field.name,
                expected: field.kind,
            })?;
            if slot.kind() != field.kind {
                return Err(BindError::InvalidFieldKind {
                    field: field.name,
                    expected: field.kind,
                });
            }
            self.field(field, slot, key)?;
        }
        Ok(())
    }

    fn field(&self, field: &FieldDescriptor, slot: Slot<'_>, key: &str) -> Result<(), BindError> {
        // A pointer level adds nothing; its pointee is processed with the
        // same descriptor and adds the segment there.
        let key = match slot {
            Slot::Pointer(_) => key.to_string(),
            _ => self.keys.extend(key, field),
        };

        match slot {
            Slot::Struct(inner) => self.fields(inner, &key),
            Slot::Pointer(pointer) => {
                if !pointer.is_materialized() {
                    trace!(field = field.name, "materializing empty pointer");
                }
                self.field(field, pointer.materialize(), &key)
            }
            Slot::Unsupported => {
                trace!(field = field.name, "skipping unsupported field");
                Ok(())
            }
            Slot::Scalar(scalar) => self.leaf(field, scalar, &key),
        }
    }

    fn leaf(
        &self,
        field: &FieldDescriptor,
        scalar: &mut dyn ScalarSlot,
        key: &str,
    ) -> Result<(), BindError> {
        if self.config.skip_non_zero && !scalar.is_zero() {
            trace!(field = field.name, "keeping non-zero value");
            return Ok(());
        }

        let key = self.keys.finish(key);
        if key.is_empty() {
            trace!(field = field.name, "no key segments, field is unreachable");
            return Ok(());
        }
        let Some(raw) = self.env.get(key).filter(|value| !value.is_empty()) else {
            trace!(field = field.name, key, "no value in environment");
            return Ok(());
        };

        let kind = scalar.kind();
        let value = coerce(&raw, kind).map_err(|cause| CoercionError::new(key, kind, &raw, cause))?;
        if !value.assign(scalar) {
            return Err(BindError::InvalidFieldKind {
                field: field.name,
                expected: kind,
            });
        }
        trace!(field = field.name, key, %kind, "assigned from environment");
        Ok(())
    }
}
