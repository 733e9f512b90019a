//! Field registration and the binding pass.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::time::Duration;

use tracing::{debug, trace};

use super::error::{BindError, CoercionError};
use super::field::{FieldInfo, FieldSpec, Float, SignedInt, Slot};
use super::source::{EnvSource, ProcessEnv};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Env,
    Default,
}

impl Origin {
    fn as_str(self) -> &'static str {
        match self {
            Origin::Env => "env",
            Origin::Default => "default",
        }
    }
}

/// Registered fields of a configuration type `T`, in declaration order.
pub struct Schema<T: 'static> {
    fields: Vec<FieldSpec<T>>,
}

impl<T: 'static> Schema<T> {
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Lists every registered field, including ones without an env key.
    pub fn fields(&self) -> impl Iterator<Item = FieldInfo> + '_ {
        self.fields.iter().map(|field| FieldInfo {
            name: field.name,
            env_key: field.env_key,
            default: field.default,
            kind: field.slot.kind(),
        })
    }

    /// Binds `record` from the process environment.
    ///
    /// Fields are written in place as they are processed. On error, fields
    /// bound before the failing one keep their new values.
    pub fn bind(&self, record: &mut T) -> Result<(), BindError> {
        self.bind_with(record, &ProcessEnv)
    }

    /// Binds `record` in place, resolving variables against `env`.
    pub fn bind_with<E: EnvSource + ?Sized>(&self, record: &mut T, env: &E) -> Result<(), BindError> {
        for field in &self.fields {
            bind_field(field, record, env)?;
        }
        Ok(())
    }

    /// Binds a value whose type is only known at runtime.
    ///
    /// Fails with [`BindError::InvalidTarget`] without touching `target` if it
    /// is not a `T`.
    pub fn bind_any<E: EnvSource + ?Sized>(&self, target: &mut dyn Any, env: &E) -> Result<(), BindError> {
        let record = target
            .downcast_mut::<T>()
            .ok_or(BindError::InvalidTarget { expected: type_name::<T>() })?;
        self.bind_with(record, env)
    }

    /// Binds into a copy of `record` and writes it back only if every field
    /// succeeds.
    pub fn bind_atomic<E: EnvSource + ?Sized>(&self, record: &mut T, env: &E) -> Result<(), BindError>
    where
        T: Clone,
    {
        let mut staged = record.clone();
        self.bind_with(&mut staged, env)?;
        *record = staged;
        Ok(())
    }
}

fn bind_field<T: 'static, E: EnvSource + ?Sized>(
    field: &FieldSpec<T>,
    record: &mut T,
    env: &E,
) -> Result<(), BindError> {
    if field.env_key.is_empty() {
        trace!(field = field.name, "no env key, skipping");
        return Ok(());
    }

    // Set-but-empty counts as unset.
    let (raw, origin) = match env.lookup(field.env_key) {
        Some(value) if !value.is_empty() => (Cow::Owned(value), Origin::Env),
        _ => (Cow::Borrowed(field.default), Origin::Default),
    };

    field
        .slot
        .assign(record, &raw)
        .map_err(|reason| match reason {
            CoercionError::Unsupported(kind) => BindError::UnsupportedFieldType {
                field: field.name,
                kind,
            },
            reason => BindError::FieldCoercion {
                field: field.name,
                raw: raw.into_owned(),
                reason,
            },
        })?;

    debug!(
        field = field.name,
        env = field.env_key,
        source = origin.as_str(),
        "bound field"
    );
    Ok(())
}

/// Collects field registrations for a [`Schema`].
///
/// Each method takes the field name used in errors, the environment variable
/// to read, the default literal, and an accessor returning the field mutably.
/// An empty `env_key` registers the field without binding it.
pub struct SchemaBuilder<T: 'static> {
    fields: Vec<FieldSpec<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
    pub fn text(
        self,
        name: &'static str,
        env_key: &'static str,
        default: &'static str,
        accessor: fn(&mut T) -> &mut String,
    ) -> Self {
        self.push(name, env_key, default, Slot::Text(accessor))
    }

    pub fn int<I: SignedInt>(
        self,
        name: &'static str,
        env_key: &'static str,
        default: &'static str,
        accessor: fn(&mut T) -> &mut I,
    ) -> Self {
        self.push(name, env_key, default, Slot::int(accessor))
    }

    pub fn bool(
        self,
        name: &'static str,
        env_key: &'static str,
        default: &'static str,
        accessor: fn(&mut T) -> &mut bool,
    ) -> Self {
        self.push(name, env_key, default, Slot::Bool(accessor))
    }

    pub fn float<F: Float>(
        self,
        name: &'static str,
        env_key: &'static str,
        default: &'static str,
        accessor: fn(&mut T) -> &mut F,
    ) -> Self {
        self.push(name, env_key, default, Slot::float(accessor))
    }

    pub fn duration(
        self,
        name: &'static str,
        env_key: &'static str,
        default: &'static str,
        accessor: fn(&mut T) -> &mut Duration,
    ) -> Self {
        self.push(name, env_key, default, Slot::Duration(accessor))
    }

    /// Registers a field of a type the binder cannot coerce into.
    ///
    /// Binding fails with [`BindError::UnsupportedFieldType`] when such a
    /// field has an env key.
    pub fn other<V: 'static>(
        self,
        name: &'static str,
        env_key: &'static str,
        default: &'static str,
        _accessor: fn(&mut T) -> &mut V,
    ) -> Self {
        self.push(name, env_key, default, Slot::Unsupported(type_name::<V>()))
    }

    pub fn build(self) -> Schema<T> {
        Schema {
            fields: self.fields,
        }
    }

    fn push(
        mut self,
        name: &'static str,
        env_key: &'static str,
        default: &'static str,
        slot: Slot<T>,
    ) -> Self {
        self.fields.push(FieldSpec {
            name,
            env_key,
            default,
            slot,
        });
        self
    }
}
