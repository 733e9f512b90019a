//! Binding of configuration fields from environment variables.
//!
//! Each configuration type registers its fields once through a
//! [`SchemaBuilder`], giving every field an environment variable name, a
//! default literal and a typed accessor. Binding resolves each variable,
//! falling back to the default when it is unset or empty, and coerces the
//! string into the field's type.

mod duration;
mod error;
mod field;
mod schema;
mod source;

pub use duration::parse_duration;
pub use error::{BindError, CoercionError, DurationError};
pub use field::{FieldInfo, FieldKind, Float, FloatWidth, IntWidth, SignedInt};
pub use schema::{Schema, SchemaBuilder};
pub use source::{EnvSource, ProcessEnv};

/// A configuration type with a registered schema.
pub trait Bindable: Sized + 'static {
    fn schema() -> Schema<Self>;

    /// Binds `self` in place from the process environment.
    fn bind_env(&mut self) -> Result<(), BindError> {
        Self::schema().bind(self)
    }

    /// Builds a value from `Default` and binds it from the process environment.
    fn from_env() -> Result<Self, BindError>
    where
        Self: Default,
    {
        Self::from_env_with(&ProcessEnv)
    }

    fn from_env_with<E: EnvSource + ?Sized>(env: &E) -> Result<Self, BindError>
    where
        Self: Default,
    {
        let mut record = Self::default();
        Self::schema().bind_with(&mut record, env)?;
        Ok(record)
    }
}
