//! Populates configuration records from environment variables.

pub mod binder;

pub use binder::{
    BindError, Bindable, CoercionError, DurationError, EnvSource, FieldInfo, FieldKind,
    ProcessEnv, Schema, SchemaBuilder,
};
