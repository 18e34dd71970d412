#[macro_use]
mod macros;

pub mod encoding;
pub use encoding::{Encodable, Encoding};

mod error;
pub use error::{Error, IntoError};

pub mod mapping;
pub use mapping::{Binding, BoundValues};

pub mod record;
pub use record::{DynRecord, Field, FieldMut, FieldRef, Record, Serializable};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Flynn's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
