mod error;
use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldTy, Wrapper};

mod record;
pub(crate) use record::Record;

mod ty;
