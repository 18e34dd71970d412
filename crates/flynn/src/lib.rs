pub mod reference;
pub use reference::{DriverType, Reference};

pub mod registry;
pub use registry::{Database, RegDbId, Registry};

pub use flynn_core::{
    encoding, mapping, record, schema, stmt, Binding, BoundValues, DynRecord, Encodable,
    Encoding, Error, Field, FieldMut, FieldRef, IntoError, Record, Result, Serializable,
};

pub use flynn_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use flynn_core::{
        schema::{FieldDef, RecordType, Shape},
        DynRecord, Encodable, Field, FieldMut, FieldRef, Record, Serializable,
    };
    pub use std::{default::Default, option::Option};
}
