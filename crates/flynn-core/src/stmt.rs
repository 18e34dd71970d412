mod holder;
pub use holder::Holder;

mod kind;
pub use kind::Kind;

mod num;
pub(crate) use num::parse_u64_auto;

mod primitive;
pub use primitive::Primitive;

mod value;
pub use value::Value;

mod value_chrono;
