//! Row mapping: schema derivation, value extraction, scan allocation and shifting.

mod binding;
pub use binding::Binding;

mod bound;
pub use bound::BoundValues;

mod extract;

mod path;

mod shift;

mod walk;
