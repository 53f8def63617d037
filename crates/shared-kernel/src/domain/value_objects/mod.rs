// crates/shared-kernel/src/domain/value_objects/mod.rs

mod value_object;

pub use value_object::ValueObject;
