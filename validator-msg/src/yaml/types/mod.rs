pub(crate) mod any;
pub(crate) mod array;
pub(crate) mod boolean;
pub(crate) mod number;
pub(crate) mod object;
pub(crate) mod string;
pub(crate) mod valid;

pub use any::SchemaAny;
pub use array::SchemaArray;
pub use boolean::SchemaBoolean;
pub use number::SchemaNumber;
pub use object::SchemaObject;
pub use string::SchemaString;
pub use valid::SchemaValid;
