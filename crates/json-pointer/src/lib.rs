mod macros;

mod error;
mod json_pointer;
mod json_pointer_ref;
mod parser;
mod value_ext;

pub use error::ParseJsonPointerError;
pub use json_pointer::JsonPointer;
pub use json_pointer_ref::JsonPointerRef;
pub use value_ext::ValueExt;
