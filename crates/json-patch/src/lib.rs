mod apply;
mod error;
mod operation;

pub use apply::{apply, apply_all};
pub use error::PatchError;
pub use operation::PatchOperation;
