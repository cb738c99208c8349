use json_pointer::JsonPointer;

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("path not found: {path}")]
    PathNotFound { path: JsonPointer },
    #[error("invalid index `{index}` under {path}")]
    InvalidIndex { path: JsonPointer, index: String },
    #[error("not a container: {path}")]
    NotAContainer { path: JsonPointer },
    #[error("cannot remove the document root")]
    RemoveRoot,
}
