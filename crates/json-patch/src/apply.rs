use json_pointer::{JsonPointerRef, ValueExt};
use serde_json::Value;

use crate::{PatchError, PatchOperation};

/// Applies one operation to `doc` in place.
pub fn apply(doc: &mut Value, op: PatchOperation) -> Result<(), PatchError> {
    match op {
        PatchOperation::Add { path, value } => apply_add(doc, path.as_ref(), value),
        PatchOperation::Remove { path } => apply_remove(doc, path.as_ref()),
        PatchOperation::Replace { path, value } => apply_replace(doc, path.as_ref(), value),
    }
}

/// Applies every operation in order, stopping at the first failure.
/// The document is left as-is up to the failing operation; there is no
/// rollback.
pub fn apply_all(
    doc: &mut Value,
    ops: impl IntoIterator<Item = PatchOperation>,
) -> Result<(), PatchError> {
    for op in ops {
        apply(doc, op)?;
    }
    Ok(())
}

fn apply_add(doc: &mut Value, path: JsonPointerRef<'_>, value: Value) -> Result<(), PatchError> {
    let Some((parent_path, key)) = path.split_last() else {
        // Adding at the root replaces the whole document.
        *doc = value;
        return Ok(());
    };

    let parent = doc
        .locate_mut(parent_path)
        .ok_or_else(|| PatchError::PathNotFound {
            path: parent_path.to_owned(),
        })?;

    match parent {
        Value::Object(obj) => {
            obj.insert(key.to_string(), value);
        }
        Value::Array(array) => {
            if key == "-" {
                array.push(value);
            } else {
                let index = key
                    .parse::<usize>()
                    .ok()
                    .filter(|index| *index <= array.len())
                    .ok_or_else(|| PatchError::InvalidIndex {
                        path: parent_path.to_owned(),
                        index: key.to_string(),
                    })?;
                array.insert(index, value);
            }
        }
        _ => {
            return Err(PatchError::NotAContainer {
                path: parent_path.to_owned(),
            })
        }
    }

    Ok(())
}

fn apply_remove(doc: &mut Value, path: JsonPointerRef<'_>) -> Result<(), PatchError> {
    let (parent_path, key) = path.split_last().ok_or(PatchError::RemoveRoot)?;

    let parent = doc
        .locate_mut(parent_path)
        .ok_or_else(|| PatchError::PathNotFound {
            path: parent_path.to_owned(),
        })?;

    match parent {
        Value::Object(obj) => {
            obj.remove(key).ok_or_else(|| PatchError::PathNotFound {
                path: path.to_owned(),
            })?;
        }
        Value::Array(array) => {
            let index = key
                .parse::<usize>()
                .ok()
                .filter(|index| *index < array.len())
                .ok_or_else(|| PatchError::InvalidIndex {
                    path: parent_path.to_owned(),
                    index: key.to_string(),
                })?;
            array.remove(index);
        }
        _ => {
            return Err(PatchError::NotAContainer {
                path: parent_path.to_owned(),
            })
        }
    }

    Ok(())
}

fn apply_replace(
    doc: &mut Value,
    path: JsonPointerRef<'_>,
    value: Value,
) -> Result<(), PatchError> {
    let target = doc
        .locate_mut(path)
        .ok_or_else(|| PatchError::PathNotFound {
            path: path.to_owned(),
        })?;
    *target = value;
    Ok(())
}
