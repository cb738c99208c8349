use json_patch::PatchOperation;
use json_pointer::JsonPointer;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::compare::{value_kind, values_equal};

/// Computes the patch that transforms `original` into `modified`.
///
/// Operations are emitted in traversal order and apply cleanly in that
/// order. After the traversal, every path is rewritten to its
/// lowercased form; values are never case-folded.
pub fn diff(original: &Value, modified: &Value) -> Vec<PatchOperation> {
    let mut ops = Vec::new();
    diff_value(original, modified, &JsonPointer::root(), &mut ops);
    lowercase_paths(ops)
}

/// Converts both values to JSON via their `Serialize` impls and diffs
/// the results.
///
/// This is the typed-object entry point: a conversion failure is the
/// serializer's error, the diff itself cannot fail.
pub fn diff_serializable<T, U>(
    original: &T,
    modified: &U,
) -> Result<Vec<PatchOperation>, serde_json::Error>
where
    T: Serialize + ?Sized,
    U: Serialize + ?Sized,
{
    let original = serde_json::to_value(original)?;
    let modified = serde_json::to_value(modified)?;
    Ok(diff(&original, &modified))
}

fn diff_value(
    original: &Value,
    modified: &Value,
    path: &JsonPointer,
    ops: &mut Vec<PatchOperation>,
) {
    if value_kind(original) != value_kind(modified) {
        // A type change replaces the whole subtree, however deep.
        ops.push(PatchOperation::Replace {
            path: path.clone(),
            value: modified.clone(),
        });
        return;
    }

    if values_equal(original, modified) {
        return;
    }

    match (original, modified) {
        (Value::Object(original), Value::Object(modified)) => {
            diff_object(original, modified, path, ops);
        }
        (Value::Array(original), Value::Array(modified)) => {
            diff_array(original, modified, path, ops);
        }
        _ => ops.push(PatchOperation::Replace {
            path: path.clone(),
            value: modified.clone(),
        }),
    }
}

fn diff_object(
    original: &Map<String, Value>,
    modified: &Map<String, Value>,
    path: &JsonPointer,
    ops: &mut Vec<PatchOperation>,
) {
    for name in original.keys() {
        if !modified.contains_key(name.as_str()) {
            ops.push(PatchOperation::Remove {
                path: path.child(name.as_str()),
            });
        }
    }

    for (name, value) in modified {
        if !original.contains_key(name.as_str()) {
            // A brand new property carries its whole subtree.
            ops.push(PatchOperation::Add {
                path: path.child(name.as_str()),
                value: value.clone(),
            });
        }
    }

    for (name, original_value) in original {
        if let Some(modified_value) = modified.get(name.as_str()) {
            diff_value(original_value, modified_value, &path.child(name.as_str()), ops);
        }
    }
}

fn diff_array(
    original: &[Value],
    modified: &[Value],
    path: &JsonPointer,
    ops: &mut Vec<PatchOperation>,
) {
    let shared = original.len().min(modified.len());

    for (index, (original_value, modified_value)) in original.iter().zip(modified).enumerate() {
        diff_value(original_value, modified_value, &path.index(index), ops);
    }

    for value in &modified[shared..] {
        ops.push(PatchOperation::Add {
            path: path.append(),
            value: value.clone(),
        });
    }

    // Highest index first: earlier removals must not shift the targets
    // of later ones.
    for index in (shared..original.len()).rev() {
        ops.push(PatchOperation::Remove {
            path: path.index(index),
        });
    }
}

fn lowercase_paths(ops: Vec<PatchOperation>) -> Vec<PatchOperation> {
    ops.into_iter()
        .map(|op| op.map_path(|path| path.to_lowercase()))
        .collect()
}
