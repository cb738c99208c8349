use serde_json::Value;

use crate::JsonPointerRef;

/// Pointer-based navigation over `serde_json::Value`.
pub trait ValueExt {
    fn locate(&self, pointer: JsonPointerRef<'_>) -> Option<&Value>;

    fn locate_mut(&mut self, pointer: JsonPointerRef<'_>) -> Option<&mut Value>;
}

impl ValueExt for Value {
    fn locate(&self, pointer: JsonPointerRef<'_>) -> Option<&Value> {
        pointer.iter().try_fold(self, |acc, segment| match acc {
            Value::Object(obj) => obj.get(segment),
            Value::Array(array) => {
                let idx = segment.parse::<usize>().ok()?;
                array.get(idx)
            }
            _ => None,
        })
    }

    fn locate_mut(&mut self, pointer: JsonPointerRef<'_>) -> Option<&mut Value> {
        pointer.iter().try_fold(self, |acc, segment| match acc {
            Value::Object(obj) => obj.get_mut(segment),
            Value::Array(array) => {
                let idx = segment.parse::<usize>().ok()?;
                array.get_mut(idx)
            }
            _ => None,
        })
    }
}
