use json_pointer::JsonPointer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single RFC 6902 operation, restricted to the add/remove/replace
/// subset. Serializes as `{ "op": ..., "path": ..., "value"?: ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add {
        path: JsonPointer,
        value: Value,
    },
    Remove {
        path: JsonPointer,
    },
    Replace {
        path: JsonPointer,
        value: Value,
    },
}

impl PatchOperation {
    pub fn path(&self) -> &JsonPointer {
        match self {
            Self::Add { path, .. } | Self::Remove { path } | Self::Replace { path, .. } => path,
        }
    }

    /// Returns this operation with its path rewritten by `f`; the value
    /// (if any) is untouched.
    pub fn map_path(self, f: impl FnOnce(JsonPointer) -> JsonPointer) -> Self {
        match self {
            Self::Add { path, value } => Self::Add {
                path: f(path),
                value,
            },
            Self::Remove { path } => Self::Remove { path: f(path) },
            Self::Replace { path, value } => Self::Replace {
                path: f(path),
                value,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use json_pointer::json_pointer;
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_format() {
        let ops = vec![
            PatchOperation::Add {
                path: json_pointer!("/a/-"),
                value: json!(1),
            },
            PatchOperation::Remove {
                path: json_pointer!("/b"),
            },
            PatchOperation::Replace {
                path: json_pointer!("/c/0"),
                value: json!({"d": null}),
            },
        ];

        assert_eq!(
            serde_json::to_value(&ops).unwrap(),
            json!([
                { "op": "add", "path": "/a/-", "value": 1 },
                { "op": "remove", "path": "/b" },
                { "op": "replace", "path": "/c/0", "value": {"d": null} },
            ])
        );
    }

    #[test]
    fn deserialize() {
        let ops: Vec<PatchOperation> = serde_json::from_value(json!([
            { "op": "replace", "path": "/x", "value": 2 },
        ]))
        .unwrap();

        assert_eq!(
            ops,
            vec![PatchOperation::Replace {
                path: json_pointer!("/x"),
                value: json!(2),
            }]
        );
    }

    #[test]
    fn map_path_keeps_value() {
        let op = PatchOperation::Add {
            path: json_pointer!("/Name"),
            value: json!("Name"),
        };
        let op = op.map_path(|path| path.to_lowercase());

        assert_eq!(op.path(), &json_pointer!("/name"));
        assert_eq!(
            op,
            PatchOperation::Add {
                path: json_pointer!("/name"),
                value: json!("Name"),
            }
        );
    }
}
