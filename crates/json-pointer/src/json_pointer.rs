use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::{parser::parse_json_pointer, JsonPointerRef, ParseJsonPointerError};

/// An owned RFC 6901 pointer: an ordered list of reference segments.
///
/// The root pointer has no segments and displays as the empty string;
/// every other pointer displays as `/`-joined segments with `~` and `/`
/// escaped per RFC 6901.
#[derive(Clone, Default, Eq)]
pub struct JsonPointer(pub(crate) Vec<String>);

impl PartialEq for JsonPointer {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<JsonPointerRef<'_>> for JsonPointer {
    fn eq(&self, other: &JsonPointerRef<'_>) -> bool {
        self.0.iter().eq(other.iter())
    }
}

impl Hash for JsonPointer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for segment in &self.0 {
            segment.hash(state);
        }
    }
}

impl Display for JsonPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_ref(), f)
    }
}

impl Debug for JsonPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for JsonPointer {
    type Err = ParseJsonPointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_json_pointer(s).map(Self)
    }
}

impl Serialize for JsonPointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JsonPointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_json_pointer(&String::deserialize(deserializer)?)
            .map(Self)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

impl JsonPointer {
    /// The pointer addressing the whole document.
    #[inline]
    pub fn root() -> JsonPointer {
        JsonPointer(Vec::new())
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_ref(&self) -> JsonPointerRef<'_> {
        JsonPointerRef(&self.0)
    }

    /// The pointer addressing property `segment` below this one.
    pub fn child(&self, segment: impl Into<String>) -> JsonPointer {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        JsonPointer(segments)
    }

    /// The pointer addressing array element `index` below this one.
    pub fn index(&self, index: usize) -> JsonPointer {
        self.child(index.to_string())
    }

    /// The pointer addressing the slot after the last element of the
    /// array below this one (the `-` append marker).
    pub fn append(&self) -> JsonPointer {
        self.child("-")
    }

    /// This pointer with every segment case-folded to lowercase.
    /// Segments that are array indices or `-` are unaffected.
    pub fn to_lowercase(&self) -> JsonPointer {
        JsonPointer(self.0.iter().map(|segment| segment.to_lowercase()).collect())
    }
}
