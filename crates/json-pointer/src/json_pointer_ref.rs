use std::fmt::{self, Debug, Display, Formatter, Write};

use crate::JsonPointer;

/// A borrowed view of a pointer's segments.
#[derive(Copy, Clone)]
pub struct JsonPointerRef<'a>(pub(crate) &'a [String]);

impl PartialEq for JsonPointerRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<JsonPointer> for JsonPointerRef<'_> {
    fn eq(&self, other: &JsonPointer) -> bool {
        self.iter().eq(other.0.iter())
    }
}

impl Eq for JsonPointerRef<'_> {}

impl Display for JsonPointerRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in self.iter() {
            f.write_str("/")?;
            write_escaped_segment(f, segment)?;
        }

        Ok(())
    }
}

impl Debug for JsonPointerRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

fn write_escaped_segment(f: &mut Formatter<'_>, segment: &str) -> fmt::Result {
    if !segment.as_bytes().iter().any(|ch| *ch == b'~' || *ch == b'/') {
        return f.write_str(segment);
    }

    for ch in segment.chars() {
        match ch {
            '~' => f.write_str("~0")?,
            '/' => f.write_str("~1")?,
            _ => f.write_char(ch)?,
        }
    }

    Ok(())
}

impl<'a> JsonPointerRef<'a> {
    pub fn to_owned(&self) -> JsonPointer {
        JsonPointer(self.0.to_vec())
    }

    /// Splits off the last segment, yielding the parent pointer and the
    /// key it addresses. Returns `None` for the root pointer.
    pub fn split_last(&self) -> Option<(JsonPointerRef<'a>, &'a str)> {
        self.0
            .split_last()
            .map(|(key, parent)| (JsonPointerRef(parent), key.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::json_pointer;

    #[test]
    fn split_to_root() {
        let pointer = json_pointer!("/a/b/c");
        let pointer_ref = pointer.as_ref();
        assert_eq!(pointer_ref.len(), 3);

        let (parent, key) = pointer_ref.split_last().unwrap();
        assert_eq!(parent.to_string(), "/a/b");
        assert_eq!(key, "c");

        let (parent, key) = parent.split_last().unwrap();
        assert_eq!(parent.to_string(), "/a");
        assert_eq!(key, "b");

        let (parent, key) = parent.split_last().unwrap();
        assert!(parent.is_empty());
        assert_eq!(key, "a");

        assert!(parent.split_last().is_none());
    }

    #[test]
    fn display_matches_owned() {
        let pointer = json_pointer!("/a~1b/0");
        assert_eq!(pointer.as_ref().to_string(), pointer.to_string());
    }
}
