use super::{Field, FieldKind, ValidationError};

/// A free-text note with an ordered set of tags.
///
/// The text is a [`FieldKind::Note`] field and is replaced wholesale on edit.
/// Tags behave as a set: adding a tag that is already present, or removing one
/// that is not, changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    text: Field,
    tags: Vec<String>,
}

impl Note {
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            text: Field::new(FieldKind::Note, text)?,
            tags: Vec::new(),
        })
    }

    pub fn with_tags<I, T>(text: &str, tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut note = Self::new(text)?;
        for tag in tags {
            note.add_tag(tag.as_ref())?;
        }
        Ok(note)
    }

    /// Builds a note from stored data without validating text or tags.
    pub fn trusted(text: &str, tags: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Self {
            text: Field::trusted(FieldKind::Note, text),
            tags: unique,
        }
    }

    pub fn text(&self) -> &str {
        self.text.raw()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns `true` if the tag was not present before.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, ValidationError> {
        let tag = Field::new(FieldKind::Tag, tag)?;
        if self.has_tag(tag.raw()) {
            return Ok(false);
        }
        self.tags.push(tag.raw().to_string());
        Ok(true)
    }

    /// Returns `true` if the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_note() {
        let note = Note::new("here should be some text").unwrap();
        assert_eq!(note.text(), "here should be some text");
        assert!(note.tags().is_empty());
    }

    #[test]
    fn test_invalid_note() {
        assert!(Note::new("12").is_err());
        assert!(Note::new("as").is_err());
    }

    #[test]
    fn test_tags_are_idempotent() {
        let mut note = Note::new("likes spicy food").unwrap();
        assert!(note.add_tag("spicy").unwrap());
        assert!(!note.add_tag("spicy").unwrap());
        assert_eq!(note.tags(), ["spicy"]);

        assert!(note.remove_tag("spicy"));
        assert!(!note.remove_tag("spicy"));
        assert!(note.tags().is_empty());
    }

    #[test]
    fn test_tags_keep_insertion_order() {
        let note = Note::with_tags("allergic to nuts", ["allergy", "nuts", "allergy"]).unwrap();
        assert_eq!(note.tags(), ["allergy", "nuts"]);
    }

    #[test]
    fn test_invalid_tag_is_rejected() {
        let mut note = Note::new("anniversary dinner").unwrap();
        let err = note.add_tag("big day").unwrap_err();
        assert_eq!(err.kind, FieldKind::Tag);
        assert!(note.tags().is_empty());
    }

    #[test]
    fn test_trusted_note_skips_validation() {
        let note = Note::trusted("ok", vec!["a".into(), "a".into(), "b".into()]);
        assert_eq!(note.text(), "ok");
        assert_eq!(note.tags(), ["a", "b"]);
    }
}
