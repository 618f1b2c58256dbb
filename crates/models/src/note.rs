use serde::{Deserialize, Serialize};

use crate::patch::{overwrite, Patch};

/// Stored note; also the response shape.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteCreate {
    pub title: String,
    pub content: String,
}

impl NoteCreate {
    pub fn into_note(self, id: String) -> Note {
        Note { id, title: self.title, content: self.content }
    }
}

/// Partial update; `null` and a missing key both mean "leave as is".
/// Any string that is present, empty included, overwrites.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Patch<Note> for NoteUpdate {
    fn apply_to(self, target: &mut Note) {
        overwrite(&mut target.title, self.title);
        overwrite(&mut target.content, self.content);
    }

    fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
