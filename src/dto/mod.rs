use chrono::{DateTime, Utc};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, Visitor},
};
use utoipa::ToSchema;

use std::fmt;

use crate::models::Note;

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteResponse {
    /// Note title
    pub title: String,
    /// Note description
    pub description: String,
    /// Time the note was created or last replaced, assigned by the server
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            title: note.title,
            description: note.description,
            created_at: note.created_at,
        }
    }
}

/// Body accepted by both create and replace.
///
/// `created_at` is accepted so that clients may echo a previously returned note,
/// but it is never stored.
///
/// Decoding is lenient: keys match case-insensitively, later duplicates win,
/// `null` values leave a field empty and a `null` body is an empty note.
#[derive(Debug, Default, ToSchema)]
pub struct NoteRequest {
    /// Note title
    pub title: String,
    /// Note description
    pub description: String,
    /// Ignored, always overwritten by the server
    pub created_at: Option<DateTime<Utc>>,
}

impl<'de> Deserialize<'de> for NoteRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(NoteRequestVisitor)
    }
}

struct NoteRequestVisitor;

impl<'de> Visitor<'de> for NoteRequestVisitor {
    type Value = NoteRequest;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a note object or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NoteRequest::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NoteRequest::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut note = NoteRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("title") {
                if let Some(title) = map.next_value::<Option<String>>()? {
                    note.title = title;
                }
            } else if key.eq_ignore_ascii_case("description") {
                if let Some(description) = map.next_value::<Option<String>>()? {
                    note.description = description;
                }
            } else if key.eq_ignore_ascii_case("created_at") {
                if let Some(created_at) = map.next_value::<Option<DateTime<Utc>>>()? {
                    note.created_at = Some(created_at);
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(note)
    }
}
