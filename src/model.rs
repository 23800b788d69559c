// src/model.rs
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Activity name -> details, in the order the server listed them.
pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Not clamped: an over-full activity reports a negative count.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    pub fn schedule_label(&self) -> &str {
        match self.schedule.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "TBD",
        }
    }

    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left())
    }
}

/// Body of a signup/unregister response. Success carries `message`,
/// rejection carries `detail`. Non-string values (validation error lists)
/// read as absent so the caller falls back to its own text.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiMessage {
    #[serde(default, deserialize_with = "text_only")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "text_only")]
    pub detail: Option<String>,
}

fn text_only<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn is_separator(c: char) -> bool {
    matches!(c, '.' | '-' | '_' | ' ')
}

/// Two-letter avatar label for a participant identifier.
///
/// Uses the local part of an email, split on runs of `.`, `-`, `_` or spaces:
/// first letter of the first two fragments, or the first two letters of a
/// single fragment. Cosmetic only; different people can share initials.
pub fn initials(identifier: &str) -> String {
    let local = identifier.split('@').next().unwrap_or_default();
    let parts: Vec<&str> = local.split(is_separator).filter(|p| !p.is_empty()).collect();

    let raw: String = match parts.as_slice() {
        [] => local.chars().take(2).collect(),
        [first] => first.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };

    raw.to_uppercase().chars().take(2).collect()
}
