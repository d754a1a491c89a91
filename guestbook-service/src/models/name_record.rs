use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::fmt;

pub const EMPTY_NAME_DETAIL: &str = "Name cannot be empty";

/// A trimmed, non-empty guest name.
///
/// `parse` is the only constructor, so holding a `GuestName` proves the value
/// passed validation. Duplicates and arbitrary lengths are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestName(String);

/// Unicode whitespace plus the ASCII information separators (U+001C..=U+001F).
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl GuestName {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim_matches(is_trimmable);
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(EMPTY_NAME_DETAIL.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GuestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored guestbook entry. The store owns any identifier; it is not modelled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameRecord {
    pub name: String,
}

impl From<GuestName> for NameRecord {
    fn from(name: GuestName) -> Self {
        Self {
            name: name.into_inner(),
        }
    }
}
