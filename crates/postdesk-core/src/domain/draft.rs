use std::fmt;
use std::str::FromStr;

use super::post::{NewPost, Post};
use crate::error::DraftError;

/// Editable field of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Image,
    Date,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::Title => f.write_str("title"),
            DraftField::Image => f.write_str("image"),
            DraftField::Date => f.write_str("date"),
        }
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(DraftField::Title),
            "image" => Ok(DraftField::Image),
            "date" => Ok(DraftField::Date),
            other => Err(format!("unknown draft field '{other}'")),
        }
    }
}

/// Unsaved fields for a new post. All empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub image: String,
    pub date: String,
}

impl Draft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Image => self.image = value,
            DraftField::Date => self.date = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Image => &self.image,
            DraftField::Date => &self.date,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the draft against the loaded collection and build the publish
    /// payload. Title comparison is exact and case-sensitive.
    pub fn validate(&self, existing: &[Post]) -> Result<NewPost, DraftError> {
        if self.title.is_empty() || self.image.is_empty() || self.date.is_empty() {
            return Err(DraftError::MissingFields);
        }

        if existing.iter().any(|p| p.title == self.title) {
            return Err(DraftError::DuplicateTitle);
        }

        Ok(NewPost {
            title: self.title.clone(),
            image: self.image.clone(),
            date: self.date.clone(),
            status: true,
        })
    }
}
