//! # Record Model
//!
//! A [`Record`] is one book in the catalog. Its content fields are private and every
//! write goes through a validating setter, so a `Record` value is always valid:
//!
//! - `title` / `author`: non-empty after trimming whitespace, stored as given
//! - `year`: exactly four ASCII digits, not later than the current calendar year
//! - `status`: one of the recognized labels of a [`StatusKind`], compared
//!   case-insensitively and stored with the spelling that was passed in
//!
//! The id is not validated. Records built with [`Record::new`] draw their id from an
//! [`IdSource`]; records read back from storage keep the id they were saved with.
//!
//! [`RecordData`] is the on-disk shape, one object of the `library.json` array.

use crate::error::{Result, ShelfError};
use crate::store::counter::IdSource;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    InStock,
    CheckedOut,
}

impl StatusKind {
    pub const ALL: [StatusKind; 2] = [StatusKind::InStock, StatusKind::CheckedOut];

    /// Every spelling accepted for this state. The first one is canonical.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            StatusKind::InStock => &["in stock", "в наличии"],
            StatusKind::CheckedOut => &["checked out", "выдана"],
        }
    }

    pub fn canonical(self) -> &'static str {
        self.labels()[0]
    }

    fn recognize(label: &str) -> Option<StatusKind> {
        let wanted = label.to_lowercase();
        StatusKind::ALL.into_iter().find(|kind| {
            kind.labels()
                .iter()
                .any(|known| known.to_lowercase() == wanted)
        })
    }
}

/// Availability of a book: the recognized state plus the label it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    kind: StatusKind,
    label: String,
}

impl Status {
    pub fn parse(label: &str) -> Result<Self> {
        let kind = StatusKind::recognize(label).ok_or_else(|| {
            let known: Vec<&str> = StatusKind::ALL
                .iter()
                .flat_map(|k| k.labels().iter().copied())
                .collect();
            ShelfError::invalid(
                "status",
                format!("must be one of: {}", known.join(", ")),
            )
        })?;
        Ok(Self {
            kind,
            label: label.to_string(),
        })
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Status {
    fn default() -> Self {
        Self {
            kind: StatusKind::InStock,
            label: StatusKind::InStock.canonical().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ShelfError::invalid("title", "must be a non-empty string"));
    }
    Ok(())
}

pub fn validate_author(author: &str) -> Result<()> {
    if author.trim().is_empty() {
        return Err(ShelfError::invalid("author", "must be a non-empty string"));
    }
    Ok(())
}

pub fn validate_year(year: &str) -> Result<()> {
    validate_year_against(year, chrono::Local::now().year())
}

fn validate_year_against(year: &str, current_year: i32) -> Result<()> {
    let reason = || {
        format!(
            "must be a 4-digit year no later than {}, got \"{}\"",
            current_year, year
        )
    };
    if year.chars().count() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(ShelfError::invalid("year", reason()));
    }
    let value: i32 = year
        .parse()
        .map_err(|_| ShelfError::invalid("year", reason()))?;
    if value > current_year {
        return Err(ShelfError::invalid("year", reason()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: u64,
    title: String,
    author: String,
    year: String,
    status: Status,
}

impl Record {
    /// Validates the fields, then draws a fresh id. Invalid input never consumes an id.
    pub fn new<I: IdSource + ?Sized>(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        status: Status,
        ids: &mut I,
    ) -> Result<Self> {
        let (title, author, year) = (title.into(), author.into(), year.into());
        validate_title(&title)?;
        validate_author(&author)?;
        validate_year(&year)?;
        let id = ids.next_id()?;
        Ok(Self {
            id,
            title,
            author,
            year,
            status,
        })
    }

    pub fn with_id(
        id: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        status: &str,
    ) -> Result<Self> {
        let (title, author, year) = (title.into(), author.into(), year.into());
        validate_title(&title)?;
        validate_author(&author)?;
        validate_year(&year)?;
        let status = Status::parse(status)?;
        Ok(Self {
            id,
            title,
            author,
            year,
            status,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub(crate) fn reassign_id(&mut self, id: u64) {
        self.id = id;
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> Result<()> {
        let author = author.into();
        validate_author(&author)?;
        self.author = author;
        Ok(())
    }

    pub fn set_year(&mut self, year: impl Into<String>) -> Result<()> {
        let year = year.into();
        validate_year(&year)?;
        self.year = year;
        Ok(())
    }

    pub fn set_status(&mut self, status: &str) -> Result<()> {
        self.status = Status::parse(status)?;
        Ok(())
    }

    /// Whether `query` is exactly the title, the author or the year.
    pub fn matches_exactly(&self, query: &str) -> bool {
        self.title == query || self.author == query || self.year == query
    }

    pub fn to_data(&self) -> RecordData {
        RecordData {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.clone(),
            status: self.status.label().to_string(),
        }
    }

    /// Rebuilds a record from storage, re-running every field check.
    pub fn from_data(data: RecordData) -> Result<Self> {
        Self::with_id(data.id, data.title, data.author, data.year, &data.status)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Status: {}", self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: String,
}
