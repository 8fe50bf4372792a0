//! Book instance model and related types.
//!
//! A book instance is one physical copy that the library owns. It carries
//! its own UUID identity, a loan status, and an optional due date; the
//! borrower is recorded as free text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Loan status of a copy, stored as a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum LoanStatus {
    #[serde(rename = "m")]
    #[sqlx(rename = "m")]
    Maintenance,
    #[serde(rename = "o")]
    #[sqlx(rename = "o")]
    OnLoan,
    #[serde(rename = "a")]
    #[sqlx(rename = "a")]
    Available,
    #[serde(rename = "r")]
    #[sqlx(rename = "r")]
    Reserved,
}

impl LoanStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m" => Some(LoanStatus::Maintenance),
            "o" => Some(LoanStatus::OnLoan),
            "a" => Some(LoanStatus::Available),
            "r" => Some(LoanStatus::Reserved),
            _ => None,
        }
    }
}

impl Default for LoanStatus {
    // New copies start out of circulation until a librarian releases them
    fn default() -> Self {
        LoanStatus::Maintenance
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// Full book instance model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: Uuid,
    /// Referenced book id; nulled when the book is deleted.
    #[serde(rename = "book")]
    pub book_id: Option<i64>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    #[serde(rename = "language")]
    pub language_id: Option<i64>,
    pub status: LoanStatus,
    /// Free-text borrower note; no user relation behind it.
    pub borrower: Option<String>,
    // Joined from books (None when the reference is null)
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
}

impl std::fmt::Display for BookInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.book_title.as_deref().unwrap_or("-"))
    }
}

/// Create book instance request. The id is generated server-side; a
/// missing status falls back to [`LoanStatus::Maintenance`].
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookInstance {
    #[serde(rename = "book", default)]
    pub book_id: Option<i64>,
    #[validate(length(min = 1, max = 200, message = "Imprint must be 1-200 characters"))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    #[serde(rename = "language", default)]
    pub language_id: Option<i64>,
    pub status: Option<LoanStatus>,
    pub borrower: Option<String>,
}

/// Update book instance request (full replacement: the edit form submits
/// every field, so an absent due date clears the stored one)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookInstance {
    #[serde(rename = "book", default)]
    pub book_id: Option<i64>,
    #[validate(length(min = 1, max = 200, message = "Imprint must be 1-200 characters"))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    #[serde(rename = "language", default)]
    pub language_id: Option<i64>,
    pub status: LoanStatus,
    pub borrower: Option<String>,
}

/// Filters for listing book instances. All fields combine with AND.
#[derive(Debug, Default, Deserialize)]
pub struct BookInstanceQuery {
    #[serde(rename = "book", default)]
    pub book_id: Option<i64>,
    pub status: Option<LoanStatus>,
    /// Exact due date match
    pub due_back: Option<NaiveDate>,
    /// Due on or before this date
    pub due_before: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_roundtrip() {
        for status in [
            LoanStatus::Maintenance,
            LoanStatus::OnLoan,
            LoanStatus::Available,
            LoanStatus::Reserved,
        ] {
            assert_eq!(LoanStatus::from_code(status.as_code()), Some(status));
        }
        assert_eq!(LoanStatus::from_code("x"), None);
    }

    #[test]
    fn test_status_default_is_maintenance() {
        assert_eq!(LoanStatus::default(), LoanStatus::Maintenance);
        assert_eq!(LoanStatus::default().as_code(), "m");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LoanStatus::Maintenance.to_string(), "Maintenance");
        assert_eq!(LoanStatus::OnLoan.to_string(), "On loan");
        assert_eq!(LoanStatus::Available.to_string(), "Available");
        assert_eq!(LoanStatus::Reserved.to_string(), "Reserved");
    }

    #[test]
    fn test_display_shows_id_and_title() {
        let id = Uuid::new_v4();
        let mut instance = BookInstance {
            id,
            book_id: Some(1),
            imprint: "Ace, 1990".to_string(),
            due_back: None,
            language_id: None,
            status: LoanStatus::Available,
            borrower: None,
            book_title: Some("Dune".to_string()),
        };
        assert_eq!(instance.to_string(), format!("{} (Dune)", id));

        instance.book_id = None;
        instance.book_title = None;
        assert_eq!(instance.to_string(), format!("{} (-)", id));
    }
}
