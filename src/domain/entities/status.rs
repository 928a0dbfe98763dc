//! Status entity and its input/output shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::pagination::PaginationQuery;

/// Maximum length of [`Status::name`] in characters.
pub const NAME_MAX_LEN: u64 = 36;
/// Maximum length of [`Status::description`] in characters.
pub const DESCRIPTION_MAX_LEN: u64 = 255;

/// A status row as stored in the `status` table.
///
/// `created_by` / `updated_by` are always taken from the authenticated caller,
/// never from client input. A non-null `deleted_at` marks the row as
/// soft-deleted; such rows are invisible to every read path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Status {
    pub id: Uuid,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub order_number: i32,
}

impl Status {
    /// Returns true if `user_id` created this status.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.created_by == user_id
    }
}

/// Input data for creating a new status.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewStatus {
    #[validate(length(min = 1, max = 36, message = "name is required and must be at most 36 characters"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "description is required and must be at most 255 characters"
    ))]
    pub description: String,

    pub active: bool,
    pub order_number: i32,
}

impl NewStatus {
    /// Creates an active status input with order number `0`.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            active: true,
            order_number: 0,
        }
    }
}

/// Replacement values for the mutable content of a status.
///
/// `name`, `id` and `created_by` are immutable and therefore absent.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateStatus {
    #[validate(length(
        min = 1,
        max = 255,
        message = "description is required and must be at most 255 characters"
    ))]
    pub description: String,

    pub active: bool,
    pub order_number: i32,
}

/// Optional equality predicates for listing statuses.
///
/// `None` omits the predicate entirely; supplied values are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub order_number: Option<i32>,
}

/// One page of statuses plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusList {
    pub total_count: i64,
    pub total_pages: i64,
    pub page: u32,
    pub size: u32,
    pub has_more: bool,
    #[serde(rename = "data")]
    pub items: Vec<Status>,
}

impl StatusList {
    /// Builds the envelope for `items` out of `total_count` matches.
    pub fn new(total_count: i64, query: &PaginationQuery, items: Vec<Status>) -> Self {
        Self {
            total_count,
            total_pages: query.total_pages(total_count),
            page: query.page(),
            size: query.size(),
            has_more: query.has_more(total_count),
            items,
        }
    }

    /// An envelope with no matches.
    pub fn empty(query: &PaginationQuery) -> Self {
        Self::new(0, query, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_status() -> Status {
        let owner = Uuid::new_v4();
        Status {
            id: Uuid::new_v4(),
            created_by: owner,
            updated_by: owner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            name: "estimate".to_string(),
            description: "d".to_string(),
            active: true,
            order_number: 0,
        }
    }

    #[test]
    fn test_status_is_owned_by() {
        let status = sample_status();
        assert!(status.is_owned_by(status.created_by));
        assert!(!status.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_new_status_defaults() {
        let input = NewStatus::new("estimate", "d");
        assert!(input.active);
        assert_eq!(input.order_number, 0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_status_requires_name() {
        assert!(NewStatus::new("", "d").validate().is_err());
    }

    #[test]
    fn test_new_status_name_length_bound() {
        let at_limit = "n".repeat(NAME_MAX_LEN as usize);
        let over_limit = "n".repeat(NAME_MAX_LEN as usize + 1);

        assert!(NewStatus::new(at_limit, "d").validate().is_ok());
        assert!(NewStatus::new(over_limit, "d").validate().is_err());
    }

    #[test]
    fn test_new_status_description_length_bound() {
        let at_limit = "d".repeat(DESCRIPTION_MAX_LEN as usize);
        let over_limit = "d".repeat(DESCRIPTION_MAX_LEN as usize + 1);

        assert!(NewStatus::new("n", at_limit).validate().is_ok());
        assert!(NewStatus::new("n", over_limit).validate().is_err());
    }

    #[test]
    fn test_update_status_requires_description() {
        let update = UpdateStatus {
            description: String::new(),
            active: false,
            order_number: 1,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_status_json_roundtrip() {
        let status = sample_status();
        let json = serde_json::to_string(&status).unwrap();
        let parsed: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }

    #[test]
    fn test_status_list_serializes_items_as_data() {
        let query = PaginationQuery::new(Some(1), Some(10), None);
        let list = StatusList::new(1, &query, vec![sample_status()]);
        let json = serde_json::to_value(&list).unwrap();

        assert!(json.get("data").is_some());
        assert_eq!(json["total_count"], 1);
        assert_eq!(json["total_pages"], 1);
        assert_eq!(json["has_more"], false);
    }
}
