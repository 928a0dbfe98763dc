//! DTOs for status endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{NewStatus, StatusFilter, UpdateStatus};
use crate::domain::pagination::PaginationQuery;

fn default_active() -> bool {
    true
}

/// Request body for creating a status.
///
/// Ownership fields (`created_by`, `updated_by`) are not accepted; any such
/// keys in the payload are ignored and the authenticated caller is used.
///
/// # Example
///
/// ```json
/// {
///   "name": "estimate",
///   "description": "Waiting for an estimate",
///   "active": true,
///   "order_number": 1
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateStatusRequest {
    pub name: String,
    pub description: String,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default)]
    pub order_number: i32,
}

impl From<CreateStatusRequest> for NewStatus {
    fn from(req: CreateStatusRequest) -> Self {
        NewStatus {
            name: req.name,
            description: req.description,
            active: req.active,
            order_number: req.order_number,
        }
    }
}

/// Request body for replacing a status' mutable content.
///
/// `active` is required so that a body carrying only `description` cannot
/// flip the flag by omission.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub description: String,
    pub active: bool,

    #[serde(default)]
    pub order_number: i32,
}

impl From<UpdateStatusRequest> for UpdateStatus {
    fn from(req: UpdateStatusRequest) -> Self {
        UpdateStatus {
            description: req.description,
            active: req.active,
            order_number: req.order_number,
        }
    }
}

/// Paging query parameters shared by list and search.
///
/// Out-of-range values are clamped rather than rejected; see [`PaginationQuery`].
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub size: Option<u32>,

    #[serde(default, alias = "orderBy")]
    pub order_by: Option<String>,
}

impl From<PageParams> for PaginationQuery {
    fn from(params: PageParams) -> Self {
        PaginationQuery::new(params.page, params.size, params.order_by)
    }
}

/// Query parameters for `GET /api/v1/status`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListStatusParams {
    #[serde(flatten)]
    pub page: PageParams,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub order_number: Option<i32>,
}

impl ListStatusParams {
    /// Splits the parameters into the paging request and the filter.
    pub fn into_parts(self) -> (PaginationQuery, StatusFilter) {
        let filter = StatusFilter {
            name: self.name.filter(|s| !s.is_empty()),
            description: self.description.filter(|s| !s.is_empty()),
            active: self.active,
            order_number: self.order_number,
        };
        (self.page.into(), filter)
    }
}

/// Query parameters for `GET /api/v1/status/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchStatusParams {
    #[serde(default, alias = "title")]
    pub text: String,

    #[serde(flatten)]
    pub page: PageParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateStatusRequest =
            serde_json::from_str(r#"{"name":"estimate","description":"d"}"#).unwrap();

        let input = NewStatus::from(req);
        assert!(input.active);
        assert_eq!(input.order_number, 0);
    }

    #[test]
    fn test_create_request_ignores_owner_fields() {
        let body = format!(
            r#"{{"name":"estimate","description":"d","created_by":"{}"}}"#,
            uuid::Uuid::new_v4()
        );
        assert!(serde_json::from_str::<CreateStatusRequest>(&body).is_ok());
    }

    #[test]
    fn test_update_request_requires_active() {
        let missing = serde_json::from_str::<UpdateStatusRequest>(r#"{"description":"d"}"#);
        assert!(missing.is_err());

        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"description":"d","active":false}"#).unwrap();
        let input = UpdateStatus::from(req);
        assert!(!input.active);
        assert_eq!(input.order_number, 0);
    }

    #[test]
    fn test_list_params_into_parts() {
        let params = ListStatusParams {
            page: PageParams {
                page: Some(2),
                size: Some(500),
                order_by: None,
            },
            name: Some(String::new()),
            description: None,
            active: Some(true),
            order_number: Some(6),
        };

        let (query, filter) = params.into_parts();

        assert_eq!(query.page(), 2);
        assert_eq!(query.size(), 100);
        assert_eq!(filter.name, None);
        assert_eq!(filter.active, Some(true));
        assert_eq!(filter.order_number, Some(6));
    }
}
