//! Recurring issues raised in a hotel's reviews.

use super::HotelQuery;
use crate::error::FacadeError;
use crate::feature::{Feature, FeatureContext};
use crate::hotel::resolve_hotel_name;
use serde::Deserialize;
use serde_json::{Value, json};
use tourist_fetch_core::{ExpectedShape, RequestSpec};

/// Whether an issue has been dealt with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    #[default]
    Pending,
    Resolved,
}

impl IssueStatus {
    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            IssueStatus::Pending => IssueStatus::Resolved,
            IssueStatus::Resolved => IssueStatus::Pending,
        }
    }
}

/// One issue and how many reviews mention it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub status: IssueStatus,
}

/// `GET get_issues?hotel_name=<name>`; the response is a list.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssuesFeature;

impl Feature for IssuesFeature {
    type Params = HotelQuery;

    fn name(&self) -> &'static str {
        "issues"
    }

    fn request(
        &self,
        ctx: &FeatureContext<'_>,
        params: &HotelQuery,
    ) -> Result<RequestSpec, FacadeError> {
        let hotel = resolve_hotel_name(ctx.session(), params.hotel_name.as_deref())?;
        Ok(RequestSpec::get(ctx.endpoint("get_issues")?)
            .query("hotel_name", hotel)
            .expect(ExpectedShape::Array))
    }

    fn placeholder(&self) -> Option<Value> {
        Some(json!([
            { "id": "1", "title": "Poor Wi-Fi connectivity", "votes": 150, "status": "pending" },
            { "id": "2", "title": "Lack of vegetarian food options", "votes": 120, "status": "pending" },
            { "id": "3", "title": "Insufficient parking space", "votes": 100, "status": "pending" },
            { "id": "4", "title": "Noisy air conditioning", "votes": 80, "status": "pending" },
            { "id": "5", "title": "Long check-in process", "votes": 75, "status": "pending" }
        ]))
    }
}
