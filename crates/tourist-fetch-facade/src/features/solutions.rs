//! Suggested solutions to a hotel's recurring issues.

use super::HotelQuery;
use crate::error::FacadeError;
use crate::feature::{Feature, FeatureContext};
use crate::hotel::resolve_hotel_name;
use serde::Deserialize;
use serde_json::{Value, json};
use tourist_fetch_core::{ExpectedShape, RequestSpec};

/// A proposed fix for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Solution {
    #[serde(default)]
    pub id: Option<String>,
    /// The issue being addressed.
    pub issue: String,
    /// What to do about it.
    pub solution: String,
    /// When it was proposed, as displayed.
    #[serde(default)]
    pub date: Option<String>,
}

/// `GET generate_solutions?hotel_name=<name>`; the response is a list of
/// solutions or an object with a `solutions` list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionsFeature;

impl SolutionsFeature {
    /// Decodes either response form.
    pub fn decode(payload: &Value) -> Result<Vec<Solution>, serde_json::Error> {
        let list = payload.get("solutions").unwrap_or(payload);
        Vec::<Solution>::deserialize(list)
    }
}

impl Feature for SolutionsFeature {
    type Params = HotelQuery;

    fn name(&self) -> &'static str {
        "solutions"
    }

    fn request(
        &self,
        ctx: &FeatureContext<'_>,
        params: &HotelQuery,
    ) -> Result<RequestSpec, FacadeError> {
        let hotel = resolve_hotel_name(ctx.session(), params.hotel_name.as_deref())?;
        Ok(RequestSpec::get(ctx.endpoint("generate_solutions")?)
            .query("hotel_name", hotel)
            .expect(ExpectedShape::ArrayOrField("solutions".to_string())))
    }

    fn placeholder(&self) -> Option<Value> {
        Some(json!([
            {
                "id": "1",
                "issue": "Poor Wi-Fi connectivity",
                "solution": "Upgrade router firmware and add more access points",
                "date": "Mar 15, 2024"
            },
            {
                "id": "2",
                "issue": "Lack of vegetarian food options",
                "solution": "Introduce new vegetarian menu items and clearly label them",
                "date": "Mar 10, 2024"
            },
            {
                "id": "3",
                "issue": "Insufficient parking space",
                "solution": "Implement valet parking service during peak hours",
                "date": "Mar 20, 2024"
            },
            {
                "id": "4",
                "issue": "Noisy air conditioning",
                "solution": "Schedule regular maintenance and replace old units",
                "date": "Mar 25, 2024"
            },
            {
                "id": "5",
                "issue": "Long check-in process",
                "solution": "Implement mobile check-in and increase staff during peak hours",
                "date": "Mar 05, 2024"
            }
        ]))
    }
}
