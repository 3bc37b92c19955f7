//! Traveler-facing listings.

use crate::error::FacadeError;
use crate::feature::{Feature, FeatureContext};
use serde_json::{Value, json};
use tourist_fetch_core::{ExpectedShape, RequestSpec};

/// `GET top_places`; the response is a list. Falls back to an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopPlacesFeature;

impl Feature for TopPlacesFeature {
    type Params = ();

    fn name(&self) -> &'static str {
        "top_places"
    }

    fn request(&self, ctx: &FeatureContext<'_>, _params: &()) -> Result<RequestSpec, FacadeError> {
        Ok(RequestSpec::get(ctx.endpoint("top_places")?).expect(ExpectedShape::Array))
    }

    fn placeholder(&self) -> Option<Value> {
        Some(json!([]))
    }
}

/// `GET get_reviews`; the response is a list. Falls back to an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewsFeature;

impl Feature for ReviewsFeature {
    type Params = ();

    fn name(&self) -> &'static str {
        "reviews"
    }

    fn request(&self, ctx: &FeatureContext<'_>, _params: &()) -> Result<RequestSpec, FacadeError> {
        Ok(RequestSpec::get(ctx.endpoint("get_reviews")?).expect(ExpectedShape::Array))
    }

    fn placeholder(&self) -> Option<Value> {
        Some(json!([]))
    }
}
