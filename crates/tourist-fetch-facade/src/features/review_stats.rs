//! Review statistics for a hotel.

use super::HotelQuery;
use crate::error::FacadeError;
use crate::feature::{Feature, FeatureContext};
use crate::hotel::resolve_hotel_name;
use serde::Deserialize;
use serde_json::{Value, json};
use tourist_fetch_core::{ExpectedShape, RequestSpec};

/// Sentiment counts, chart images, and sample reviews for one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewStats {
    /// Reviews per sentiment.
    pub counts: ReviewCounts,
    /// URL of the bar chart image.
    #[serde(default)]
    pub bar_plot: Option<String>,
    /// URL of the pie chart image.
    #[serde(default)]
    pub pie_chart: Option<String>,
    /// A few reviews per sentiment.
    #[serde(default)]
    pub sample_reviews: SampleReviews,
}

/// Reviews per sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewCounts {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub neutral: u64,
    #[serde(default)]
    pub negative: u64,
}

/// Whole-number share of each sentiment, rounded to nearest.
///
/// Rounding means the three values need not sum to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewPercentages {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl ReviewCounts {
    /// Total number of reviews, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.positive
            .saturating_add(self.neutral)
            .saturating_add(self.negative)
    }

    /// Percentage breakdown. All zero when there are no reviews.
    pub fn percentages(&self) -> ReviewPercentages {
        if self.total() == 0 {
            return ReviewPercentages::default();
        }
        let total = self.positive as f64 + self.neutral as f64 + self.negative as f64;
        let share = |count: u64| ((count as f64 / total) * 100.0).round() as u32;
        ReviewPercentages {
            positive: share(self.positive),
            neutral: share(self.neutral),
            negative: share(self.negative),
        }
    }
}

/// Example review texts per sentiment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SampleReviews {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub neutral: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// `GET get_review_stats?hotel_name=<name>`; the response must carry `counts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewStatsFeature;

impl Feature for ReviewStatsFeature {
    type Params = HotelQuery;

    fn name(&self) -> &'static str {
        "review_stats"
    }

    fn request(
        &self,
        ctx: &FeatureContext<'_>,
        params: &HotelQuery,
    ) -> Result<RequestSpec, FacadeError> {
        let hotel = resolve_hotel_name(ctx.session(), params.hotel_name.as_deref())?;
        Ok(RequestSpec::get(ctx.endpoint("get_review_stats")?)
            .query("hotel_name", hotel)
            .expect(ExpectedShape::field("counts")))
    }

    fn placeholder(&self) -> Option<Value> {
        Some(json!({
            "bar_plot": "https://tourismaiassistant2025.s3.amazonaws.com/b293a89b-de94-4117-8d15-ec460f64d17a.png",
            "pie_chart": "https://tourismaiassistant2025.s3.amazonaws.com/9a8f2433-3e97-47d9-83aa-4304b5bfa609.png",
            "counts": {
                "positive": 142,
                "neutral": 42,
                "negative": 34
            },
            "sample_reviews": {
                "positive": [
                    "Quiet, friendly staff, no issues"
                ],
                "negative": [
                    "The overpowering odor of MILDEW greeted us upon arrival. The condition of this hotel is below acceptable."
                ]
            }
        }))
    }
}
