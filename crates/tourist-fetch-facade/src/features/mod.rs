//! The client's features.
//!
//! | Feature | Request | Placeholder |
//! |---|---|---|
//! | [`ReviewStatsFeature`] | `GET get_review_stats?hotel_name=` | sample statistics |
//! | [`SolutionsFeature`] | `GET generate_solutions?hotel_name=` | sample solutions |
//! | [`IssuesFeature`] | `GET get_issues?hotel_name=` | sample issues |
//! | [`TopPlacesFeature`] | `GET top_places` | empty list |
//! | [`ReviewsFeature`] | `GET get_reviews` | empty list |
//! | [`LoginFeature`] | `POST login` | none |
//! | [`RegisterFeature`] | `POST register` | none |

mod auth;
mod issues;
mod places;
mod review_stats;
mod solutions;

pub use auth::{LoginFeature, LoginParams, RegisterFeature, RegisterParams, UserType};
pub use issues::{Issue, IssueStatus, IssuesFeature};
pub use places::{ReviewsFeature, TopPlacesFeature};
pub use review_stats::{ReviewCounts, ReviewPercentages, ReviewStats, ReviewStatsFeature, SampleReviews};
pub use solutions::{Solution, SolutionsFeature};

/// Which hotel a dashboard call is about.
///
/// `None` resolves the name from the session; see
/// [`resolve_hotel_name`](crate::resolve_hotel_name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelQuery {
    /// Explicit hotel name.
    pub hotel_name: Option<String>,
}

impl HotelQuery {
    /// Resolve the hotel from the session.
    pub fn from_session() -> Self {
        Self::default()
    }

    /// Query a specific hotel.
    pub fn named(hotel_name: impl Into<String>) -> Self {
        Self {
            hotel_name: Some(hotel_name.into()),
        }
    }
}
