//! One entry point for every feature.

use crate::config::ClientConfig;
use crate::error::FacadeError;
use crate::facade::{FacadeOutcome, RequestFacade};
use crate::feature::Feature;
use crate::features::{
    HotelQuery, IssuesFeature, LoginFeature, LoginParams, RegisterFeature, RegisterParams,
    ReviewStatsFeature, ReviewsFeature, SolutionsFeature, TopPlacesFeature,
};
use crate::session::SessionStore;
use std::fmt;
use std::sync::Arc;
use tourist_fetch_fallback::{BoxedStrategy, FallbackOrchestrator};
use tourist_fetch_transport::standard_chain;

/// The tourism backend client.
///
/// Every feature gets its own orchestrator over a shared strategy chain and
/// session store, so a client can be shared across tasks behind an `Arc`.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use tourist_fetch_facade::{ClientConfig, HotelQuery, MemorySessionStore, TouristClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::builder(Url::parse("http://localhost:5001")?).build()?;
/// let client = TouristClient::new(config, Arc::new(MemorySessionStore::new()))?;
///
/// let stats = client.review_stats(&HotelQuery::named("Grand Plaza")).await?;
/// if let Some(error) = &stats.error {
///     println!("showing sample data: {}", error);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TouristClient {
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
    review_stats: RequestFacade<ReviewStatsFeature>,
    solutions: RequestFacade<SolutionsFeature>,
    issues: RequestFacade<IssuesFeature>,
    top_places: RequestFacade<TopPlacesFeature>,
    reviews: RequestFacade<ReviewsFeature>,
    login: RequestFacade<LoginFeature>,
    register: RequestFacade<RegisterFeature>,
}

impl TouristClient {
    /// Creates a client using the standard HTTP strategy chain.
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self, FacadeError> {
        let strategies = standard_chain(&config.transport())?;
        Ok(Self::with_strategies(config, session, strategies))
    }

    /// Creates a client over a custom strategy chain.
    pub fn with_strategies(
        config: ClientConfig,
        session: Arc<dyn SessionStore>,
        strategies: Vec<BoxedStrategy>,
    ) -> Self {
        let wiring = Wiring {
            config: &config,
            session: &session,
            strategies: &strategies,
        };

        Self {
            review_stats: wiring.build(ReviewStatsFeature),
            solutions: wiring.build(SolutionsFeature),
            issues: wiring.build(IssuesFeature),
            top_places: wiring.build(TopPlacesFeature),
            reviews: wiring.build(ReviewsFeature),
            login: wiring.build(LoginFeature),
            register: wiring.build(RegisterFeature),
            config,
            session,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The session store.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Sentiment statistics for a hotel.
    pub async fn review_stats(&self, query: &HotelQuery) -> Result<FacadeOutcome, FacadeError> {
        self.review_stats.execute(query).await
    }

    /// Suggested solutions for a hotel's issues.
    pub async fn solutions(&self, query: &HotelQuery) -> Result<FacadeOutcome, FacadeError> {
        self.solutions.execute(query).await
    }

    /// Recurring issues for a hotel.
    pub async fn issues(&self, query: &HotelQuery) -> Result<FacadeOutcome, FacadeError> {
        self.issues.execute(query).await
    }

    /// Top destinations.
    pub async fn top_places(&self) -> Result<FacadeOutcome, FacadeError> {
        self.top_places.execute(&()).await
    }

    /// Traveler reviews.
    pub async fn reviews(&self) -> Result<FacadeOutcome, FacadeError> {
        self.reviews.execute(&()).await
    }

    /// Signs in and records the session.
    pub async fn login(&self, params: &LoginParams) -> Result<FacadeOutcome, FacadeError> {
        self.login.execute(params).await
    }

    /// Registers an account and records the session.
    pub async fn register(&self, params: &RegisterParams) -> Result<FacadeOutcome, FacadeError> {
        self.register.execute(params).await
    }

    /// Clears the session.
    pub fn logout(&self) -> Result<(), FacadeError> {
        self.session.clear()?;
        Ok(())
    }
}

impl fmt::Debug for TouristClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouristClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

struct Wiring<'a> {
    config: &'a ClientConfig,
    session: &'a Arc<dyn SessionStore>,
    strategies: &'a [BoxedStrategy],
}

impl Wiring<'_> {
    fn build<F: Feature>(&self, feature: F) -> RequestFacade<F> {
        let orchestrator = FallbackOrchestrator::builder()
            .name(feature.name())
            .platform(self.config.platform())
            .strategies(self.strategies.iter().cloned())
            .build();

        RequestFacade::new(
            feature,
            orchestrator,
            self.config.base_url().clone(),
            Arc::clone(self.session),
        )
    }
}
