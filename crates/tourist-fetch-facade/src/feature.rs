//! The per-feature contract.

use crate::error::FacadeError;
use crate::session::SessionStore;
use serde_json::Value;
use tourist_fetch_core::RequestSpec;
use url::Url;

/// What a feature sees while building its request.
#[derive(Clone, Copy)]
pub struct FeatureContext<'a> {
    base_url: &'a Url,
    session: &'a dyn SessionStore,
}

impl<'a> FeatureContext<'a> {
    /// Creates a context over `base_url` and `session`.
    pub fn new(base_url: &'a Url, session: &'a dyn SessionStore) -> Self {
        Self { base_url, session }
    }

    /// Resolves `path` against the backend base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, FacadeError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// The session store.
    pub fn session(&self) -> &'a dyn SessionStore {
        self.session
    }
}

/// One feature of the client: the request it makes and what it falls back to.
///
/// Implementations only describe; [`RequestFacade`](crate::RequestFacade)
/// runs the strategy chain and classifies failures.
pub trait Feature: Send + Sync {
    /// Per-call parameters.
    type Params: Send + Sync;

    /// Name used for the orchestrator, logs, and metrics.
    fn name(&self) -> &'static str;

    /// Builds the request for one call.
    fn request(
        &self,
        ctx: &FeatureContext<'_>,
        params: &Self::Params,
    ) -> Result<RequestSpec, FacadeError>;

    /// Payload returned when every strategy fails. `None` makes total failure
    /// an error.
    fn placeholder(&self) -> Option<Value> {
        None
    }

    /// Runs after a live payload arrives.
    fn on_live(
        &self,
        _ctx: &FeatureContext<'_>,
        _params: &Self::Params,
        _payload: &Value,
    ) -> Result<(), FacadeError> {
        Ok(())
    }
}
