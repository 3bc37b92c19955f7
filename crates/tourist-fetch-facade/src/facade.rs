//! Feature-agnostic request execution.

use crate::error::FacadeError;
use crate::feature::{Feature, FeatureContext};
use crate::session::SessionStore;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tourist_fetch_classifier::{ClassifiedError, ErrorClassifier, PriorityClassifier};
use tourist_fetch_fallback::{FallbackOrchestrator, FallbackOutcome};
use url::Url;

/// Result of a facade call that produced a payload.
///
/// `error` is `None` for live data and carries the classified failure when
/// the payload is the feature's placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct FacadeOutcome {
    /// The orchestrator's outcome.
    pub outcome: FallbackOutcome,
    /// Why the placeholder was used, if it was.
    pub error: Option<ClassifiedError>,
}

impl FacadeOutcome {
    /// The live payload or the placeholder.
    pub fn payload(&self) -> &Value {
        &self.outcome.payload
    }

    /// Returns `true` if the payload came from the network.
    pub fn is_live(&self) -> bool {
        self.outcome.is_live()
    }

    /// Returns `true` if the payload is the placeholder.
    pub fn used_placeholder(&self) -> bool {
        self.outcome.used_placeholder
    }

    /// Decodes the payload into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        self.outcome.decode()
    }
}

/// Runs one [`Feature`] through a [`FallbackOrchestrator`].
///
/// Per call: build the request, run the chain, then
/// - live payload: run the feature's post-success hook, return it;
/// - placeholder: return it with the classified error;
/// - no placeholder: return [`FacadeError::Classified`].
pub struct RequestFacade<F> {
    feature: F,
    orchestrator: FallbackOrchestrator,
    classifier: Arc<dyn ErrorClassifier>,
    base_url: Url,
    session: Arc<dyn SessionStore>,
}

impl<F: Feature> RequestFacade<F> {
    /// Creates a facade classifying failures with [`PriorityClassifier`].
    pub fn new(
        feature: F,
        orchestrator: FallbackOrchestrator,
        base_url: Url,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            feature,
            orchestrator,
            classifier: Arc::new(PriorityClassifier),
            base_url,
            session,
        }
    }

    /// Replaces the classifier.
    pub fn with_classifier<C>(mut self, classifier: C) -> Self
    where
        C: ErrorClassifier + 'static,
    {
        self.classifier = Arc::new(classifier);
        self
    }

    /// The wrapped feature.
    pub fn feature(&self) -> &F {
        &self.feature
    }

    /// The orchestrator running the chain.
    pub fn orchestrator(&self) -> &FallbackOrchestrator {
        &self.orchestrator
    }

    /// Executes one logical request.
    pub async fn execute(&self, params: &F::Params) -> Result<FacadeOutcome, FacadeError> {
        let ctx = FeatureContext::new(&self.base_url, self.session.as_ref());
        let spec = self.feature.request(&ctx, params)?;
        let placeholder = self.feature.placeholder();
        let has_placeholder = placeholder.is_some();

        let outcome = self
            .orchestrator
            .run_with_placeholder(&spec, placeholder.unwrap_or(Value::Null))
            .await;

        if outcome.is_live() {
            self.feature.on_live(&ctx, params, &outcome.payload)?;
            return Ok(FacadeOutcome {
                outcome,
                error: None,
            });
        }

        let classified = self.classifier.classify(&outcome.errors);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            feature = self.feature.name(),
            category = %classified.category,
            attempts = outcome.errors.len(),
            placeholder = has_placeholder,
            "Every strategy failed"
        );

        if has_placeholder {
            Ok(FacadeOutcome {
                outcome,
                error: Some(classified),
            })
        } else {
            Err(FacadeError::Classified(classified))
        }
    }
}

impl<F: Feature> fmt::Debug for RequestFacade<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestFacade")
            .field("feature", &self.feature.name())
            .field("orchestrator", &self.orchestrator)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
