//! Configuration for the fallback orchestrator.

use crate::strategy::{BoxedStrategy, TransportStrategy};
use crate::{FallbackOrchestrator, OrchestratorEvent};
use serde_json::Value;
use std::sync::Arc;
use tourist_fetch_core::{EventListeners, ExecutionContext, FnListener, Platform};

/// Configuration for a [`FallbackOrchestrator`].
pub struct FallbackConfig {
    pub(crate) name: String,
    pub(crate) strategies: Vec<BoxedStrategy>,
    pub(crate) placeholder: Value,
    pub(crate) context: Arc<dyn ExecutionContext>,
    pub(crate) event_listeners: EventListeners<OrchestratorEvent>,
}

impl FallbackConfig {
    /// The orchestrator name used in events, logs, and metrics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured strategy chain, in attempt order.
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// The configured placeholder.
    pub fn placeholder(&self) -> &Value {
        &self.placeholder
    }
}

/// Builder for a [`FallbackOrchestrator`].
pub struct FallbackConfigBuilder {
    name: String,
    strategies: Vec<BoxedStrategy>,
    placeholder: Value,
    context: Arc<dyn ExecutionContext>,
    event_listeners: EventListeners<OrchestratorEvent>,
}

impl Default for FallbackConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackConfigBuilder {
    /// Creates a builder with no strategies, a `null` placeholder, and a
    /// native execution context.
    pub fn new() -> Self {
        Self {
            name: "fallback".to_string(),
            strategies: Vec::new(),
            placeholder: Value::Null,
            context: Arc::new(Platform::Native),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name used in events, logs, and metrics.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a strategy to the chain.
    pub fn strategy<S>(mut self, strategy: S) -> Self
    where
        S: TransportStrategy + 'static,
    {
        self.strategies.push(Arc::new(strategy));
        self
    }

    /// Appends already shared strategies to the chain.
    pub fn strategies<I>(mut self, strategies: I) -> Self
    where
        I: IntoIterator<Item = BoxedStrategy>,
    {
        self.strategies.extend(strategies);
        self
    }

    /// Sets the payload returned when every strategy fails.
    pub fn placeholder(mut self, placeholder: Value) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets the execution context consulted once per run.
    pub fn context<C>(mut self, context: C) -> Self
    where
        C: ExecutionContext + 'static,
    {
        self.context = Arc::new(context);
        self
    }

    /// Shorthand for a fixed-platform context.
    pub fn platform(self, platform: Platform) -> Self {
        self.context(platform)
    }

    /// Adds an event listener.
    pub fn on_event<F>(mut self, listener: F) -> Self
    where
        F: Fn(&OrchestratorEvent) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(listener));
        self
    }

    /// Builds the orchestrator.
    pub fn build(self) -> FallbackOrchestrator {
        FallbackOrchestrator::new(FallbackConfig {
            name: self.name,
            strategies: self.strategies,
            placeholder: self.placeholder,
            context: self.context,
            event_listeners: self.event_listeners,
        })
    }
}
