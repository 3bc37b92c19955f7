//! Result of running a strategy chain.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tourist_fetch_core::FailedAttempt;

/// What a strategy chain produced for one logical request.
///
/// Either a live payload (`used_placeholder == false`) or the caller's
/// placeholder (`used_placeholder == true`); `errors` lists every failed
/// attempt in the order it was made, in both cases.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackOutcome {
    /// The live payload or the placeholder.
    pub payload: Value,
    /// `true` if every attempt failed and `payload` is the placeholder.
    pub used_placeholder: bool,
    /// Failed attempts in attempt order.
    pub errors: Vec<FailedAttempt>,
}

impl FallbackOutcome {
    pub(crate) fn live(payload: Value, errors: Vec<FailedAttempt>) -> Self {
        Self {
            payload,
            used_placeholder: false,
            errors,
        }
    }

    pub(crate) fn placeholder(payload: Value, errors: Vec<FailedAttempt>) -> Self {
        Self {
            payload,
            used_placeholder: true,
            errors,
        }
    }

    /// Returns `true` if the payload came from the network.
    pub fn is_live(&self) -> bool {
        !self.used_placeholder
    }

    /// Decodes the payload into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }
}
