//! Per-feature request facades for the tourism backend.
//!
//! Each [`Feature`] describes one backend call: its [`RequestSpec`], the
//! shape a valid response must have, and an optional placeholder payload. A
//! [`RequestFacade`] runs that description through a
//! [`FallbackOrchestrator`](tourist_fetch_fallback::FallbackOrchestrator) and
//! turns the outcome into exactly one of:
//!
//! - live data: `Ok(FacadeOutcome { error: None, .. })`
//! - placeholder data plus the reason: `Ok(FacadeOutcome { error: Some(..), .. })`
//! - a classified failure: `Err(FacadeError::Classified(..))`, for features
//!   without a placeholder
//!
//! [`TouristClient`] wires every feature to a shared strategy chain and
//! [`SessionStore`].
//!
//! # Session
//!
//! Dashboard features read `hotelName` (deriving it from `userEmail` when
//! missing); login and registration write `userEmail`, `userType`, `userId`,
//! and `userName`. See [`SessionKey`].
//!
//! [`RequestSpec`]: tourist_fetch_core::RequestSpec

mod client;
mod config;
mod error;
mod facade;
mod feature;
pub mod features;
mod hotel;
mod session;
mod validation;

pub use client::TouristClient;
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
pub use error::FacadeError;
pub use facade::{FacadeOutcome, RequestFacade};
pub use feature::{Feature, FeatureContext};
pub use features::{HotelQuery, LoginParams, RegisterParams, UserType};
pub use hotel::{DEFAULT_HOTEL_NAME, hotel_name_from_email, resolve_hotel_name};
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionKey, SessionStore};
pub use validation::{MIN_PASSWORD_LEN, is_valid_email, validate_login, validate_registration};
