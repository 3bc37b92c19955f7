//! User-facing error categories and messages.

use std::fmt;

/// The fixed set of error categories the UI distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserFacingCategory {
    /// The browser host blocked the request for cross-origin reasons.
    CorsRestriction,
    /// The server could not be reached.
    NetworkUnavailable,
    /// The server rejected the credentials.
    InvalidCredentials,
    /// The server failed while handling the request.
    ServerError,
    /// The server answered with data that could not be used.
    DataFormatInvalid,
    /// None of the above.
    Unknown,
}

impl UserFacingCategory {
    /// The human-readable message for this category.
    pub fn message(self) -> &'static str {
        match self {
            Self::CorsRestriction => {
                "Cannot connect to the server due to CORS restrictions. Please try using the mobile app instead."
            }
            Self::NetworkUnavailable => {
                "Network error: cannot connect to the server. Please check your connection."
            }
            Self::InvalidCredentials => {
                "Invalid credentials. Please check your email and password."
            }
            Self::ServerError => "The server encountered an error. Please try again later.",
            Self::DataFormatInvalid => "Invalid data format received from the server.",
            Self::Unknown => "Something went wrong while contacting the server.",
        }
    }

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CorsRestriction => "cors_restriction",
            Self::NetworkUnavailable => "network_unavailable",
            Self::InvalidCredentials => "invalid_credentials",
            Self::ServerError => "server_error",
            Self::DataFormatInvalid => "data_format_invalid",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UserFacingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure reduced to a category and the message to show for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClassifiedError {
    /// The category.
    pub category: UserFacingCategory,
    /// The user-facing message.
    pub message: String,
}

impl ClassifiedError {
    /// Creates an error carrying the category's standard message.
    pub fn new(category: UserFacingCategory) -> Self {
        Self {
            category,
            message: category.message().to_string(),
        }
    }

    /// Creates an error with a custom message.
    pub fn with_message(category: UserFacingCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl From<UserFacingCategory> for ClassifiedError {
    fn from(category: UserFacingCategory) -> Self {
        Self::new(category)
    }
}
