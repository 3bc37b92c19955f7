//! Hotel name resolution for the admin dashboards.

use crate::error::FacadeError;
use crate::session::{SessionKey, SessionStore};

/// Name used when nothing better can be derived.
pub const DEFAULT_HOTEL_NAME: &str = "Your Hotel";

/// Derives a display hotel name from an admin email.
///
/// The local part has `.`, `_`, and `-` replaced by spaces, each word
/// capitalized, and `" Hotel"` appended.
///
/// ```rust
/// use tourist_fetch_facade::hotel_name_from_email;
///
/// assert_eq!(hotel_name_from_email("grand_plaza@stays.io"), "Grand Plaza Hotel");
/// assert_eq!(hotel_name_from_email("@stays.io"), "Your Hotel");
/// ```
pub fn hotel_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        return DEFAULT_HOTEL_NAME.to_string();
    }

    let spaced = local.replace(['.', '_', '-'], " ");
    let words: Vec<String> = spaced.split(' ').map(capitalize).collect();
    format!("{} Hotel", words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Picks the hotel a dashboard request is about.
///
/// An explicit name wins and must not be blank. Otherwise the session's
/// `hotelName` is used; failing that, a name is derived from `userEmail` and
/// written back to the session.
pub fn resolve_hotel_name(
    session: &dyn SessionStore,
    explicit: Option<&str>,
) -> Result<String, FacadeError> {
    if let Some(name) = explicit {
        let name = name.trim();
        if name.is_empty() {
            return Err(FacadeError::InvalidInput(
                "hotel name must not be empty".to_string(),
            ));
        }
        return Ok(name.to_string());
    }

    if let Some(stored) = session.get_non_empty(SessionKey::HotelName)? {
        return Ok(stored);
    }

    let derived = match session.get_non_empty(SessionKey::UserEmail)? {
        Some(email) => hotel_name_from_email(&email),
        None => DEFAULT_HOTEL_NAME.to_string(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(hotel = %derived, "No hotel name stored, using derived name");

    session.set(SessionKey::HotelName, &derived)?;
    Ok(derived)
}
