//! Sign-in and registration.
//!
//! Neither feature has a placeholder: when every strategy fails the caller
//! gets [`FacadeError::Classified`]. A live response is recorded in the
//! session.

use crate::error::FacadeError;
use crate::feature::{Feature, FeatureContext};
use crate::session::{SessionKey, SessionStore};
use crate::validation::{validate_login, validate_registration};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use tourist_fetch_core::{ExpectedShape, RequestSpec};

/// Account role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    User,
    Admin,
}

impl UserType {
    /// Guesses the role from an email: addresses containing `admin` are admins.
    pub fn from_email(email: &str) -> Self {
        if email.contains("admin") {
            UserType::Admin
        } else {
            UserType::User
        }
    }

    /// The wire and session value.
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::User => "user",
            UserType::Admin => "admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials for [`LoginFeature`].
#[derive(Clone, PartialEq, Eq)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
    /// Requested role; inferred from the email when unset.
    pub user_type: Option<UserType>,
}

impl LoginParams {
    /// Credentials with the role inferred from the email.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            user_type: None,
        }
    }

    /// Requests a specific role.
    pub fn with_type(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }

    fn requested_type(&self) -> UserType {
        self.user_type
            .unwrap_or_else(|| UserType::from_email(&self.email))
    }
}

impl fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginParams")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user_type", &self.user_type)
            .finish()
    }
}

/// `POST login {email, password, type}`; the response must carry `type`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginFeature;

impl Feature for LoginFeature {
    type Params = LoginParams;

    fn name(&self) -> &'static str {
        "login"
    }

    fn request(
        &self,
        ctx: &FeatureContext<'_>,
        params: &LoginParams,
    ) -> Result<RequestSpec, FacadeError> {
        validate_login(&params.email, &params.password)?;
        let body = json!({
            "email": params.email.trim(),
            "password": params.password,
            "type": params.requested_type(),
        });
        Ok(RequestSpec::post(ctx.endpoint("login")?, body).expect(ExpectedShape::field("type")))
    }

    fn on_live(
        &self,
        ctx: &FeatureContext<'_>,
        params: &LoginParams,
        payload: &Value,
    ) -> Result<(), FacadeError> {
        store_session(
            ctx.session(),
            params.email.trim(),
            params.requested_type(),
            None,
            payload,
        )
    }
}

/// New account details for [`RegisterFeature`].
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

impl RegisterParams {
    /// A regular user account.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            user_type: UserType::User,
        }
    }

    /// Registers with a specific role.
    pub fn with_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }
}

impl fmt::Debug for RegisterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterParams")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user_type", &self.user_type)
            .finish()
    }
}

/// `POST register {email, password, type, name}`; the response must be an
/// object. Input is validated before any request is sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterFeature;

impl Feature for RegisterFeature {
    type Params = RegisterParams;

    fn name(&self) -> &'static str {
        "register"
    }

    fn request(
        &self,
        ctx: &FeatureContext<'_>,
        params: &RegisterParams,
    ) -> Result<RequestSpec, FacadeError> {
        validate_registration(&params.name, &params.email, &params.password)?;
        let body = json!({
            "email": params.email.trim(),
            "password": params.password,
            "type": params.user_type,
            "name": params.name.trim(),
        });
        Ok(RequestSpec::post(ctx.endpoint("register")?, body).expect(ExpectedShape::Object))
    }

    fn on_live(
        &self,
        ctx: &FeatureContext<'_>,
        params: &RegisterParams,
        payload: &Value,
    ) -> Result<(), FacadeError> {
        store_session(
            ctx.session(),
            params.email.trim(),
            params.user_type,
            Some(params.name.trim()),
            payload,
        )
    }
}

fn text<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Records a signed in user.
///
/// Response fields win over request values: `type` over the requested role,
/// `_id` over the email, `name`/`username` over the given or derived name.
/// Signing in as someone else drops the previous hotel name.
fn store_session(
    session: &dyn SessionStore,
    email: &str,
    requested: UserType,
    given_name: Option<&str>,
    payload: &Value,
) -> Result<(), FacadeError> {
    let user_type = text(payload, "type").unwrap_or(requested.as_str());
    let user_id = text(payload, "_id").unwrap_or(email);
    let user_name = text(payload, "name")
        .or_else(|| text(payload, "username"))
        .or(given_name.filter(|name| !name.is_empty()))
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email));

    if session.get(SessionKey::UserEmail)?.as_deref() != Some(email) {
        session.remove(SessionKey::HotelName)?;
    }

    session.set(SessionKey::UserEmail, email)?;
    session.set(SessionKey::UserType, user_type)?;
    session.set(SessionKey::UserId, user_id)?;
    session.set(SessionKey::UserName, user_name)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(user_type, user_id, "Session stored");

    Ok(())
}
