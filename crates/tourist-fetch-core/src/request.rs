//! Request descriptions.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// HTTP method of a [`RequestSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`, parameters travel in the query string.
    Get,
    /// `POST`, parameters travel in a JSON body.
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Closure-backed shape check.
pub type ShapePredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// The shape a decoded response must have to count as a success.
#[derive(Clone, Default)]
pub enum ExpectedShape {
    /// Any decoded JSON value is accepted.
    #[default]
    Any,
    /// A JSON object.
    Object,
    /// A JSON array.
    Array,
    /// An object carrying the named field (with any non-null value).
    HasField(String),
    /// An array, or an object carrying the named field.
    ArrayOrField(String),
    /// A custom check.
    Predicate(ShapePredicate),
}

impl ExpectedShape {
    /// Shorthand for [`ExpectedShape::HasField`].
    pub fn field(name: impl Into<String>) -> Self {
        Self::HasField(name.into())
    }

    /// Shorthand for [`ExpectedShape::Predicate`].
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Returns `true` if `value` has this shape.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::HasField(name) => has_field(value, name),
            Self::ArrayOrField(name) => value.is_array() || has_field(value, name),
            Self::Predicate(check) => check(value),
        }
    }
}

fn has_field(value: &Value, name: &str) -> bool {
    value.get(name).is_some_and(|field| !field.is_null())
}

impl fmt::Debug for ExpectedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Object => f.write_str("Object"),
            Self::Array => f.write_str("Array"),
            Self::HasField(name) => f.debug_tuple("HasField").field(name).finish(),
            Self::ArrayOrField(name) => f.debug_tuple("ArrayOrField").field(name).finish(),
            Self::Predicate(_) => f.write_str("Predicate(<closure>)"),
        }
    }
}

/// One logical request: where it goes, what it carries, and what a valid
/// response looks like.
///
/// Specs are built once per call and shared read-only by every strategy that
/// attempts them.
///
/// ```rust
/// use tourist_fetch_core::{ExpectedShape, Method, RequestSpec};
/// use url::Url;
///
/// let base = Url::parse("http://localhost:5001/").unwrap();
/// let spec = RequestSpec::get(base.join("get_review_stats").unwrap())
///     .query("hotel_name", "Harbor View Hotel")
///     .expect(ExpectedShape::field("counts"));
///
/// assert_eq!(spec.method(), Method::Get);
/// assert_eq!(
///     spec.url().as_str(),
///     "http://localhost:5001/get_review_stats?hotel_name=Harbor+View+Hotel"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RequestSpec {
    endpoint: Url,
    method: Method,
    query: Vec<(String, String)>,
    body: Option<Value>,
    expected_shape: ExpectedShape,
}

impl RequestSpec {
    /// Creates a request with the given method and endpoint.
    pub fn new(method: Method, endpoint: Url) -> Self {
        Self {
            endpoint,
            method,
            query: Vec::new(),
            body: None,
            expected_shape: ExpectedShape::Any,
        }
    }

    /// Creates a `GET` request.
    pub fn get(endpoint: Url) -> Self {
        Self::new(Method::Get, endpoint)
    }

    /// Creates a `POST` request carrying `body` as JSON.
    pub fn post(endpoint: Url, body: Value) -> Self {
        Self::new(Method::Post, endpoint).body(body)
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the expected response shape.
    pub fn expect(mut self, shape: ExpectedShape) -> Self {
        self.expected_shape = shape;
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The endpoint without query parameters.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The query parameters in insertion order.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// The JSON body, if any.
    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The expected response shape.
    pub fn expected_shape(&self) -> &ExpectedShape {
        &self.expected_shape
    }

    /// The full target URL, query parameters encoded.
    pub fn url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        url
    }

    /// Returns `true` if `payload` has the expected shape.
    pub fn accepts(&self, payload: &Value) -> bool {
        self.expected_shape.matches(payload)
    }
}
