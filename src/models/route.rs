use serde::{Deserialize, Serialize};

use crate::models::RouteId;

/// A route between airports, referenced by code. Existence of the airports is
/// checked by the `RouteManager` at creation time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    origin: String,
    destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alternate: Option<String>,
}

impl Route {
    pub fn new(
        id: RouteId,
        origin: impl Into<String>,
        destination: impl Into<String>,
        alternate: Option<String>,
    ) -> Self {
        Self {
            id,
            origin: origin.into(),
            destination: destination.into(),
            alternate,
        }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn alternate(&self) -> Option<&str> {
        self.alternate.as_deref()
    }

    /// Whether the route starts, ends or diverts at `code`.
    pub fn touches(&self, code: &str) -> bool {
        self.origin == code || self.destination == code || self.alternate() == Some(code)
    }
}
