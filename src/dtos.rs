use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestUser {
    pub natural_identifier: String,
    pub surrogate_identifier: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestRequestMetadata {
    pub locale: Option<String>,
}

/// The parts of an inbound REST request the checkout handlers look at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestRequest {
    pub metadata: RestRequestMetadata,
    pub rest_user: Option<RestUser>,
}

impl RestRequest {
    pub fn locale(&self) -> Option<&str> {
        self.metadata.locale.as_deref().filter(|locale| !locale.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestErrorMessage {
    pub code: String,
    pub status: u16,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponseAttributes {
    pub order_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<String>,
    pub attributes: Value,
}

/// JSON:API style envelope returned to the HTTP layer.
///
/// A response carries either resources or errors; the handlers never add both.
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    status: StatusCode,
    resources: Vec<RestResource>,
    errors: Vec<RestErrorMessage>,
}

impl RestResponse {
    pub fn new() -> Self {
        RestResponse {
            status: StatusCode::OK,
            resources: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_resource(mut self, resource: RestResource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn add_error(mut self, error: RestErrorMessage) -> Self {
        self.errors.push(error);
        self
    }

    pub fn set_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn resources(&self) -> &[RestResource] {
        &self.resources
    }

    pub fn errors(&self) -> &[RestErrorMessage] {
        &self.errors
    }

    /// Status the HTTP layer should answer with: the first error's status when
    /// errors exist, the response status otherwise.
    pub fn status(&self) -> StatusCode {
        match self.errors.first() {
            Some(error) => {
                StatusCode::from_u16(error.status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            None => self.status,
        }
    }

    pub fn to_json(&self) -> Value {
        if self.errors.is_empty() {
            json!({ "data": self.resources })
        } else {
            json!({ "errors": self.errors })
        }
    }
}

impl Default for RestResponse {
    fn default() -> Self {
        RestResponse::new()
    }
}

impl IntoResponse for RestResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_json())).into_response()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RestResourceBuilder;

impl RestResourceBuilder {
    pub fn new() -> Self {
        RestResourceBuilder
    }

    pub fn create_rest_response(&self) -> RestResponse {
        RestResponse::new()
    }

    pub fn create_rest_resource<A: Serialize>(
        &self,
        kind: &str,
        id: Option<String>,
        attributes: &A,
    ) -> Result<RestResource> {
        Ok(RestResource {
            kind: String::from(kind),
            id: id,
            attributes: serde_json::to_value(attributes)?,
        })
    }
}
