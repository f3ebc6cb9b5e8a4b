use async_trait::async_trait;
use axum::http::StatusCode;

use crate::{
    config::{RESPONSE_CODE_USER_IS_NOT_SPECIFIED, RESPONSE_DETAILS_USER_IS_NOT_SPECIFIED},
    domain::{CheckoutRequestAttributes, Customer},
    dtos::{RestErrorMessage, RestRequest},
    error::Result,
};

#[async_trait]
pub trait CustomerValidator {
    /// Returns the error to answer with, or `None` when checkout may proceed.
    async fn validate(&self, request: &RestRequest) -> Result<Option<RestErrorMessage>>;
}

#[async_trait]
pub trait CustomerExpander {
    async fn get_customer_from_request(
        &self,
        request: &RestRequest,
        attributes: &CheckoutRequestAttributes,
    ) -> Result<Customer>;
}

/// Requires an authenticated rest user on the request.
#[derive(Debug, Clone, Default)]
pub struct RestUserCustomerValidator;

#[async_trait]
impl CustomerValidator for RestUserCustomerValidator {
    async fn validate(&self, request: &RestRequest) -> Result<Option<RestErrorMessage>> {
        if request.rest_user.is_some() {
            return Ok(None);
        }

        Ok(Some(RestErrorMessage {
            code: String::from(RESPONSE_CODE_USER_IS_NOT_SPECIFIED),
            status: StatusCode::FORBIDDEN.as_u16(),
            detail: String::from(RESPONSE_DETAILS_USER_IS_NOT_SPECIFIED),
        }))
    }
}

/// Builds the checkout customer from the cart's customer payload and the rest user.
#[derive(Debug, Clone, Default)]
pub struct RestUserCustomerExpander;

#[async_trait]
impl CustomerExpander for RestUserCustomerExpander {
    async fn get_customer_from_request(
        &self,
        request: &RestRequest,
        attributes: &CheckoutRequestAttributes,
    ) -> Result<Customer> {
        let mut customer = attributes.cart.customer.clone().unwrap_or_default();

        match &request.rest_user {
            Some(rest_user) => {
                customer.customer_reference = Some(rest_user.natural_identifier.clone());
                customer.id_customer = rest_user.surrogate_identifier;
                customer.is_guest = false;
            }
            None => {
                customer.is_guest = true;
            }
        }

        Ok(customer)
    }
}
