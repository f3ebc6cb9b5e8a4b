use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{event, Level};

use crate::{
    clients::{CheckoutClient, GlossaryStorageClient},
    config::{
        CheckoutApiConfig, GLOSSARY_KEY_ORDER_NOT_PLACED, RESOURCE_CHECKOUT,
        RESPONSE_CODE_ORDER_NOT_PLACED,
    },
    cqrs::{CommandHandler, PlaceOrderCommand},
    customer::{CustomerExpander, CustomerValidator},
    domain::{CheckoutError, CheckoutResult},
    dtos::{CheckoutResponseAttributes, RestErrorMessage, RestResourceBuilder, RestResponse},
    error::Result,
};

/// Places an order through the checkout engine and maps the outcome to a
/// `checkout` resource or to translated `1102` errors.
pub struct PlaceOrderCommandHandler {
    rest_resource_builder: RestResourceBuilder,
    checkout_client: Arc<dyn CheckoutClient + Send + Sync>,
    glossary_storage_client: Arc<dyn GlossaryStorageClient + Send + Sync>,
    customer_validator: Arc<dyn CustomerValidator + Send + Sync>,
    customer_expander: Arc<dyn CustomerExpander + Send + Sync>,
    config: CheckoutApiConfig,
}

impl PlaceOrderCommandHandler {
    pub fn new(
        rest_resource_builder: RestResourceBuilder,
        checkout_client: Arc<dyn CheckoutClient + Send + Sync>,
        glossary_storage_client: Arc<dyn GlossaryStorageClient + Send + Sync>,
        customer_validator: Arc<dyn CustomerValidator + Send + Sync>,
        customer_expander: Arc<dyn CustomerExpander + Send + Sync>,
        config: CheckoutApiConfig,
    ) -> Self {
        PlaceOrderCommandHandler {
            rest_resource_builder: rest_resource_builder,
            checkout_client: checkout_client,
            glossary_storage_client: glossary_storage_client,
            customer_validator: customer_validator,
            customer_expander: customer_expander,
            config: config,
        }
    }

    async fn create_place_order_failed_error_response(
        &self,
        errors: Vec<CheckoutError>,
        locale: &str,
    ) -> Result<RestResponse> {
        let errors = if errors.is_empty() {
            vec![CheckoutError::new(GLOSSARY_KEY_ORDER_NOT_PLACED)]
        } else {
            errors
        };

        let mut rest_response = self.rest_resource_builder.create_rest_response();

        for checkout_error in &errors {
            let rest_error_message = RestErrorMessage {
                code: String::from(RESPONSE_CODE_ORDER_NOT_PLACED),
                status: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
                detail: self.translate_checkout_error_message(checkout_error, locale).await?,
            };

            rest_response = rest_response.add_error(rest_error_message);
        }

        Ok(rest_response)
    }

    /// Falls back to the message key itself when the glossary has no text for it.
    async fn translate_checkout_error_message(
        &self,
        checkout_error: &CheckoutError,
        locale: &str,
    ) -> Result<String> {
        let translated = self
            .glossary_storage_client
            .translate(&checkout_error.message, locale, &checkout_error.parameters)
            .await?;

        if translated.is_empty() {
            return Ok(checkout_error.message.clone());
        }

        Ok(translated)
    }

    fn create_order_placed_response(&self, order_reference: String) -> Result<RestResponse> {
        let rest_resource = self.rest_resource_builder.create_rest_resource(
            RESOURCE_CHECKOUT,
            None,
            &CheckoutResponseAttributes {
                order_reference: order_reference,
            },
        )?;

        Ok(self
            .rest_resource_builder
            .create_rest_response()
            .set_status(StatusCode::CREATED)
            .add_resource(rest_resource))
    }
}

impl CommandHandler<PlaceOrderCommand, RestResponse> for PlaceOrderCommandHandler {
    async fn handle(&self, input: PlaceOrderCommand) -> Result<RestResponse> {
        let PlaceOrderCommand {
            request,
            attributes,
        } = input;

        if let Some(customer_validation_error) = self.customer_validator.validate(&request).await? {
            event!(
                Level::WARN,
                "Checkout rejected for cart {}: {}",
                attributes.cart.id,
                customer_validation_error.detail
            );

            return Ok(self
                .rest_resource_builder
                .create_rest_response()
                .add_error(customer_validation_error));
        }

        let customer = self
            .customer_expander
            .get_customer_from_request(&request, &attributes)
            .await?;
        let attributes = attributes.with_customer(customer);

        match self.checkout_client.place_order(&attributes).await? {
            CheckoutResult::Success { order_reference } => {
                event!(Level::INFO, "Order {} placed for cart {}", order_reference, attributes.cart.id);

                self.create_order_placed_response(order_reference)
            }
            CheckoutResult::Failure { errors } => {
                event!(
                    Level::WARN,
                    "Order not placed for cart {}: {} error(s)",
                    attributes.cart.id,
                    errors.len()
                );

                let locale = request
                    .locale()
                    .unwrap_or(self.config.default_locale.as_str());

                self.create_place_order_failed_error_response(errors, locale).await
            }
        }
    }
}
