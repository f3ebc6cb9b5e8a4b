use serde::{Deserialize, Serialize};

use crate::{domain::CheckoutRequestAttributes, dtos::RestRequest, error::Result};

// traits
pub trait Command {}
pub trait Query {}

pub trait CommandHandler<C: Command, R> {
    async fn handle(&self, input: C) -> Result<R>;
}

pub trait QueryHandler<Q: Query, R> {
    async fn handle(&self, input: &Q) -> Result<R>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderCommand {
    pub request: RestRequest,
    pub attributes: CheckoutRequestAttributes,
}
impl Command for PlaceOrderCommand {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearQuoteCommand {}
impl Command for ClearQuoteCommand {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindCustomerQuoteQuery {
    pub attributes: CheckoutRequestAttributes,
}
impl Query for FindCustomerQuoteQuery {}
