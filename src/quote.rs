use std::sync::Arc;

use tracing::{event, Level};

use crate::{
    clients::{CartClient, QuoteCollectionReader},
    cqrs::{ClearQuoteCommand, CommandHandler, FindCustomerQuoteQuery, QueryHandler},
    domain::{Quote, QuoteCriteriaFilter},
    error::Result,
};

pub struct FindCustomerQuoteQueryHandler {
    quote_collection_reader: Arc<dyn QuoteCollectionReader + Send + Sync>,
}

impl FindCustomerQuoteQueryHandler {
    pub fn new(quote_collection_reader: Arc<dyn QuoteCollectionReader + Send + Sync>) -> Self {
        FindCustomerQuoteQueryHandler {
            quote_collection_reader: quote_collection_reader,
        }
    }
}

impl QueryHandler<FindCustomerQuoteQuery, Option<Quote>> for FindCustomerQuoteQueryHandler {
    /// Returns the first quote of the caller's collection whose uuid equals the cart id.
    async fn handle(&self, input: &FindCustomerQuoteQuery) -> Result<Option<Quote>> {
        let id_cart = &input.attributes.cart.id;

        let quote_collection = self
            .quote_collection_reader
            .get_quote_collection_by_criteria(&QuoteCriteriaFilter::default())
            .await?;

        let found = quote_collection
            .quotes
            .into_iter()
            .find(|customer_quote| &customer_quote.uuid == id_cart);

        match &found {
            Some(_) => event!(Level::DEBUG, "Found quote for cart {}", id_cart),
            None => event!(Level::DEBUG, "No quote found for cart {}", id_cart),
        }

        Ok(found)
    }
}

pub struct ClearQuoteCommandHandler {
    cart_client: Arc<dyn CartClient + Send + Sync>,
}

impl ClearQuoteCommandHandler {
    pub fn new(cart_client: Arc<dyn CartClient + Send + Sync>) -> Self {
        ClearQuoteCommandHandler {
            cart_client: cart_client,
        }
    }
}

impl CommandHandler<ClearQuoteCommand, ()> for ClearQuoteCommandHandler {
    async fn handle(&self, _input: ClearQuoteCommand) -> Result<()> {
        event!(Level::DEBUG, "Clearing current quote");

        self.cart_client.clear_quote().await
    }
}
