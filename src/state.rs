use std::sync::Arc;

use crate::{
    checkout::PlaceOrderCommandHandler,
    clients::{CartClient, CheckoutClient, GlossaryStorageClient, QuoteCollectionReader},
    config::CheckoutApiConfig,
    customer::{RestUserCustomerExpander, RestUserCustomerValidator},
    dtos::RestResourceBuilder,
    quote::{ClearQuoteCommandHandler, FindCustomerQuoteQueryHandler},
};

/// Handlers shared with the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub place_order_command_handler: Arc<PlaceOrderCommandHandler>,
    pub find_customer_quote_query_handler: Arc<FindCustomerQuoteQueryHandler>,
    pub clear_quote_command_handler: Arc<ClearQuoteCommandHandler>,
}

impl AppState {
    /// Wires the handlers with the rest-user based customer validator and expander.
    pub fn new(
        config: CheckoutApiConfig,
        checkout_client: Arc<dyn CheckoutClient + Send + Sync>,
        glossary_storage_client: Arc<dyn GlossaryStorageClient + Send + Sync>,
        quote_collection_reader: Arc<dyn QuoteCollectionReader + Send + Sync>,
        cart_client: Arc<dyn CartClient + Send + Sync>,
    ) -> Self {
        AppState {
            place_order_command_handler: Arc::new(PlaceOrderCommandHandler::new(
                RestResourceBuilder::new(),
                checkout_client,
                glossary_storage_client,
                Arc::new(RestUserCustomerValidator),
                Arc::new(RestUserCustomerExpander),
                config,
            )),
            find_customer_quote_query_handler: Arc::new(FindCustomerQuoteQueryHandler::new(
                quote_collection_reader,
            )),
            clear_quote_command_handler: Arc::new(ClearQuoteCommandHandler::new(cart_client)),
        }
    }
}
