#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use eshop_checkout::{
    clients::{CheckoutClient, GlossaryStorageClient},
    domain::{Cart, CheckoutRequestAttributes, CheckoutResult, Quote},
    dtos::{RestRequest, RestRequestMetadata, RestUser},
    error::{CheckoutApiError, Result},
};
use tokio::sync::Mutex;

/// Checkout engine stub answering with a fixed result and recording what it received.
pub struct RecordingCheckoutClient {
    result: CheckoutResult,
    calls: AtomicUsize,
    received: Mutex<Vec<CheckoutRequestAttributes>>,
}

impl RecordingCheckoutClient {
    pub fn new(result: CheckoutResult) -> Arc<Self> {
        Arc::new(RecordingCheckoutClient {
            result: result,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn received(&self) -> Vec<CheckoutRequestAttributes> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl CheckoutClient for RecordingCheckoutClient {
    async fn place_order(&self, attributes: &CheckoutRequestAttributes) -> Result<CheckoutResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().await.push(attributes.clone());

        Ok(self.result.clone())
    }
}

pub struct UnavailableCheckoutClient;

#[async_trait]
impl CheckoutClient for UnavailableCheckoutClient {
    async fn place_order(&self, _attributes: &CheckoutRequestAttributes) -> Result<CheckoutResult> {
        Err(CheckoutApiError::Client(String::from("checkout engine unavailable")))
    }
}

pub struct UnavailableGlossaryStorageClient;

#[async_trait]
impl GlossaryStorageClient for UnavailableGlossaryStorageClient {
    async fn translate(
        &self,
        _key: &str,
        _locale: &str,
        _parameters: &BTreeMap<String, String>,
    ) -> Result<String> {
        Err(CheckoutApiError::Client(String::from("glossary unavailable")))
    }
}

pub fn authenticated_request(locale: Option<&str>) -> RestRequest {
    RestRequest {
        metadata: RestRequestMetadata {
            locale: locale.map(String::from),
        },
        rest_user: Some(RestUser {
            natural_identifier: String::from("DE--21"),
            surrogate_identifier: Some(21),
        }),
    }
}

pub fn checkout_attributes(id_cart: &str) -> CheckoutRequestAttributes {
    CheckoutRequestAttributes {
        cart: Cart {
            id: String::from(id_cart),
            customer: None,
        },
        ..Default::default()
    }
}

pub fn quote_with_uuid(uuid: &str) -> Quote {
    Quote {
        uuid: String::from(uuid),
        name: Some(format!("Cart {}", uuid)),
        customer_reference: Some(String::from("DE--21")),
    }
}
