use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{event, Level};

use crate::{
    domain::{CheckoutRequestAttributes, CheckoutResult, Quote, QuoteCollection, QuoteCriteriaFilter},
    error::Result,
};

/// Backend checkout engine that turns a cart into an order.
#[async_trait]
pub trait CheckoutClient {
    async fn place_order(&self, attributes: &CheckoutRequestAttributes) -> Result<CheckoutResult>;
}

/// Glossary lookup. An unknown key yields an empty string, not an error.
#[async_trait]
pub trait GlossaryStorageClient {
    async fn translate(
        &self,
        key: &str,
        locale: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<String>;
}

#[async_trait]
pub trait QuoteCollectionReader {
    async fn get_quote_collection_by_criteria(
        &self,
        criteria: &QuoteCriteriaFilter,
    ) -> Result<QuoteCollection>;
}

#[async_trait]
pub trait CartClient {
    async fn clear_quote(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct InMemoryGlossaryStorageClient {
    translations: Arc<HashMap<(String, String), String>>,
}

impl InMemoryGlossaryStorageClient {
    pub fn new() -> Self {
        InMemoryGlossaryStorageClient {
            translations: Arc::new(HashMap::new()),
        }
    }

    pub fn with_translation(mut self, key: &str, locale: &str, text: &str) -> Self {
        Arc::make_mut(&mut self.translations)
            .insert((String::from(key), String::from(locale)), String::from(text));
        self
    }
}

impl Default for InMemoryGlossaryStorageClient {
    fn default() -> Self {
        InMemoryGlossaryStorageClient::new()
    }
}

#[async_trait]
impl GlossaryStorageClient for InMemoryGlossaryStorageClient {
    async fn translate(
        &self,
        key: &str,
        locale: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<String> {
        match self.translations.get(&(String::from(key), String::from(locale))) {
            Some(text) => Ok(substitute_parameters(text, parameters)),
            None => Ok(String::new()),
        }
    }
}

/// Replaces parameter names (used as written, e.g. `%sku%`) in one left-to-right
/// pass. Substituted values are never scanned again; the longest name wins when
/// several start at the same position.
fn substitute_parameters(text: &str, parameters: &BTreeMap<String, String>) -> String {
    let mut translated = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(current) = rest.chars().next() {
        let matched = parameters
            .iter()
            .filter(|(name, _)| !name.is_empty() && rest.starts_with(name.as_str()))
            .max_by_key(|(name, _)| name.len());

        match matched {
            Some((name, value)) => {
                translated.push_str(value);
                rest = &rest[name.len()..];
            }
            None => {
                translated.push(current);
                rest = &rest[current.len_utf8()..];
            }
        }
    }

    translated
}

#[derive(Clone)]
pub struct InMemoryQuoteCollectionReader {
    quotes: Arc<Mutex<Vec<Quote>>>,
}

impl InMemoryQuoteCollectionReader {
    pub fn new(quotes: Vec<Quote>) -> Self {
        InMemoryQuoteCollectionReader {
            quotes: Arc::new(Mutex::new(quotes)),
        }
    }

    pub async fn add_quote(&self, quote: Quote) {
        self.quotes.lock().await.push(quote);
    }
}

#[async_trait]
impl QuoteCollectionReader for InMemoryQuoteCollectionReader {
    async fn get_quote_collection_by_criteria(
        &self,
        criteria: &QuoteCriteriaFilter,
    ) -> Result<QuoteCollection> {
        let lock = self.quotes.lock().await;

        let quotes = lock
            .iter()
            .filter(|quote| match &criteria.customer_reference {
                Some(reference) => quote.customer_reference.as_ref() == Some(reference),
                None => true,
            })
            .cloned()
            .collect();

        Ok(QuoteCollection { quotes: quotes })
    }
}

/// Cart client holding the session's current quote.
#[derive(Clone)]
pub struct InMemoryCartClient {
    quote: Arc<Mutex<Option<Quote>>>,
    clear_calls: Arc<AtomicUsize>,
}

impl InMemoryCartClient {
    pub fn new(quote: Option<Quote>) -> Self {
        InMemoryCartClient {
            quote: Arc::new(Mutex::new(quote)),
            clear_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn current_quote(&self) -> Option<Quote> {
        self.quote.lock().await.clone()
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CartClient for InMemoryCartClient {
    async fn clear_quote(&self) -> Result<()> {
        let mut lock = self.quote.lock().await;
        if let Some(quote) = lock.take() {
            event!(Level::TRACE, "Cleared quote {}", quote.uuid);
        }

        self.clear_calls.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }
}
