use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_reference: Option<String>,
    pub id_customer: Option<i64>,
    pub email: Option<String>,
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_guest: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub customer: Option<Customer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_provider_name: String,
    pub payment_method_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id_shipment_method: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub iso2_code: Option<String>,
}

/// Attributes of a `checkout` request as sent by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestAttributes {
    pub cart: Cart,
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub shipment: Option<Shipment>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
}

impl CheckoutRequestAttributes {
    /// Returns these attributes with `customer` attached to the cart.
    pub fn with_customer(self, customer: Customer) -> Self {
        CheckoutRequestAttributes {
            cart: Cart {
                customer: Some(customer),
                ..self.cart
            },
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutError {
    pub error_code: Option<i32>,
    pub message: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl CheckoutError {
    pub fn new(message: impl Into<String>) -> Self {
        CheckoutError {
            error_code: None,
            message: message.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

/// Outcome reported by the checkout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum CheckoutResult {
    #[serde(rename_all = "camelCase")]
    Success { order_reference: String },
    Failure { errors: Vec<CheckoutError> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub uuid: String,
    pub name: Option<String>,
    pub customer_reference: Option<String>,
}

impl Quote {
    pub fn new(name: impl Into<String>, customer_reference: Option<String>) -> Self {
        Quote {
            uuid: uuid::Uuid::new_v4().to_string(),
            name: Some(name.into()),
            customer_reference: customer_reference,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteCollection {
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCriteriaFilter {
    pub customer_reference: Option<String>,
    pub id_store: Option<i64>,
}
