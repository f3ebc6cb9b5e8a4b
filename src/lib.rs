pub mod checkout;
pub mod clients;
pub mod config;
pub mod cqrs;
pub mod customer;
pub mod domain;
pub mod dtos;
pub mod error;
pub mod quote;
pub mod state;
pub mod telemetry;
