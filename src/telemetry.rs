use std::fs::File;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::{
    config::CheckoutApiConfig,
    error::{CheckoutApiError, Result},
};

/// Installs the global JSON subscriber. Writes to `log_path` when configured,
/// stdout otherwise.
pub fn init_tracing(config: &CheckoutApiConfig) -> Result<()> {
    let writer = match &config.log_path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CheckoutApiError::Configuration(format!("Failed to create log file {}: {}", path, e))
            })?;

            BoxMakeWriter::new(file)
        }
        None => BoxMakeWriter::new(std::io::stdout),
    };

    tracing_subscriber::
    fmt()
    .with_max_level(config.log_level)
    .with_target(false)
    .with_ansi(false)
    .json()
    .with_file(true)
    .with_line_number(true)
    .with_current_span(true)
    .with_writer(writer)
    .try_init()
    .map_err(|e| CheckoutApiError::Configuration(format!("Failed to install subscriber: {}", e)))
}
