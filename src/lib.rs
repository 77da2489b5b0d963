//! qaboard - the backend of a small Q&A site, served from AWS Lambda.
//!
//! The site's forms (questions, answers, contact queries, newsletter emails)
//! post to this function, which stores each submission in DynamoDB and
//! announces it on an SNS topic. The function also serves the site's pages.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (API Gateway / Function URL events) for the HTTP surface
//! - DynamoDB, one table per entity kind, for submissions
//! - SNS for best-effort submission notifications
//! - Tokio for async runtime
//!
//! Clients are built once per process in [`AppState`] and lent to every
//! invocation.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use qaboard::AppState;
//! use qaboard::api::parsing::HttpRequest;
//! use qaboard::core::config::AppConfig;
//! use qaboard::notify::SnsNotifier;
//! use qaboard::storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     qaboard::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let shared = aws_config::from_env().load().await;
//!     let notifier = SnsNotifier::new(&shared, config.sns_topic_arn.clone());
//!     let state = AppState::new(config, Arc::new(MemoryStore::new()), Arc::new(notifier));
//!
//!     let request = HttpRequest {
//!         method: "POST".into(),
//!         path: "/submitQuestion".into(),
//!         content_type: None,
//!         body: "question=What+is+Rust%3F".into(),
//!     };
//!     let response = qaboard::api::handler::route(&state, &request).await;
//!     println!("{response}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod notify;
pub mod storage;

pub use crate::core::state::AppState;
pub use crate::errors::BoardError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of the Lambda binary.
///
/// # Example
///
/// ```
/// qaboard::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
