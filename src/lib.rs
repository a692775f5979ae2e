//! # news-digest
//!
//! An LLM-curated daily news digest, delivered by email.
//!
//! This library provides:
//! - An HTTP endpoint that triggers one digest run
//! - A tool-based curation loop over fixed RSS/Atom feed lists
//! - HTML rendering and SMTP delivery of the finished report
//!
//! ## Architecture
//!
//! Data flows one direction:
//! 1. `GET /news` invokes the curation agent
//! 2. The agent calls its tools (feed aggregation, web search) in a loop
//!    until it emits a single JSON report
//! 3. The report is parsed into typed category records and rendered to a
//!    styled HTML document
//! 4. The document is sent to the fixed recipient over authenticated SMTP
//!
//! ## Example
//!
//! ```rust,ignore
//! use news_digest::{api, config::Config};
//!
//! let config = Config::from_env()?;
//! api::serve(config).await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod feeds;
pub mod llm;
pub mod mailer;
pub mod render;
pub mod report;
pub mod tools;

pub use config::Config;
