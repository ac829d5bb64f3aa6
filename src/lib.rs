//! Account Metadata Library
//!
//! This library builds the ordered label → value mapping that admin and
//! support screens render for an account: owner, status, billing connectors,
//! import status, activity timestamp and feature flags.
//!
//! # Modules
//!
//! - `core`: Domain-layer namespace.
//! - `builder`: Metadata assembly, customization hook and filtering.
//! - `config`: Placeholder configuration.
//! - `errors`: Error handling types.
//! - `fields`: Per-field derivation rules and status humanization.
//! - `metadata`: Ordered metadata mapping, values and labels.
//! - `models`: Account records and the read-accessor trait.

pub mod core;

pub mod builder;
pub mod config;
pub mod errors;
pub mod fields;
pub mod metadata;
pub mod models;

pub use builder::{build_account_metadata, try_build_account_metadata, MetadataBuilder};
pub use config::MetadataConfig;
pub use errors::MetadataError;
pub use metadata::{labels, AccountMetadata, MetadataValue};
pub use models::{Account, AccountDetails, AccountRecord, Connector, Person};
