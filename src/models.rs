use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{MetadataError, ResultExt};

// ============ Provider Records ============

/// Account snapshot as handed over by the data provider.
///
/// Every nested record is optional; the builder treats a missing record the
/// same as a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Provider identifier, used only as logging context.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Account owner.
    #[serde(default)]
    pub owner: Option<Person>,
    /// Status and usage details.
    #[serde(default)]
    pub account_details: Option<AccountDetails>,
    /// Billing systems connected to the account, in provider order.
    #[serde(default)]
    pub billing_connectors: Vec<Connector>,
    /// Connector whose import state is reported.
    #[serde(default)]
    pub main_connector: Option<Connector>,
    /// Last time anyone was active on the account.
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
    /// Whether revenue recognition is enabled.
    #[serde(default)]
    pub rev_rec_enabled: bool,
    /// Whether the account still carries sample data.
    #[serde(default)]
    pub sample_data_present: bool,
}

/// Represents the person owning an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// Status and usage counters of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    /// Lifecycle status (e.g., "active", "churned").
    pub account_status: String,
    /// Number of active customers. Zero is a real value.
    #[serde(default)]
    pub active_customer_count: Option<i64>,
}

/// A billing system connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    /// Display name of the billing system (e.g., "Stripe").
    pub name: String,
    /// Machine status token of the last import (e.g., "in_progress").
    #[serde(default)]
    pub import_status: Option<String>,
}

impl Account {
    /// Parses an account snapshot from JSON.
    ///
    /// A JSON `null` yields `Ok(None)`, matching an absent account.
    pub fn from_json_str(raw: &str) -> Result<Option<Account>, MetadataError> {
        serde_json::from_str::<Option<Account>>(raw).context("parsing account snapshot")
    }

    /// Parses an account snapshot from an already decoded JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Option<Account>, MetadataError> {
        serde_json::from_value::<Option<Account>>(value).context("decoding account snapshot")
    }
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Connector {
    pub fn new(name: impl Into<String>, import_status: Option<&str>) -> Self {
        Self {
            name: name.into(),
            import_status: import_status.map(str::to_string),
        }
    }
}

// ============ Read Accessors ============

/// Read accessors the metadata builder needs from an account-like record.
pub trait AccountRecord {
    fn account_id(&self) -> Option<Uuid> {
        None
    }

    fn owner(&self) -> Option<&Person>;

    fn account_details(&self) -> Option<&AccountDetails>;

    fn billing_connectors(&self) -> &[Connector];

    fn main_connector(&self) -> Option<&Connector>;

    fn last_active_at(&self) -> Option<DateTime<Utc>>;

    fn rev_rec_enabled(&self) -> bool;

    fn sample_data_present(&self) -> bool;
}

impl AccountRecord for Account {
    fn account_id(&self) -> Option<Uuid> {
        self.id
    }

    fn owner(&self) -> Option<&Person> {
        self.owner.as_ref()
    }

    fn account_details(&self) -> Option<&AccountDetails> {
        self.account_details.as_ref()
    }

    fn billing_connectors(&self) -> &[Connector] {
        &self.billing_connectors
    }

    fn main_connector(&self) -> Option<&Connector> {
        self.main_connector.as_ref()
    }

    fn last_active_at(&self) -> Option<DateTime<Utc>> {
        self.last_active_at
    }

    fn rev_rec_enabled(&self) -> bool {
        self.rev_rec_enabled
    }

    fn sample_data_present(&self) -> bool {
        self.sample_data_present
    }
}
