//! Account metadata assembly
//!
//! Composes the per-field rules from `fields` into an ordered draft, hands the
//! draft to an optional customization callback, then drops absent entries:
//! 1. Absent account → empty mapping
//! 2. Derive every label in display order
//! 3. Apply the caller's customization (once, in place)
//! 4. Filter strictly absent values

use std::convert::Infallible;

use crate::config::MetadataConfig;
use crate::errors::MetadataError;
use crate::fields;
use crate::metadata::{labels, AccountMetadata};
use crate::models::AccountRecord;

/// Builds display metadata for accounts with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    config: MetadataConfig,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with custom placeholders, rejecting blank ones.
    pub fn with_config(config: MetadataConfig) -> Result<Self, MetadataError> {
        config.validate()?;
        tracing::debug!(
            "Metadata builder configured: billing placeholder '{}', import placeholder '{}'",
            config.billing_placeholder,
            config.import_placeholder
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// Derives every label in display order, absent values included.
    pub fn draft<A: AccountRecord + ?Sized>(&self, account: &A) -> AccountMetadata {
        let mut draft = AccountMetadata::new();
        draft.insert(labels::ACCOUNT_OWNER, fields::account_owner(account));
        draft.insert(labels::ACCOUNT_STATUS, fields::account_status(account));
        draft.insert(labels::ACTIVE_CUSTOMERS, fields::active_customers(account));
        draft.insert(
            labels::BILLING_SYSTEMS,
            fields::billing_systems(account, &self.config),
        );
        draft.insert(
            labels::IMPORT_STATUS,
            fields::import_status(account, &self.config),
        );
        draft.insert(labels::LAST_ACTIVE, fields::last_active(account));
        draft.insert(
            labels::REVENUE_RECOGNITION,
            fields::revenue_recognition(account),
        );
        draft.insert(
            labels::SAMPLE_DATA_PRESENT,
            fields::sample_data_present(account),
        );
        draft
    }

    /// Builds the filtered mapping without customization.
    pub fn build<A: AccountRecord + ?Sized>(&self, account: Option<&A>) -> AccountMetadata {
        self.build_with(account, |_| {})
    }

    /// Builds the filtered mapping, letting `customize` edit the draft first.
    pub fn build_with<A, F>(&self, account: Option<&A>, customize: F) -> AccountMetadata
    where
        A: AccountRecord + ?Sized,
        F: FnOnce(&mut AccountMetadata),
    {
        let result = self.try_build_with(account, |draft| {
            customize(draft);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(metadata) => metadata,
            Err(never) => match never {},
        }
    }

    /// Like `build_with`, but a failing callback aborts the build and its
    /// error is returned as is.
    pub fn try_build_with<A, E, F>(
        &self,
        account: Option<&A>,
        customize: F,
    ) -> Result<AccountMetadata, E>
    where
        A: AccountRecord + ?Sized,
        F: FnOnce(&mut AccountMetadata) -> Result<(), E>,
    {
        let Some(account) = account else {
            tracing::debug!("No account given, returning empty metadata");
            return Ok(AccountMetadata::new());
        };

        let mut draft = self.draft(account);
        customize(&mut draft)?;

        let drafted = draft.len();
        for (label, _) in draft.iter().filter(|(_, value)| value.is_absent()) {
            tracing::trace!("Dropping absent metadata field '{}'", label);
        }
        let metadata = draft.without_absent();

        match account.account_id() {
            Some(id) => tracing::debug!(
                "Built metadata for account {}: {} fields ({} absent dropped)",
                id,
                metadata.len(),
                drafted - metadata.len()
            ),
            None => tracing::debug!(
                "Built account metadata: {} fields ({} absent dropped)",
                metadata.len(),
                drafted - metadata.len()
            ),
        }

        Ok(metadata)
    }
}

/// Builds display metadata for `account` with the default placeholders.
///
/// Returns an empty mapping when `account` is `None`. When given, `customize`
/// runs once on the draft before absent entries are dropped.
pub fn build_account_metadata<A: AccountRecord + ?Sized>(
    account: Option<&A>,
    customize: Option<&mut dyn FnMut(&mut AccountMetadata)>,
) -> AccountMetadata {
    let builder = MetadataBuilder::default();
    match customize {
        Some(customize) => builder.build_with(account, customize),
        None => builder.build(account),
    }
}

/// Fallible variant of [`build_account_metadata`]: an error from `customize`
/// propagates unchanged.
pub fn try_build_account_metadata<A, E, F>(
    account: Option<&A>,
    customize: F,
) -> Result<AccountMetadata, E>
where
    A: AccountRecord + ?Sized,
    F: FnOnce(&mut AccountMetadata) -> Result<(), E>,
{
    MetadataBuilder::default().try_build_with(account, customize)
}
