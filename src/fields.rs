//! Per-field derivation rules
//!
//! One pure function per display label. Each reads only what it needs from
//! the account and yields `MetadataValue::Absent` at the first missing link,
//! never panicking on missing nested records.

use crate::config::MetadataConfig;
use crate::metadata::MetadataValue;
use crate::models::AccountRecord;

/// `"{name} {email}"` of the owner.
pub fn account_owner<A: AccountRecord + ?Sized>(account: &A) -> MetadataValue {
    account
        .owner()
        .map(|owner| format!("{} {}", owner.name, owner.email))
        .into()
}

pub fn account_status<A: AccountRecord + ?Sized>(account: &A) -> MetadataValue {
    account
        .account_details()
        .map(|details| details.account_status.clone())
        .into()
}

/// Active customer count; `0` is kept.
pub fn active_customers<A: AccountRecord + ?Sized>(account: &A) -> MetadataValue {
    account
        .account_details()
        .and_then(|details| details.active_customer_count)
        .into()
}

/// Connector names, or the billing placeholder when there are none.
pub fn billing_systems<A: AccountRecord + ?Sized>(
    account: &A,
    config: &MetadataConfig,
) -> MetadataValue {
    let names: Vec<String> = account
        .billing_connectors()
        .iter()
        .map(|connector| connector.name.clone())
        .collect();

    if names.is_empty() {
        MetadataValue::List(vec![config.billing_placeholder.clone()])
    } else {
        MetadataValue::List(names)
    }
}

/// Humanized import status of the main connector, or the import placeholder.
pub fn import_status<A: AccountRecord + ?Sized>(
    account: &A,
    config: &MetadataConfig,
) -> MetadataValue {
    let status = account
        .main_connector()
        .and_then(|connector| connector.import_status.as_deref())
        .and_then(humanize);

    MetadataValue::Text(status.unwrap_or_else(|| config.import_placeholder.clone()))
}

pub fn last_active<A: AccountRecord + ?Sized>(account: &A) -> MetadataValue {
    account.last_active_at().into()
}

pub fn revenue_recognition<A: AccountRecord + ?Sized>(account: &A) -> MetadataValue {
    MetadataValue::Boolean(account.rev_rec_enabled())
}

pub fn sample_data_present<A: AccountRecord + ?Sized>(account: &A) -> MetadataValue {
    MetadataValue::Boolean(account.sample_data_present())
}

/// Renders a machine status token as a readable phrase.
///
/// Trims, drops a trailing `_id`, turns `_` and `-` into spaces, collapses
/// whitespace, lower-cases, and capitalizes the first letter:
/// `"IN_PROGRESS"` → `"In progress"`. Returns `None` for blank tokens.
pub fn humanize(token: &str) -> Option<String> {
    let trimmed = token.trim();
    let trimmed = trimmed.strip_suffix("_id").unwrap_or(trimmed);

    let spaced = trimmed.replace(['_', '-'], " ");
    let words: Vec<&str> = spaced.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let phrase = words.join(" ").to_lowercase();

    let mut chars = phrase.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountDetails, Connector, Person};

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("completed").as_deref(), Some("Completed"));
        assert_eq!(humanize("IN_PROGRESS").as_deref(), Some("In progress"));
        assert_eq!(
            humanize(" failed-with_errors ").as_deref(),
            Some("Failed with errors")
        );
        assert_eq!(humanize("connector_id").as_deref(), Some("Connector"));
        assert_eq!(humanize("queued__for___retry").as_deref(), Some("Queued for retry"));
    }

    #[test]
    fn test_humanize_blank() {
        assert_eq!(humanize(""), None);
        assert_eq!(humanize("   "), None);
        assert_eq!(humanize("__"), None);
    }

    #[test]
    fn test_owner_absent_without_owner() {
        let account = Account::default();
        assert_eq!(account_owner(&account), MetadataValue::Absent);

        let account = Account {
            owner: Some(Person::new("Jane Doe", "jane@x.com")),
            ..Account::default()
        };
        assert_eq!(
            account_owner(&account),
            MetadataValue::Text("Jane Doe jane@x.com".to_string())
        );
    }

    #[test]
    fn test_details_fields() {
        let account = Account {
            account_details: Some(AccountDetails {
                account_status: "active".to_string(),
                active_customer_count: Some(0),
            }),
            ..Account::default()
        };

        assert_eq!(account_status(&account), MetadataValue::Text("active".to_string()));
        assert_eq!(active_customers(&account), MetadataValue::Integer(0));
        assert_eq!(active_customers(&Account::default()), MetadataValue::Absent);
        assert_eq!(account_status(&Account::default()), MetadataValue::Absent);
    }

    #[test]
    fn test_billing_and_import_fallbacks() {
        let config = MetadataConfig::default();
        let mut account = Account::default();

        assert_eq!(
            billing_systems(&account, &config),
            MetadataValue::List(vec!["None configured".to_string()])
        );
        assert_eq!(
            import_status(&account, &config),
            MetadataValue::Text("Never imported".to_string())
        );

        account.main_connector = Some(Connector::new("Stripe", Some("  ")));
        assert_eq!(
            import_status(&account, &config),
            MetadataValue::Text("Never imported".to_string())
        );

        account.main_connector = Some(Connector::new("Stripe", Some("partially_imported")));
        account.billing_connectors = vec![
            Connector::new("Stripe", None),
            Connector::new("Chargebee", None),
        ];
        assert_eq!(
            import_status(&account, &config),
            MetadataValue::Text("Partially imported".to_string())
        );
        assert_eq!(
            billing_systems(&account, &config),
            MetadataValue::List(vec!["Stripe".to_string(), "Chargebee".to_string()])
        );
    }

    #[test]
    fn test_flags_kept_verbatim() {
        let account = Account::default();

        assert_eq!(revenue_recognition(&account), MetadataValue::Boolean(false));
        assert_eq!(sample_data_present(&account), MetadataValue::Boolean(false));
        assert_eq!(last_active(&account), MetadataValue::Absent);
    }
}
