//! Client-side collection queries.
//!
//! The backend returns whole collections and the UI re-filters them on every
//! keystroke; everything here is a pure function of (collection, search term,
//! filter), so the views stay thin and the behavior is testable without a
//! network.

use crate::models::{Contact, Transaction, TransactionKind};

/// Categorical filter for the contact list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContactFilter {
    #[default]
    All,
    Verified,
    Favorites,
}

impl ContactFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Verified => "Verified",
            Self::Favorites => "Favorites",
        }
    }
}

/// Categorical filter for transaction history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Sent,
    Received,
}

impl TransactionFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Sent => "Sent",
            Self::Received => "Received",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Date,
    Amount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Case-insensitive substring match on name or UPI id, then the categorical
/// filter. Source order is preserved.
pub fn filter_contacts(contacts: &[Contact], search: &str, filter: ContactFilter) -> Vec<Contact> {
    let needle = search.trim().to_lowercase();
    contacts
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.upi_id.to_lowercase().contains(&needle)
        })
        .filter(|c| match filter {
            ContactFilter::All => true,
            ContactFilter::Verified => c.verified,
            ContactFilter::Favorites => c.favorite,
        })
        .cloned()
        .collect()
}

/// Flip one contact's favorite flag in place. The flag never leaves the
/// client; there is no endpoint to persist it.
pub fn toggle_favorite(contacts: &mut [Contact], id: &str) {
    if let Some(contact) = contacts.iter_mut().find(|c| c.id == id) {
        contact.favorite = !contact.favorite;
    }
}

/// Substring match on the transaction id and counterparty UPI ids, then the
/// direction filter. Source order is preserved.
pub fn filter_transactions(
    transactions: &[Transaction],
    search: &str,
    filter: TransactionFilter,
) -> Vec<Transaction> {
    let needle = search.trim().to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.id.to_lowercase().contains(&needle)
                || t.sender_upi_id
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
                || t.receiver_upi_id
                    .as_deref()
                    .is_some_and(|r| r.to_lowercase().contains(&needle))
        })
        .filter(|t| match filter {
            TransactionFilter::All => true,
            TransactionFilter::Sent => t.transaction_type == TransactionKind::Sent,
            TransactionFilter::Received => t.transaction_type == TransactionKind::Received,
        })
        .cloned()
        .collect()
}

/// Stable in-place sort by date or amount.
pub fn sort_transactions(transactions: &mut [Transaction], by: SortBy, order: SortOrder) {
    transactions.sort_by(|a, b| {
        let ord = match by {
            SortBy::Date => {
                let ta = a.created_at_utc().map(|d| d.timestamp_millis()).unwrap_or(0);
                let tb = b.created_at_utc().map(|d| d.timestamp_millis()).unwrap_or(0);
                ta.cmp(&tb)
            }
            SortBy::Amount => a
                .amount
                .partial_cmp(&b.amount)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Sent/received sums for the history stats cards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub received: f64,
    pub received_count: usize,
    pub sent: f64,
    pub sent_count: usize,
}

pub fn transaction_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for t in transactions {
        match t.transaction_type {
            TransactionKind::Received => {
                totals.received += t.amount;
                totals.received_count += 1;
            }
            TransactionKind::Sent => {
                totals.sent += t.amount;
                totals.sent_count += 1;
            }
            _ => {}
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str, upi: &str, verified: bool, favorite: bool) -> Contact {
        Contact {
            id: id.into(),
            name: name.into(),
            upi_id: upi.into(),
            verified,
            favorite,
            avatar: None,
            last_transaction: None,
        }
    }

    fn tx(id: &str, amount: f64, kind: TransactionKind, created_at: &str) -> Transaction {
        Transaction {
            id: id.into(),
            amount,
            transaction_type: kind,
            sender_upi_id: Some("me@neonpay".into()),
            receiver_upi_id: Some("other@neonpay".into()),
            category: None,
            status: None,
            fee: None,
            tax: None,
            created_at: created_at.into(),
            updated_at: None,
        }
    }

    #[test]
    fn search_matches_name_or_upi_case_insensitively() {
        let contacts = vec![
            contact("1", "Alex Chen", "alex@neonpay", true, false),
            contact("2", "Sarah Kim", "sarah@neonpay", false, true),
        ];
        let hits = filter_contacts(&contacts, "ALEX", ContactFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        let hits = filter_contacts(&contacts, "@neonpay", ContactFilter::All);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn categorical_filters_compose_with_search() {
        let contacts = vec![
            contact("1", "Alex Chen", "alex@neonpay", true, false),
            contact("2", "Sarah Kim", "sarah@neonpay", false, true),
            contact("3", "Mike Johnson", "mike@neonpay", true, true),
        ];
        let verified = filter_contacts(&contacts, "", ContactFilter::Verified);
        assert_eq!(verified.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);

        let favorite_m = filter_contacts(&contacts, "m", ContactFilter::Favorites);
        assert_eq!(favorite_m.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), ["2", "3"]);
    }

    #[test]
    fn toggle_favorite_touches_exactly_one_contact() {
        let mut contacts = vec![
            contact("1", "Alex Chen", "alex@neonpay", true, false),
            contact("2", "Sarah Kim", "sarah@neonpay", false, true),
        ];
        let before = contacts.clone();
        toggle_favorite(&mut contacts, "1");

        assert!(contacts[0].favorite);
        assert_eq!(contacts[0].name, before[0].name);
        assert_eq!(contacts[0].upi_id, before[0].upi_id);
        assert_eq!(contacts[0].verified, before[0].verified);
        assert_eq!(contacts[1], before[1]);

        toggle_favorite(&mut contacts, "1");
        assert_eq!(contacts, before);
    }

    #[test]
    fn toggle_favorite_with_unknown_id_is_a_no_op() {
        let mut contacts = vec![contact("1", "Alex Chen", "alex@neonpay", true, false)];
        let before = contacts.clone();
        toggle_favorite(&mut contacts, "missing");
        assert_eq!(contacts, before);
    }

    #[test]
    fn received_filter_keeps_exactly_the_received_records_in_order() {
        let transactions = vec![
            tx("a", 10.0, TransactionKind::Sent, "2025-01-01T00:00:00Z"),
            tx("b", 20.0, TransactionKind::Received, "2025-01-02T00:00:00Z"),
            tx("c", 30.0, TransactionKind::Sent, "2025-01-03T00:00:00Z"),
            tx("d", 40.0, TransactionKind::Received, "2025-01-04T00:00:00Z"),
            tx("e", 50.0, TransactionKind::Sent, "2025-01-05T00:00:00Z"),
        ];
        let received = filter_transactions(&transactions, "", TransactionFilter::Received);
        assert_eq!(received.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["b", "d"]);
    }

    #[test]
    fn sort_by_amount_and_date() {
        let mut transactions = vec![
            tx("a", 30.0, TransactionKind::Sent, "2025-01-03T00:00:00Z"),
            tx("b", 10.0, TransactionKind::Sent, "2025-01-01T00:00:00Z"),
            tx("c", 20.0, TransactionKind::Sent, "2025-01-02T00:00:00Z"),
        ];
        sort_transactions(&mut transactions, SortBy::Amount, SortOrder::Asc);
        assert_eq!(transactions.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["b", "c", "a"]);

        sort_transactions(&mut transactions, SortBy::Date, SortOrder::Desc);
        assert_eq!(transactions.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["a", "c", "b"]);
    }

    #[test]
    fn unparseable_dates_sort_as_oldest() {
        let mut transactions = vec![
            tx("bad", 1.0, TransactionKind::Sent, "yesterday"),
            tx("good", 1.0, TransactionKind::Sent, "2025-01-01T00:00:00Z"),
        ];
        sort_transactions(&mut transactions, SortBy::Date, SortOrder::Desc);
        assert_eq!(transactions[0].id, "good");
    }

    #[test]
    fn totals_only_count_sent_and_received() {
        let transactions = vec![
            tx("a", 10.0, TransactionKind::Sent, "2025-01-01T00:00:00Z"),
            tx("b", 20.0, TransactionKind::Received, "2025-01-02T00:00:00Z"),
            tx("c", 500.0, TransactionKind::Topup, "2025-01-03T00:00:00Z"),
            tx("d", 5.0, TransactionKind::Sent, "2025-01-04T00:00:00Z"),
        ];
        let totals = transaction_totals(&transactions);
        assert_eq!(totals.sent, 15.0);
        assert_eq!(totals.sent_count, 2);
        assert_eq!(totals.received, 20.0);
        assert_eq!(totals.received_count, 1);
    }
}
