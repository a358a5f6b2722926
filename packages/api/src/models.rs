//! # Wire types for the NeonPay backend
//!
//! Every JSON shape exchanged with the backend is pinned here. The backend
//! historically returned collections under varying keys (`contacts`, `users`,
//! `data`); this client decodes exactly one envelope per endpoint and treats
//! anything else as a decode error, so a contract change fails loudly instead
//! of silently rendering an empty list.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The authenticated user's profile (`GET /user/me`). |
//! | [`Contact`] | A UPI-addressable counterparty from `GET /user/all-users`. The `favorite` flag is client-side state and never round-trips to the server. |
//! | [`Transaction`] | A transfer record from the history endpoints. Fields the backend omits for some transaction kinds are `Option`. |
//! | [`TransactionKind`] | The `transactionType` discriminant. |
//!
//! ## Envelopes
//!
//! One per endpoint: [`TokenResponse`], [`UserResponse`], [`BalanceResponse`],
//! [`ContactsResponse`], [`TransactionsResponse`], [`TransactionResponse`],
//! [`SendResponse`], [`OrderResponse`], [`VerifyResponse`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub username: String,
    pub upi_id: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Display name, falling back to the UPI handle.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.upi_id
        } else {
            &self.name
        }
    }

    /// Up to two uppercase initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        initials(self.display_name())
    }
}

/// A counterparty from the contact list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub upi_id: String,
    #[serde(default)]
    pub verified: bool,
    /// Local-only UI state; the backend neither sends nor stores it.
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub last_transaction: Option<LastTransaction>,
}

impl Contact {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Summary of the most recent transfer to a contact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTransaction {
    pub amount: f64,
    pub date: String,
}

/// Direction/type of a transaction as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sent,
    Received,
    Topup,
    Credit,
    Debit,
}

impl TransactionKind {
    /// Whether the transaction moved money into the wallet.
    pub fn is_incoming(self) -> bool {
        matches!(self, Self::Received | Self::Topup | Self::Credit)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Received => "Received",
            Self::Topup => "Top-up",
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }
}

/// A monetary transfer record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub transaction_type: TransactionKind,
    #[serde(default)]
    pub sender_upi_id: Option<String>,
    #[serde(default)]
    pub receiver_upi_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Transaction {
    /// The other party's UPI handle, from whichever side the backend filled in.
    pub fn counterparty(&self) -> &str {
        match self.transaction_type {
            TransactionKind::Sent | TransactionKind::Debit => {
                self.receiver_upi_id.as_deref().unwrap_or("unknown")
            }
            _ => self.sender_upi_id.as_deref().unwrap_or("unknown"),
        }
    }

    /// Parsed creation timestamp, or `None` if the backend sent something
    /// that is not RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

// --- Response envelopes -----------------------------------------------------

/// `POST /user/login` and `POST /user/signup`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `GET /user/me`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// `GET /user/my-balance`: the balance record is nested one level down.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: BalanceRecord,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub balance: f64,
}

/// `GET /user/all-users`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactsResponse {
    pub users: Vec<Contact>,
}

/// `GET /transaction/my-transactions`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

/// `GET /transaction/my-transactions/:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

/// `POST /transaction/send-upi-internal`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub transaction_id: String,
}

/// `POST /transaction/create-razorpay-order`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub transaction_id: String,
}

/// `POST /transaction/verify-razorpay-payment`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// --- Request bodies ---------------------------------------------------------

/// `POST /user/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /user/signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /transaction/send-upi-internal`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub receiver_upi_id: String,
    pub amount: f64,
    /// Sent as the `Idempotency-Key` header, not in the body.
    #[serde(skip)]
    pub idempotency_key: String,
}

/// `POST /transaction/create-razorpay-order`.
#[derive(Clone, Debug, Serialize)]
pub struct OrderRequest {
    pub amount: f64,
}

/// `POST /transaction/verify-razorpay-payment`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
    pub transaction_id: String,
    pub amount: f64,
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_balance_envelope() {
        let body = r#"{"balance":{"balance":250.5}}"#;
        let resp: BalanceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.balance.balance, 250.5);
    }

    #[test]
    fn decodes_transaction_with_missing_optionals() {
        let body = r#"{
            "id": "tx_1",
            "amount": 42.0,
            "transactionType": "sent",
            "receiverUpiId": "sarah@neonpay",
            "createdAt": "2025-06-01T10:00:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(body).unwrap();
        assert_eq!(tx.transaction_type, TransactionKind::Sent);
        assert_eq!(tx.counterparty(), "sarah@neonpay");
        assert!(tx.fee.is_none());
        assert!(tx.created_at_utc().is_some());
    }

    #[test]
    fn contacts_envelope_rejects_unexpected_shape() {
        // The old backend sometimes used a `contacts` key; that is no longer
        // tolerated.
        let body = r#"{"contacts":[]}"#;
        assert!(serde_json::from_str::<ContactsResponse>(body).is_err());
    }

    #[test]
    fn contact_defaults_favorite_to_false() {
        let body = r#"{"id":"1","name":"Alex Chen","upiId":"alex@neonpay"}"#;
        let c: Contact = serde_json::from_str(body).unwrap();
        assert!(!c.favorite);
        assert!(!c.verified);
        assert_eq!(c.initials(), "AC");
    }

    #[test]
    fn send_request_body_omits_idempotency_key() {
        let req = SendRequest {
            receiver_upi_id: "mike@neonpay".into(),
            amount: 10.0,
            idempotency_key: "k".into(),
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["receiverUpiId"], "mike@neonpay");
        assert!(body.get("idempotencyKey").is_none());
    }

    #[test]
    fn incoming_kinds() {
        assert!(TransactionKind::Received.is_incoming());
        assert!(TransactionKind::Topup.is_incoming());
        assert!(!TransactionKind::Sent.is_incoming());
    }
}
