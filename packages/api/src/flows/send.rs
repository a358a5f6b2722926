//! Send-money flow: `Enter → Review → Result`.

use uuid::Uuid;

use crate::models::SendRequest;

/// Quick-amount shortcuts shown under the amount field.
pub const QUICK_SEND_AMOUNTS: [u32; 5] = [50, 100, 200, 500, 1000];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SendStep {
    #[default]
    Enter,
    Review,
    Result,
}

/// State for the three-step transfer flow.
///
/// The idempotency key is minted when the user confirms the ENTER step and
/// reused for every retry of that confirmed transfer, so a retry after a
/// timeout cannot double-charge. Going back to edit or resetting discards it.
#[derive(Clone, Debug, Default)]
pub struct SendFlow {
    step: SendStep,
    recipient: String,
    amount: String,
    error: Option<String>,
    transaction_id: Option<String>,
    idempotency_key: Option<String>,
}

impl SendFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> SendStep {
        self.step
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Backend transaction id, present only in `Result`.
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.recipient = recipient.into();
        self.error = None;
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
        self.error = None;
    }

    /// Quick-amount shortcut; overwrites the amount field.
    pub fn quick_amount(&mut self, amount: u32) {
        self.set_amount(amount.to_string());
    }

    /// The entered amount, when it parses as a number.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok()
    }

    /// Gate for the "Review Transfer" action: recipient non-empty and a
    /// positive amount.
    pub fn can_review(&self) -> bool {
        !self.recipient.trim().is_empty() && self.parsed_amount().is_some_and(|a| a > 0.0)
    }

    /// `Enter → Review`. Mints the idempotency key for this transfer.
    /// Returns false (and stays put) when the guard fails.
    pub fn review(&mut self) -> bool {
        if self.step != SendStep::Enter || !self.can_review() {
            return false;
        }
        self.step = SendStep::Review;
        self.error = None;
        self.idempotency_key = Some(Uuid::new_v4().to_string());
        true
    }

    /// `Review → Enter`, keeping both fields intact. The pending transfer is
    /// abandoned, so its idempotency key is discarded.
    pub fn back_to_edit(&mut self) {
        if self.step == SendStep::Review {
            self.step = SendStep::Enter;
            self.error = None;
            self.idempotency_key = None;
        }
    }

    /// Local pre-submission validation. On success yields the request payload
    /// without issuing any network call; on failure records and returns the
    /// message. The balance check is a UX hint against the last fetched value;
    /// the backend's rejection remains authoritative.
    pub fn submit_request(&mut self, balance: Option<f64>) -> Result<SendRequest, String> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(self.record_error("Please enter a valid UPI ID"));
        }
        let amount = match self.parsed_amount() {
            Some(a) if a > 0.0 => a,
            _ => return Err(self.record_error("Please enter a valid amount")),
        };
        if let Some(balance) = balance {
            if amount > balance {
                return Err(self.record_error("Insufficient balance"));
            }
        }
        let idempotency_key = self
            .idempotency_key
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        Ok(SendRequest {
            receiver_upi_id: recipient.to_string(),
            amount,
            idempotency_key,
        })
    }

    /// `Review → Result` after the backend accepted the transfer.
    pub fn complete(&mut self, transaction_id: impl Into<String>) {
        self.step = SendStep::Result;
        self.transaction_id = Some(transaction_id.into());
        self.error = None;
    }

    /// Submission failed: stay on `Review` with the message; recipient and
    /// amount are kept for retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// "Send another": back to a fresh `Enter`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record_error(&mut self, message: &str) -> String {
        self.error = Some(message.to_string());
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_is_gated_on_recipient_and_positive_amount() {
        let mut flow = SendFlow::new();
        assert!(!flow.can_review());

        flow.set_recipient("sarah@neonpay");
        assert!(!flow.can_review());

        flow.set_amount("0");
        assert!(!flow.can_review());

        flow.set_amount("-5");
        assert!(!flow.can_review());

        flow.set_amount("150");
        assert!(flow.can_review());

        flow.set_recipient("");
        assert!(!flow.can_review());
        assert!(!flow.review());
        assert_eq!(flow.step(), SendStep::Enter);
    }

    #[test]
    fn quick_amount_sets_the_field_directly() {
        let mut flow = SendFlow::new();
        flow.quick_amount(500);
        assert_eq!(flow.amount(), "500");
        assert_eq!(flow.parsed_amount(), Some(500.0));
    }

    #[test]
    fn insufficient_balance_blocks_locally_without_a_request() {
        let mut flow = SendFlow::new();
        flow.set_recipient("sarah@neonpay");
        flow.set_amount("150");
        assert!(flow.review());

        let err = flow.submit_request(Some(100.0)).unwrap_err();
        assert_eq!(err, "Insufficient balance");
        assert_eq!(flow.error(), Some("Insufficient balance"));
        assert_eq!(flow.step(), SendStep::Review);
    }

    #[test]
    fn unknown_balance_defers_to_the_backend() {
        let mut flow = SendFlow::new();
        flow.set_recipient("sarah@neonpay");
        flow.set_amount("150");
        flow.review();
        assert!(flow.submit_request(None).is_ok());
    }

    #[test]
    fn success_carries_the_entered_values_unmodified() {
        let mut flow = SendFlow::new();
        flow.set_recipient("mike@neonpay");
        flow.set_amount("42.50");
        assert!(flow.review());

        let req = flow.submit_request(Some(100.0)).unwrap();
        assert_eq!(req.receiver_upi_id, "mike@neonpay");
        assert_eq!(req.amount, 42.5);

        flow.complete("tx_9");
        assert_eq!(flow.step(), SendStep::Result);
        assert_eq!(flow.transaction_id(), Some("tx_9"));
        assert_eq!(flow.recipient(), "mike@neonpay");
        assert_eq!(flow.amount(), "42.50");
    }

    #[test]
    fn failure_stays_on_review_and_keeps_the_fields() {
        let mut flow = SendFlow::new();
        flow.set_recipient("mike@neonpay");
        flow.set_amount("42");
        flow.review();

        flow.fail("network error, please try again");
        assert_eq!(flow.step(), SendStep::Review);
        assert_eq!(flow.error(), Some("network error, please try again"));
        assert_eq!(flow.recipient(), "mike@neonpay");
        assert_eq!(flow.amount(), "42");
    }

    #[test]
    fn retry_reuses_the_same_idempotency_key() {
        let mut flow = SendFlow::new();
        flow.set_recipient("mike@neonpay");
        flow.set_amount("42");
        flow.review();

        let first = flow.submit_request(None).unwrap();
        flow.fail("network error, please try again");
        let second = flow.submit_request(None).unwrap();
        assert_eq!(first.idempotency_key, second.idempotency_key);
    }

    #[test]
    fn going_back_to_edit_mints_a_fresh_key_on_the_next_review() {
        let mut flow = SendFlow::new();
        flow.set_recipient("mike@neonpay");
        flow.set_amount("42");
        flow.review();
        let first = flow.submit_request(None).unwrap();

        flow.back_to_edit();
        assert_eq!(flow.step(), SendStep::Enter);
        assert_eq!(flow.recipient(), "mike@neonpay");
        assert_eq!(flow.amount(), "42");

        flow.review();
        let second = flow.submit_request(None).unwrap();
        assert_ne!(first.idempotency_key, second.idempotency_key);
    }

    #[test]
    fn reset_returns_to_a_blank_enter_step() {
        let mut flow = SendFlow::new();
        flow.set_recipient("mike@neonpay");
        flow.set_amount("42");
        flow.review();
        flow.complete("tx_1");

        flow.reset();
        assert_eq!(flow.step(), SendStep::Enter);
        assert!(flow.recipient().is_empty());
        assert!(flow.amount().is_empty());
        assert!(flow.transaction_id().is_none());
        assert!(flow.error().is_none());
    }
}
