//! Wallet top-up flow: `Enter → Processing → Result`.
//!
//! The processing step spans the whole checkout handshake: create order, hand
//! the order id to the external widget, wait for its callback, then verify
//! with the backend. Failure or dismissal at any stage returns the flow to
//! `Enter`. No timeout runs while the widget is open; only its own dismiss
//! callback ends the wait.

/// Smallest accepted top-up.
pub const MIN_TOPUP_AMOUNT: f64 = 10.0;

/// Quick-select amounts.
pub const QUICK_TOPUP_AMOUNTS: [u32; 5] = [100, 500, 1000, 2000, 5000];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TopUpStep {
    #[default]
    Enter,
    Processing,
    Result,
}

#[derive(Clone, Debug)]
pub struct TopUpFlow {
    step: TopUpStep,
    amount: f64,
    error: Option<String>,
    /// Backend transaction id for the order being processed; kept through
    /// `Result` so the receipt can show it, and used for the compensating
    /// fail call when verification errors out.
    transaction_id: Option<String>,
}

impl Default for TopUpFlow {
    fn default() -> Self {
        Self {
            step: TopUpStep::Enter,
            amount: 100.0,
            error: None,
            transaction_id: None,
        }
    }
}

impl TopUpFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> TopUpStep {
        self.step
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.error = None;
    }

    pub fn quick_amount(&mut self, amount: u32) {
        self.set_amount(amount as f64);
    }

    pub fn can_begin(&self) -> bool {
        self.amount >= MIN_TOPUP_AMOUNT
    }

    /// `Enter → Processing`. Validates the minimum and yields the amount to
    /// send in the order request.
    pub fn begin(&mut self) -> Result<f64, String> {
        if !self.can_begin() {
            let message = format!("Minimum amount is ${MIN_TOPUP_AMOUNT}");
            self.error = Some(message.clone());
            return Err(message);
        }
        self.step = TopUpStep::Processing;
        self.error = None;
        self.transaction_id = None;
        Ok(self.amount)
    }

    /// The backend created the payment order; remember its transaction id
    /// while the external widget runs.
    pub fn order_created(&mut self, transaction_id: impl Into<String>) {
        self.transaction_id = Some(transaction_id.into());
    }

    /// The user closed the checkout window without paying.
    pub fn dismissed(&mut self) {
        if self.step == TopUpStep::Processing {
            self.step = TopUpStep::Enter;
            self.error = None;
        }
    }

    /// Order creation, widget load, or the payment itself failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.step = TopUpStep::Enter;
        self.error = Some(message.into());
    }

    /// Verification failed after the widget reported success. Returns the
    /// pending transaction id so the caller can fire the best-effort
    /// compensating fail call.
    pub fn verification_failed(&mut self, message: impl Into<String>) -> Option<String> {
        self.step = TopUpStep::Enter;
        self.error = Some(message.into());
        self.transaction_id.take()
    }

    /// Backend verified the payment: `Processing → Result`.
    pub fn verified(&mut self) {
        self.step = TopUpStep::Result;
        self.error = None;
    }

    /// "Make another top-up".
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_enforces_the_minimum_amount() {
        let mut flow = TopUpFlow::new();
        flow.set_amount(5.0);
        assert!(!flow.can_begin());
        let err = flow.begin().unwrap_err();
        assert!(err.contains("Minimum amount"));
        assert_eq!(flow.step(), TopUpStep::Enter);

        flow.set_amount(10.0);
        assert_eq!(flow.begin().unwrap(), 10.0);
        assert_eq!(flow.step(), TopUpStep::Processing);
    }

    #[test]
    fn dismissal_returns_to_enter_without_an_error() {
        let mut flow = TopUpFlow::new();
        flow.set_amount(500.0);
        flow.begin().unwrap();
        flow.order_created("tx_1");

        flow.dismissed();
        assert_eq!(flow.step(), TopUpStep::Enter);
        assert!(flow.error().is_none());
        assert_eq!(flow.amount(), 500.0);
    }

    #[test]
    fn payment_failure_surfaces_the_message() {
        let mut flow = TopUpFlow::new();
        flow.begin().unwrap();
        flow.fail("Payment failed");
        assert_eq!(flow.step(), TopUpStep::Enter);
        assert_eq!(flow.error(), Some("Payment failed"));
    }

    #[test]
    fn verification_failure_hands_back_the_pending_transaction() {
        let mut flow = TopUpFlow::new();
        flow.begin().unwrap();
        flow.order_created("tx_7");

        let pending = flow.verification_failed("Payment verification failed");
        assert_eq!(pending.as_deref(), Some("tx_7"));
        assert_eq!(flow.step(), TopUpStep::Enter);
        assert_eq!(flow.error(), Some("Payment verification failed"));
    }

    #[test]
    fn successful_verification_reaches_result_with_the_receipt_id() {
        let mut flow = TopUpFlow::new();
        flow.set_amount(2000.0);
        flow.begin().unwrap();
        flow.order_created("tx_3");
        flow.verified();

        assert_eq!(flow.step(), TopUpStep::Result);
        assert_eq!(flow.transaction_id(), Some("tx_3"));
        assert_eq!(flow.amount(), 2000.0);

        flow.reset();
        assert_eq!(flow.step(), TopUpStep::Enter);
        assert_eq!(flow.amount(), 100.0);
        assert!(flow.transaction_id().is_none());
    }

    #[test]
    fn beginning_a_new_order_clears_the_previous_transaction() {
        let mut flow = TopUpFlow::new();
        flow.begin().unwrap();
        flow.order_created("tx_1");
        flow.fail("Payment failed");

        flow.begin().unwrap();
        assert!(flow.transaction_id().is_none());
    }
}
