//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::make_client;

mod session;
pub use session::{use_session, LogoutButton, SessionProvider, SessionState};

mod header;
pub use header::DashboardHeader;

mod balance_card;
pub use balance_card::BalanceCard;

mod amount_input;
pub use amount_input::AmountInput;

mod transaction_item;
pub use transaction_item::TransactionItem;

mod contact_item;
pub use contact_item::ContactItem;

mod filter_panel;
pub use filter_panel::{ContactFilterPanel, TransactionFilterPanel};

mod spinner;
pub use spinner::Spinner;

mod error_panel;
pub use error_panel::ErrorPanel;

mod format;
pub use format::{format_amount, format_date, format_datetime};
