//! View-state machines for the transactional flows.
//!
//! Both flows are strictly linear and pure: they validate input, gate step
//! transitions, and record outcomes, while the views drive the actual network
//! calls between transitions. Keeping them free of I/O is what makes the
//! guard conditions testable.

pub mod send;
pub mod topup;

pub use send::{SendFlow, SendStep, QUICK_SEND_AMOUNTS};
pub use topup::{TopUpFlow, TopUpStep, MIN_TOPUP_AMOUNT, QUICK_TOPUP_AMOUNTS};
