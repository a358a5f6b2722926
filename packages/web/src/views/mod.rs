use dioxus::prelude::*;

use crate::Route;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod onboarding;
pub use onboarding::Onboarding;

mod dashboard;
pub use dashboard::Dashboard;

mod contacts;
pub use contacts::Contacts;

mod add_contact;
pub use add_contact::AddContact;

mod send;
pub use send::Send;

mod transactions;
pub use transactions::Transactions;

mod transaction_detail;
pub use transaction_detail::TransactionDetail;

mod profile;
pub use profile::Profile;

mod topup;
pub use topup::TopUp;

/// Kick signed-out visitors back to the login page once the session has
/// resolved. Views render their loading state while the session is still
/// being resolved, so there is no flash of protected content.
pub(crate) fn use_require_auth() {
    let session = ui::use_session();
    let nav = use_navigator();
    use_effect(move || {
        let state = session();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });
}
