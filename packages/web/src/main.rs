use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AddContact, Contacts, Dashboard, Home, Login, Onboarding, Profile, Send, Signup, TopUp,
    TransactionDetail, Transactions,
};

mod checkout;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/contacts")]
    Contacts {},
    #[route("/add-contact")]
    AddContact {},
    #[route("/send?:to")]
    Send { to: String },
    #[route("/transactions")]
    Transactions {},
    #[route("/transactions/:transaction_id")]
    TransactionDetail { transaction_id: String },
    #[route("/profile")]
    Profile {},
    #[route("/topup")]
    TopUp {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
