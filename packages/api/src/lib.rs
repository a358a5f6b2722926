//! # API crate: shared client logic for the NeonPay frontend
//!
//! Everything the views need that is not rendering lives here: the typed HTTP
//! client for the remote backend, the pinned wire schemas, the session object,
//! the flow state machines, and the pure collection queries.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend origin (production default, env override on native) |
//! | [`error`] | [`ApiError`], classified request failures |
//! | [`flows`] | `Enter → Review → Result` machines for send-money and top-up |
//! | [`models`] | Pinned request/response schemas |
//! | [`query`] | Pure filtering/sorting over fetched collections |
//! | [`session`] | Explicit [`Session`] wrapping the persisted bearer token |
//! | [`storage`] | Platform key/value stores backing the session |
//!
//! ## The client
//!
//! [`ApiClient`] wraps one `reqwest::Client` bound to an [`ApiConfig`] and a
//! [`Session`]. Every authenticated call sends `Authorization: Bearer <token>`
//! and decodes exactly one response envelope; a 401/403 clears the stored
//! token so the app falls back to the login screen.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod flows;
pub mod models;
pub mod query;
pub mod session;
pub mod storage;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Contact, Transaction, TransactionKind, User};
pub use session::Session;

use models::{
    BalanceResponse, ContactsResponse, LoginRequest, OrderRequest, OrderResponse, SendRequest,
    SendResponse, SignupRequest, TokenResponse, TransactionResponse, TransactionsResponse,
    UserResponse, VerifyRequest, VerifyResponse,
};

/// Body shape the backend uses for error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Typed client for the NeonPay backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::NotAuthenticated)
    }

    /// Decode one response: 401/403 becomes [`ApiError::Unauthorized`] and
    /// clears the stored token, other non-2xx becomes [`ApiError::Backend`]
    /// with the server's message, and a schema mismatch becomes
    /// [`ApiError::Decode`].
    async fn decode<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        let text = resp.text().await?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            self.session.clear_token();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }

    async fn get_authed<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .send()
            .await?;
        self.decode(resp).await
    }

    async fn post_authed<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        self.decode(resp).await
    }

    // --- Auth ---------------------------------------------------------------

    /// `POST /user/login`: exchange credentials for a bearer token and store
    /// it in the session.
    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/user/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let token: TokenResponse = self.decode(resp).await?;
        self.session.set_token(&token.token);
        Ok(())
    }

    /// `POST /user/signup`: create an account; the backend returns a bearer
    /// token for the fresh session.
    pub async fn signup(
        &self,
        name: String,
        username: String,
        email: String,
        password: String,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/user/signup"))
            .json(&SignupRequest {
                name,
                username,
                email,
                password,
            })
            .send()
            .await?;
        let token: TokenResponse = self.decode(resp).await?;
        self.session.set_token(&token.token);
        Ok(())
    }

    /// Drop the stored token. Purely local; the backend keeps no session
    /// state beyond the token itself.
    pub fn logout(&self) {
        self.session.clear_token();
    }

    // --- User ---------------------------------------------------------------

    /// `GET /user/me`.
    pub async fn me(&self) -> Result<User, ApiError> {
        let resp: UserResponse = self.get_authed("/user/me").await?;
        Ok(resp.user)
    }

    /// `GET /user/my-balance`.
    pub async fn balance(&self) -> Result<f64, ApiError> {
        let resp: BalanceResponse = self.get_authed("/user/my-balance").await?;
        Ok(resp.balance.balance)
    }

    /// `GET /user/all-users`.
    pub async fn contacts(&self) -> Result<Vec<Contact>, ApiError> {
        let resp: ContactsResponse = self.get_authed("/user/all-users").await?;
        Ok(resp.users)
    }

    // --- Transactions -------------------------------------------------------

    /// `GET /transaction/my-transactions`.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let resp: TransactionsResponse = self.get_authed("/transaction/my-transactions").await?;
        Ok(resp.transactions)
    }

    /// `GET /transaction/my-transactions/:id`.
    pub async fn transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        let resp: TransactionResponse = self
            .get_authed(&format!("/transaction/my-transactions/{id}"))
            .await?;
        Ok(resp.transaction)
    }

    /// `POST /transaction/send-upi-internal`: submit a peer transfer. The
    /// request's idempotency key travels in the `Idempotency-Key` header so a
    /// user-initiated retry after a timeout cannot double-charge.
    pub async fn send_money(&self, request: &SendRequest) -> Result<String, ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .post(self.url("/transaction/send-upi-internal"))
            .bearer_auth(token)
            .header("Idempotency-Key", &request.idempotency_key)
            .json(request)
            .send()
            .await?;
        let resp: SendResponse = self.decode(resp).await?;
        Ok(resp.transaction_id)
    }

    // --- Top-up -------------------------------------------------------------

    /// `POST /transaction/create-razorpay-order`: start a top-up; returns the
    /// checkout order id and the backend's pending transaction id.
    pub async fn create_topup_order(&self, amount: f64) -> Result<OrderResponse, ApiError> {
        self.post_authed("/transaction/create-razorpay-order", &OrderRequest { amount })
            .await
    }

    /// `POST /transaction/verify-razorpay-payment`: confirm a top-up after
    /// the external checkout reported success.
    pub async fn verify_topup(&self, request: &VerifyRequest) -> Result<(), ApiError> {
        let resp: VerifyResponse = self
            .post_authed("/transaction/verify-razorpay-payment", request)
            .await?;
        if resp.success {
            Ok(())
        } else {
            Err(ApiError::Backend {
                status: 200,
                message: resp
                    .message
                    .unwrap_or_else(|| "Payment verification failed".to_string()),
            })
        }
    }

    /// `POST /transaction/:id/fail`: compensating call after a verification
    /// error. Best-effort by design; callers log the failure and move on.
    pub async fn mark_transaction_failed(&self, id: &str) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .post(self.url(&format!("/transaction/{id}/fail")))
            .bearer_auth(token)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Backend {
                status: status.as_u16(),
                message: format!("Request failed ({})", status.as_u16()),
            })
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("session", &self.session)
            .finish()
    }
}
