//! Typed HTTP client for the site backend.
//!
//! Mirrors the frontend's fetch wrappers one-for-one: public reads need no
//! token, admin calls attach `Authorization: Bearer <token>` from the store,
//! and every non-2xx response surfaces as a single flat error. There is no
//! retry, no caching and no dedup of in-flight calls.
//!
//! The admin methods run a presence gate first: with no stored token they
//! fail fast with [`Error::NotLoggedIn`] instead of hitting the network.
//! Whether the token is still *valid* is the server's call; a stale token
//! shows up as a 401 on the next admin request.

mod error;
mod token_store;

pub use error::{Error, ADMIN_LOGIN_ROUTE};
pub use token_store::TokenStore;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;
use validator::Validate;

use crate::dto::admin_dto::DashboardStats;
use crate::dto::application_dto::{ApplicationRequest, ApplicationResponse};
use crate::dto::auth_dto::LoginResponse;
use crate::dto::blog_dto::BlogPayload;
use crate::dto::contact_dto::ContactMessagePayload;
use crate::dto::job_dto::JobPayload;
use crate::models::blog::Blog;
use crate::models::contact_message::ContactMessage;
use crate::models::job::Job;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct SiteClient {
    http: Client,
    base_url: String,
    tokens: TokenStore,
}

#[derive(Debug)]
pub struct SiteClientBuilder {
    base_url: String,
    timeout: Duration,
    token_path: Option<PathBuf>,
    http: Option<Client>,
}

impl SiteClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            token_path: None,
            http: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Persist the auth token at this path; without it the token lives in
    /// process memory only.
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Use a custom reqwest Client (TLS, proxies).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> Result<SiteClient, Error> {
        let http = match self.http {
            Some(c) => c,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };
        let tokens = match self.token_path {
            Some(path) => TokenStore::file(path),
            None => TokenStore::in_memory(),
        };
        Ok(SiteClient {
            http,
            base_url: self.base_url,
            tokens,
        })
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl SiteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        SiteClientBuilder::new(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> SiteClientBuilder {
        SiteClientBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The admin gate: token present → proceed, absent → redirect target.
    fn require_token(&self) -> Result<String, Error> {
        self.tokens.load().ok_or(Error::NotLoggedIn {
            login_route: ADMIN_LOGIN_ROUTE,
        })
    }

    fn authed(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        let token = self.require_token()?;
        Ok(req.bearer_auth(token))
    }

    async fn send(req: RequestBuilder) -> Result<Response, Error> {
        req.send().await.map_err(|e| Error::Connection(e.to_string()))
    }

    async fn decode<T: DeserializeOwned>(resp: Response, fallback: &str) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            resp.json::<T>()
                .await
                .map_err(|e| Error::Deserialization(e.to_string()))
        } else {
            Err(Self::api_error(resp, fallback).await)
        }
    }

    async fn expect_success(resp: Response, fallback: &str) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(resp, fallback).await)
        }
    }

    /// Lifts the server's `error` field when present, otherwise the fixed
    /// per-operation message, like the original fetch wrappers did.
    async fn api_error(resp: Response, fallback: &str) -> Error {
        let status = resp.status().as_u16();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => fallback.to_string(),
        };
        Error::Api { status, message }
    }

    // --- Authentication ---

    /// On success the token is persisted for subsequent admin calls.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, Error> {
        let req = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&json!({ "username": username, "password": password }));
        let resp = Self::send(req).await?;
        let body: LoginResponse = Self::decode(resp, "Login failed").await?;
        self.tokens.save(&body.token)?;
        Ok(body.token)
    }

    /// Clears the stored token and reports where to navigate. Succeeds
    /// whether or not a token was present.
    pub fn logout(&self) -> Result<&'static str, Error> {
        self.tokens.clear()?;
        Ok(ADMIN_LOGIN_ROUTE)
    }

    // --- Public endpoints ---

    pub async fn get_jobs(&self) -> Result<Vec<Job>, Error> {
        let resp = Self::send(self.http.get(self.url("/api/jobs"))).await?;
        Self::decode(resp, "Failed to fetch jobs").await
    }

    pub async fn get_job(&self, id: Uuid) -> Result<Job, Error> {
        let resp = Self::send(self.http.get(self.url(&format!("/api/jobs/{}", id)))).await?;
        Self::decode(resp, "Failed to fetch job").await
    }

    /// Validated before the request leaves the process, same rules as the
    /// server enforces.
    pub async fn apply_for_job(&self, application: &ApplicationRequest) -> Result<(), Error> {
        application.validate()?;
        let req = self
            .http
            .post(self.url("/api/applications/apply"))
            .json(application);
        let resp = Self::send(req).await?;
        Self::expect_success(resp, "Failed to submit application").await
    }

    pub async fn send_contact_message(
        &self,
        message: &ContactMessagePayload,
    ) -> Result<(), Error> {
        message.validate()?;
        let req = self.http.post(self.url("/api/contact")).json(message);
        let resp = Self::send(req).await?;
        Self::expect_success(resp, "Failed to send message").await
    }

    pub async fn get_blogs(&self) -> Result<Vec<Blog>, Error> {
        let resp = Self::send(self.http.get(self.url("/api/blogs"))).await?;
        Self::decode(resp, "Failed to fetch blogs").await
    }

    pub async fn get_blog(&self, id: Uuid) -> Result<Blog, Error> {
        let resp = Self::send(self.http.get(self.url(&format!("/api/blogs/{}", id)))).await?;
        Self::decode(resp, "Failed to fetch blog").await
    }

    // --- Admin: jobs ---

    pub async fn get_all_jobs_admin(&self) -> Result<Vec<Job>, Error> {
        let req = self.authed(self.http.get(self.url("/api/admin/jobs")))?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to fetch admin jobs").await
    }

    pub async fn create_job(&self, job: &JobPayload) -> Result<Job, Error> {
        let req = self.authed(self.http.post(self.url("/api/admin/jobs")).json(job))?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to create job").await
    }

    pub async fn update_job(&self, id: Uuid, job: &JobPayload) -> Result<Job, Error> {
        let req = self.authed(
            self.http
                .put(self.url(&format!("/api/admin/jobs/{}", id)))
                .json(job),
        )?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to update job").await
    }

    pub async fn delete_job(&self, id: Uuid) -> Result<(), Error> {
        let req = self.authed(self.http.delete(self.url(&format!("/api/admin/jobs/{}", id))))?;
        let resp = Self::send(req).await?;
        Self::expect_success(resp, "Failed to delete job").await
    }

    // --- Admin: applications ---

    pub async fn get_applications(&self) -> Result<Vec<ApplicationResponse>, Error> {
        let req = self.authed(self.http.get(self.url("/api/admin/applications")))?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to fetch applications").await
    }

    pub async fn update_application_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<ApplicationResponse, Error> {
        let req = self.authed(
            self.http
                .patch(self.url(&format!("/api/admin/applications/{}/status", id)))
                .json(&json!({ "status": status })),
        )?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to update status").await
    }

    // --- Admin: messages ---

    pub async fn get_messages(&self) -> Result<Vec<ContactMessage>, Error> {
        let req = self.authed(self.http.get(self.url("/api/admin/messages")))?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to fetch messages").await
    }

    pub async fn mark_message_read(&self, id: Uuid) -> Result<ContactMessage, Error> {
        let req = self.authed(
            self.http
                .patch(self.url(&format!("/api/admin/messages/{}/read", id))),
        )?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to mark read").await
    }

    pub async fn delete_message(&self, id: Uuid) -> Result<(), Error> {
        let req = self.authed(
            self.http
                .delete(self.url(&format!("/api/admin/messages/{}", id))),
        )?;
        let resp = Self::send(req).await?;
        Self::expect_success(resp, "Failed to delete message").await
    }

    // --- Admin: blogs ---

    pub async fn create_blog(&self, blog: &BlogPayload) -> Result<Blog, Error> {
        let req = self.authed(self.http.post(self.url("/api/admin/blogs")).json(blog))?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to create blog").await
    }

    pub async fn update_blog(&self, id: Uuid, blog: &BlogPayload) -> Result<Blog, Error> {
        let req = self.authed(
            self.http
                .put(self.url(&format!("/api/admin/blogs/{}", id)))
                .json(blog),
        )?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to update blog").await
    }

    pub async fn delete_blog(&self, id: Uuid) -> Result<(), Error> {
        let req = self.authed(
            self.http
                .delete(self.url(&format!("/api/admin/blogs/{}", id))),
        )?;
        let resp = Self::send(req).await?;
        Self::expect_success(resp, "Failed to delete blog").await
    }

    // --- Admin: dashboard ---

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, Error> {
        let req = self.authed(self.http.get(self.url("/api/admin/dashboard")))?;
        let resp = Self::send(req).await?;
        Self::decode(resp, "Failed to fetch dashboard stats").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SiteClient {
        SiteClient::new("http://localhost:8080").unwrap()
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let c = SiteClient::builder("http://localhost:8080/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(c.base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn admin_call_without_token_fails_before_any_request() {
        // The base URL points nowhere; a network attempt would error as
        // Connection, not NotLoggedIn.
        let c = SiteClient::new("http://invalid.localdomain:1").unwrap();
        let err = c.get_applications().await.unwrap_err();
        assert!(matches!(err, Error::NotLoggedIn { .. }));
        assert_eq!(err.redirect_target(), Some(ADMIN_LOGIN_ROUTE));
    }

    #[test]
    fn logout_clears_token_and_reports_login_route() {
        let c = client();
        c.token_store().save("some-token").unwrap();
        assert_eq!(c.logout().unwrap(), "/admin/login");
        assert_eq!(c.token_store().load(), None);

        // Logging out when already logged out behaves the same.
        assert_eq!(c.logout().unwrap(), "/admin/login");
    }

    #[tokio::test]
    async fn invalid_email_rejected_without_network() {
        let c = SiteClient::new("http://invalid.localdomain:1").unwrap();
        let payload = ContactMessagePayload {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            company: None,
            phone: None,
            subject: None,
            message: "Hello".to_string(),
        };
        let err = c.send_contact_message(&payload).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn non_url_resume_rejected_without_network() {
        let c = SiteClient::new("http://invalid.localdomain:1").unwrap();
        let payload = ApplicationRequest {
            job_id: Uuid::new_v4(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            resume_url: Some("my-resume.pdf".to_string()),
            cover_letter: None,
        };
        let err = c.apply_for_job(&payload).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
