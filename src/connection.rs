//! HTTP transport wrapper around the Printrack REST API.
//!
//! Owns the base URL, the request timeout, a lazily constructed blocking
//! client, and the optional bearer token. Query interfaces borrow a
//! [`Connection`] and issue typed requests through the helpers here.

use std::cell::RefCell;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PrintrackError, Result};

/// Blocking HTTP connection to a Printrack backend.
///
/// The `reqwest` client is built on first use. The bearer token lives in a
/// `RefCell` so a successful login can install it without requiring `&mut`
/// access through the borrowing query wrappers.
pub struct Connection {
    base_url: String,
    timeout: Duration,
    client: RefCell<Option<Client>>,
    token: RefCell<Option<String>>,
}

impl Connection {
    /// Create a connection against `base_url` (no trailing slash expected).
    pub fn new(base_url: String, timeout: Duration, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout,
            client: RefCell::new(None),
            token: RefCell::new(token),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install or clear the bearer token sent with subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    /// The currently installed bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Client {
        let mut slot = self.client.borrow_mut();
        match slot.as_ref() {
            Some(client) => client.clone(),
            None => {
                let client = Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .expect("failed to build HTTP client");
                *slot = Some(client.clone());
                client
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a prepared request, attaching the bearer token when installed.
    ///
    /// Non-success statuses are mapped to [`PrintrackError::Api`] with the
    /// response body as the message, so backend error text survives.
    fn send(&self, req: RequestBuilder) -> Result<String> {
        let req = match self.token.borrow().as_deref() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req.send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(PrintrackError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }

    /// GET `path` with the given query pairs and deserialize the body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let body = self.send(self.client().get(&url).query(query))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a JSON array of `T`.
    pub fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        self.get_json(path, query)
    }

    /// GET a JSON array of `T`, degrading every failure to an empty `Vec`.
    ///
    /// Transport errors, non-success statuses, and malformed or non-array
    /// bodies all collapse to `vec![]`. This is the failure contract of the
    /// statistics path: the aggregation layer only ever sees collections.
    pub fn get_list_or_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Vec<T> {
        match self.get_list(path, query) {
            Ok(items) => items,
            Err(e) => {
                warn!("GET {} failed, treating as empty: {}", path, e);
                Vec::new()
            }
        }
    }

    /// POST `body` as JSON to `path` and deserialize the response.
    pub fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);
        let resp = self.send(self.client().post(&url).json(body))?;
        Ok(serde_json::from_str(&resp)?)
    }

    /// PUT `body` as JSON to `path`, ignoring the response body.
    pub fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<()> {
        let url = self.url(path);
        debug!("PUT {}", url);
        self.send(self.client().put(&url).query(query).json(body))?;
        Ok(())
    }

    /// DELETE `path` with the given query pairs.
    pub fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        self.send(self.client().delete(&url).query(query))?;
        Ok(())
    }
}
