//! HTTP exchange behind the [`Client`](crate::Client).

use std::fmt;

use reqwest::{blocking, redirect::Policy};

use crate::{
    config::TOKEN_HEADER,
    error::{Error, Result},
};

/// HTTP methods the API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully resolved request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub token: String,
    /// Form fields, sent URL-encoded. Only populated for POST.
    pub form: Vec<(String, String)>,
}

/// Raw status and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one HTTP exchange.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
///
/// Redirects are not followed: the API signals success with 302 as well as 200.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let inner = blocking::Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self { inner })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let transport_error = |source| Error::Transport {
            url: request.url.clone(),
            source,
        };

        let mut builder = self
            .inner
            .request(request.method.into(), &request.url)
            .header(TOKEN_HEADER, &request.token);
        if request.method == Method::Post {
            builder = builder.form(&request.form);
        }

        let response = builder.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;
        Ok(ApiResponse { status, body })
    }
}
