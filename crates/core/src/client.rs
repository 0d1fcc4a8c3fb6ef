//! Request construction and response handling for the Typekit API.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::{ClientConfig, SUCCESS_STATUSES},
    error::{Error, Result},
    transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport},
    types::ErrorEnvelope,
};

/// Typekit API client.
///
/// Generic over the [`Transport`] so the HTTP exchange can be replaced.
#[derive(Debug)]
pub struct Client<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Make a request and return the parsed response envelope.
    ///
    /// `form` is only sent for [`Method::Post`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Parse`] when the body is not JSON, and with
    /// [`Error::Api`] (or [`Error::UnexpectedStatus`] when the body has no
    /// `errors`) for any status other than 200 and 302.
    pub fn request(&self, method: Method, path: &str, form: &[(&str, &str)]) -> Result<Value> {
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            token: self.config.token.clone(),
            form: match method {
                Method::Post => form
                    .iter()
                    .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                    .collect(),
                _ => Vec::new(),
            },
        };

        self.trace(format_args!("making {method} request to {}", request.url));
        if method == Method::Post {
            self.trace(format_args!("  post data is {}", encode_form(&request.form)));
        }

        let response = self.transport.send(&request)?;
        self.trace(format_args!("  response is {} {}", response.status, response.body));

        parse_response(response)
    }

    /// [`Client::request`] decoded into a typed envelope.
    pub(crate) fn request_as<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<R> {
        let value = self.request(method, path, form)?;
        serde_json::from_value(value).map_err(Error::Decode)
    }

    fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.config.debug {
            debug!("{message}");
        }
    }
}

fn parse_response(response: ApiResponse) -> Result<Value> {
    let ApiResponse { status, body } = response;

    let data = if body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(source) => return Err(Error::Parse { body, source }),
        }
    };

    if SUCCESS_STATUSES.contains(&status) {
        return Ok(data);
    }

    match serde_json::from_value::<ErrorEnvelope>(data) {
        Ok(envelope) if !envelope.errors.is_empty() => Err(Error::Api {
            status,
            errors: envelope.errors,
        }),
        _ => Err(Error::UnexpectedStatus { status, body }),
    }
}

/// Form body exactly as `reqwest` puts it on the wire.
fn encode_form(form: &[(String, String)]) -> String {
    serde_urlencoded::to_string(form).unwrap_or_else(|e| format!("<unencodable: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        let value = parse_response(ApiResponse::new(200, r#"{"kits": []}"#)).unwrap();
        assert_eq!(value["kits"], Value::Array(vec![]));
        assert!(parse_response(ApiResponse::new(302, "{}")).is_ok());
    }

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(parse_response(ApiResponse::new(200, "")).unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_token() {
        let err = parse_response(ApiResponse::new(401, r#"{"errors": ["Invalid token"]}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid token");
        assert!(matches!(err, Error::Api { status: 401, .. }));
    }

    #[test]
    fn test_parse_error_keeps_body() {
        let err = parse_response(ApiResponse::new(200, "<html>oops</html>")).unwrap_err();
        match err {
            Error::Parse { body, .. } => assert_eq!(body, "<html>oops</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_errors() {
        let err = parse_response(ApiResponse::new(500, r#"{"message": "boom"}"#)).unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus { status: 500, .. }));

        let err = parse_response(ApiResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
    }

    #[test]
    fn test_encode_form() {
        let form = vec![
            ("name".to_owned(), "My Kit".to_owned()),
            ("domains".to_owned(), "a.com,b=c".to_owned()),
        ];
        assert_eq!(encode_form(&form), "name=My+Kit&domains=a.com%2Cb%3Dc");
    }

    #[test]
    fn test_encode_form_matches_wire_encoding() {
        let form = vec![("name".to_owned(), "My Kit+é".to_owned())];
        assert_eq!(encode_form(&form), "name=My+Kit%2B%C3%A9");
    }
}
