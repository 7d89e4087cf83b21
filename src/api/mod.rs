//! Client for the restaurant backend's REST JSON API.
//!
//! Collections come wrapped as `{ "data": [...] }` (review lists use
//! `{ "reviews": [...] }`), writes are acknowledged with
//! `{ "resultCode": "S-1", "msg": ... }` and session checks answer
//! `{ "isAuthenticated": bool }`. Identity travels in the session cookie held
//! by the shared [`reqwest::Client`].

use reqwest::{
    Client,
    Method,
    RequestBuilder,
    Response,
};
use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};
use serde_json::Value;
use tracing::debug;

use crate::core::{
    http::{
        ensure_success,
        http_client,
    },
    ApiError,
    Settings,
    TasteMapError,
};

pub mod posts;
pub mod restaurants;
pub mod reviews;
pub mod session;

#[derive(Debug, Deserialize)]
pub struct Collection<T> {
    #[serde(default = "Vec::new", alias = "reviews")]
    pub data: Vec<T>,
}

/// Code the backend sends for an accepted write.
pub const SUCCESS_CODE: &str = "S-1";

/// How strictly a write acknowledgement is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckRule {
    /// Endpoints judged by HTTP status. The body may be empty or carry no
    /// code, but a code other than `S-1` is still a rejection.
    Status,
    /// The body must carry `resultCode: "S-1"`.
    Code,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct WriteAck {
    #[serde(default, rename = "resultCode")]
    pub result_code: Option<String>,
    // Plain text on most endpoints, an object of field errors on some
    #[serde(default)]
    pub msg: Option<Value>,
}

impl WriteAck {
    pub fn message(&self) -> Option<String> {
        match self.msg.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn check(self, rule: AckRule) -> Result<WriteAck, ApiError> {
        match (self.result_code.as_deref(), rule) {
            (Some(SUCCESS_CODE), _) | (None, AckRule::Status) => Ok(self),
            (Some(code), _) => Err(ApiError::Rejected {
                result_code: code.to_string(),
                message: self.message(),
            }),
            (None, AckRule::Code) => {
                Err(ApiError::Decode("write acknowledgement has no resultCode".to_string()))
            }
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TasteMapError> {
        let http = http_client(settings.http_timeout())?;
        Ok(Self::new(settings.api_base_url.clone(), http))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{method} {url}");
        self.http.request(method, url)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await?;
        ensure_success(&resp)?;
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let resp = self.send(self.request(Method::GET, path).query(query)).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let collection: Collection<T> = self.get_json(path, query).await?;
        Ok(collection.data)
    }

    async fn write<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        rule: AckRule,
    ) -> Result<WriteAck, ApiError> {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let resp = self.send(builder).await?;
        read_ack(resp).await?.check(rule)
    }
}

/// An empty body is an empty acknowledgement. Anything else must parse as one.
async fn read_ack(resp: Response) -> Result<WriteAck, ApiError> {
    let bytes = resp.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(WriteAck::default());
    }
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ApiErrorKind;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:9000/api/v1/", Client::new());
        assert_eq!(client.base_url(), "http://localhost:9000/api/v1");
        assert_eq!(client.url("/reviews/3"), "http://localhost:9000/api/v1/reviews/3");
        assert_eq!(client.url("restaurants"), "http://localhost:9000/api/v1/restaurants");
    }

    #[test]
    fn test_collection_envelopes() {
        let data: Collection<u32> = serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
        assert_eq!(data.data, vec![1, 2]);

        let reviews: Collection<u32> = serde_json::from_str(r#"{"reviews": [3]}"#).unwrap();
        assert_eq!(reviews.data, vec![3]);

        let empty: Collection<u32> = serde_json::from_str(r#"{"msg": "nothing"}"#).unwrap();
        assert!(empty.data.is_empty());
    }

    fn ack(json: &str) -> WriteAck {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ack_codes() {
        let ok = ack(r#"{"resultCode": "S-1", "msg": "saved"}"#);
        assert!(ok.clone().check(AckRule::Code).is_ok());
        assert!(ok.check(AckRule::Status).is_ok());

        let failed = ack(r#"{"resultCode": "F-1", "msg": "title missing"}"#);
        let rejected = Err(ApiError::Rejected {
            result_code: "F-1".to_string(),
            message: Some("title missing".to_string()),
        });
        assert_eq!(failed.clone().check(AckRule::Code), rejected);
        assert_eq!(failed.check(AckRule::Status), rejected);

        // Only S-1 counts, not every S- prefix
        let other = ack(r#"{"resultCode": "S-2"}"#);
        assert_eq!(other.check(AckRule::Status).map_err(|e| e.kind()), Err(ApiErrorKind::Rejected));
    }

    #[test]
    fn test_missing_code_depends_on_rule() {
        assert!(WriteAck::default().check(AckRule::Status).is_ok());

        let silent = ack(r#"{"msg": "done"}"#);
        assert!(silent.clone().check(AckRule::Status).is_ok());
        assert_eq!(silent.check(AckRule::Code).map_err(|e| e.kind()), Err(ApiErrorKind::Decode));
    }

    #[test]
    fn test_structured_rejection_message() {
        let failed = ack(r#"{"resultCode": "F-1", "msg": {"field": "post_title"}}"#);
        match failed.check(AckRule::Code) {
            Err(ApiError::Rejected { result_code, message }) => {
                assert_eq!(result_code, "F-1");
                assert_eq!(message.as_deref(), Some(r#"{"field":"post_title"}"#));
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
    }
}
