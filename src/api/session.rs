use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use super::{
    read_ack,
    AckRule,
    ApiClient,
    WriteAck,
};
use crate::core::{
    models::{
        Credentials,
        SessionUser,
    },
    ApiError,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionStatus {
    #[serde(default)]
    is_authenticated: bool,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default, rename = "resultCode")]
    result_code: Option<String>,
    #[serde(default)]
    msg: Option<Value>,
    #[serde(default)]
    user: Option<SessionUser>,
}

impl ApiClient {
    pub async fn check_session(&self) -> Result<bool, ApiError> {
        let status: SessionStatus = self.get_json("check-session", &[]).await?;
        Ok(status.is_authenticated)
    }

    /// On success the backend sets the session cookie on the shared client.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionUser, ApiError> {
        let resp = self.send(self.request(Method::POST, "login").json(credentials)).await?;
        let bytes = resp.bytes().await?;
        let login: LoginResponse = serde_json::from_slice(&bytes)?;

        WriteAck { result_code: login.result_code, msg: login.msg }.check(AckRule::Status)?;

        let mut user = login.user.unwrap_or_default();
        if user.email.is_empty() {
            user.email = credentials.email.clone();
        }
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let resp = self.send(self.request(Method::POST, "logout")).await?;
        read_ack(resp).await?.check(AckRule::Status)?;
        Ok(())
    }
}
