use std::time::Duration;

use reqwest::{
    Client,
    Response,
};

use crate::core::{
    ApiError,
    TasteMapError,
};

const USER_AGENT: &str = concat!("tastemap/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

/// Shared HTTP client. The cookie store carries the backend session between calls.
pub fn http_client(timeout: Duration) -> Result<Client, TasteMapError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .build()
        .map_err(|e| TasteMapError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn ensure_success(resp: &Response) -> Result<(), ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Status { code: resp.status().as_u16(), url: resp.url().to_string() });
    }
    Ok(())
}
