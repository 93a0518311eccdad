pub mod division;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::settings;

/// Failures of a request to the division API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: gloo_net::Error,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON we expected
    #[error("Failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Common GET request handler. The API answers with bare JSON arrays.
pub async fn get<T>(endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

    if !response.ok() {
        return Err(ApiError::Status {
            url,
            status: response.status(),
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data = response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Decode {
            url: url.clone(),
            source,
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
