//! JSON-over-HTTP plumbing shared by the remote analyzer and the generator.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;
use wordwisdom_core::{Error, Result};

/// Longest upstream error body kept in `Error::Status`.
const MAX_ERROR_BODY: usize = 500;

/// Send `request` and decode a 2xx JSON body into `T`.
///
/// Transport failures become `Http` or `Timeout`, non-2xx becomes `Status`,
/// and a body that does not match `T` becomes `Payload`.
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder, what: &str) -> Result<T> {
    let response = request.send().await.map_err(|e| transport_error(what, e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!("{} returned {}", what, status);
        return Err(Error::Status {
            status: status.as_u16(),
            body: truncate(body, MAX_ERROR_BODY),
        });
    }

    let bytes = response.bytes().await.map_err(|e| transport_error(what, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::Payload(format!("{}: {}", what, e)))
}

fn transport_error(what: &str, e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(format!("{}: {}", what, e))
    } else {
        Error::Http(format!("{}: {}", what, e))
    }
}

fn truncate(mut s: String, max_chars: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(idx);
    }
    s
}
