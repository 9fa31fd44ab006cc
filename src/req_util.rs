use serde::de::DeserializeOwned;

use crate::error::{Error, ParseError, Result};

/// GETs `url` and decodes the body as json.
///
/// Non-success statuses are reported as [`Error::Fetch`] before the body is
/// looked at. A body that arrives but is not the expected json is a
/// [`ParseError::Json`].
pub async fn get_json<T: DeserializeOwned>(req_client: &reqwest::Client, url: &str) -> Result<T> {
    let response = req_client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body).map_err(ParseError::from)?)
}
