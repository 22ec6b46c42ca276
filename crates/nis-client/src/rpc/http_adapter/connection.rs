use reqwest::Url;

use crate::error::ClientError;

/// Validate a node base URL once, at client construction.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ClientError> {
    let parsed = Url::parse(base_url).map_err(|e| {
        ClientError::Configuration(format!(
            "invalid node url `{base_url}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::Configuration(format!(
                "unsupported node url scheme `{other}`; expected http or https"
            )));
        }
    }
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(ClientError::Configuration(format!(
            "node url `{base_url}` has no host"
        )));
    }
    Ok(parsed)
}
