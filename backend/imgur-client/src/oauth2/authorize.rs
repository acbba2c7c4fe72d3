use models::OAuth2ResponseType;

use url::Url;
use url::form_urlencoded::byte_serialize;

const AUTHORIZE_ENDPOINT: &str = "authorize";

/// URL the user opens to grant this application access to their account.
///
/// `state` is echoed back by Imgur on redirect; when absent the parameter is
/// still sent, empty.
pub fn authorization_url(
    oauth_base_url: &Url,
    client_id: &str,
    response_type: OAuth2ResponseType,
    state: Option<&str>,
) -> String {
    let client_id: String = byte_serialize(client_id.as_bytes()).collect();
    let state: String = byte_serialize(state.unwrap_or_default().as_bytes()).collect();

    let base = with_trailing_slash(oauth_base_url);

    format!(
        "{base}{AUTHORIZE_ENDPOINT}?client_id={client_id}&response_type={response_type}&state={state}",
        response_type = response_type.as_str(),
    )
}

/// `base` as a directory, so relative endpoints resolve beneath it.
///
/// `Url::join` and plain concatenation both drop or glue the last segment of
/// `https://api.imgur.com/oauth2` otherwise.
pub(crate) fn with_trailing_slash(base: &Url) -> Url {
    let mut url = base.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
