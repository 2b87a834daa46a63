use regex::Regex;

use crate::consts::get_listing_uri;
use crate::network::HttpClientExt;

lazy_static::lazy_static! {
    /// Matches the mirror's directory entries: `<a href="Ahri/" title="Ahri">Ahri/</a>`
    /// 
    /// This is tied to the exact markup the mirror produces and will silently
    /// find nothing if its formatting changes
    static ref UNIT_PATTERN: Regex = Regex::new(r#"<a href="\w+/" title="\w+">(\w+)/</a>"#).unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch units listing: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to decode units listing: {0}")]
    Decode(#[from] std::string::FromUtf8Error)
}

/// Extract units identifiers from the listing page
/// 
/// Identifiers are returned in order they appear on the page.
/// Duplicates are not removed
pub fn parse_unit_ids(page: impl AsRef<str>) -> Vec<String> {
    UNIT_PATTERN.captures_iter(page.as_ref())
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Fetch list of units available for given game version
#[tracing::instrument(level = "debug", skip(client), ret, err)]
pub fn fetch_unit_ids(client: &impl HttpClientExt, version: &str) -> Result<Vec<String>, Error> {
    let uri = get_listing_uri(version);

    tracing::debug!(%uri, "Fetching units listing");

    let body = client.get(&uri)
        .map_err(|err| Error::Request(Box::new(err)))?;

    Ok(parse_unit_ids(String::from_utf8(body)?))
}
