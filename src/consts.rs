use std::time::Duration;

/// Static assets mirror the unit data is fetched from
pub const MIRROR_URI: &str = "https://raw.communitydragon.org";

/// User agent sent with every request
/// 
/// Mirror doesn't serve automated user agents properly so we pretend to be an old browser
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux i686) AppleWebKit/537.17 (KHTML, like Gecko) Chrome/24.0.1312.27 Safari/537.17";

/// Default name of the folder units data is saved to
pub const DEFAULT_OUTPUT_FOLDER: &str = "unit_data";

/// Default pause between two units requests
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Get URI of the characters listing page for given game version
/// 
/// Version is used as-is, without any validation
#[inline]
pub fn get_listing_uri(version: impl AsRef<str>) -> String {
    format!("{MIRROR_URI}/{}/game/data/characters/", version.as_ref())
}

/// Get URI of the unit's data file for given game version
#[inline]
pub fn get_unit_data_uri(version: impl AsRef<str>, id: impl AsRef<str>) -> String {
    let id = id.as_ref();

    format!("{MIRROR_URI}/{}/game/data/characters/{id}/{id}.bin.json", version.as_ref())
}
