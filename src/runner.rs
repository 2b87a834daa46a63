use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use crate::consts::get_listing_uri;
use crate::listing;
use crate::network::HttpClientExt;
use crate::report::Report;
use crate::units::UnitDownloader;
use crate::updater::Update;

/// Download data of all the units available for given game version
/// 
/// Output folder is created before anything is requested. Failing to fetch
/// the units listing aborts the run, while failed units are only listed in the report
#[tracing::instrument(level = "debug", skip_all, fields(version = version, output_folder = ?output_folder.as_ref()))]
pub fn run(
    client: &impl HttpClientExt,
    version: &str,
    output_folder: impl AsRef<Path>,
    delay: Duration,
    updater: impl Fn(Update)
) -> anyhow::Result<Report> {
    let downloader = UnitDownloader::new(output_folder.as_ref())
        .with_delay(delay);

    downloader.prepare()
        .with_context(|| format!("Failed to create output folder {:?}", downloader.folder()))?;

    (updater)(Update::RequestingListing {
        uri: get_listing_uri(version)
    });

    let ids = listing::fetch_unit_ids(client, version)?;

    tracing::debug!(units = ids.len(), "Units listing fetched");

    (updater)(Update::ListingFetched {
        count: ids.len()
    });

    Ok(downloader.download_all(client, version, &ids, updater))
}
