pub mod consts;
pub mod network;
pub mod listing;
pub mod units;
pub mod report;
pub mod updater;
pub mod runner;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::network::{HttpClientExt, Client};
    pub use super::listing::{parse_unit_ids, fetch_unit_ids};
    pub use super::units::{fetch_unit, UnitDownloader, UnitOutcome};
    pub use super::report::Report;
    pub use super::updater::Update;
    pub use super::runner::run;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
