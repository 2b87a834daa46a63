use std::path::PathBuf;

use serde::Serialize;

/// Progress of the units downloading run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Update {
    RequestingListing {
        uri: String
    },

    ListingFetched {
        count: usize
    },

    RequestingUnit {
        id: String,
        uri: String
    },

    UnitWritten {
        id: String,
        path: PathBuf
    },

    UnitFailed {
        id: String,
        reason: String
    }
}

impl Update {
    /// URI this update is about, if any
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::RequestingListing { uri } |
            Self::RequestingUnit { uri, .. } => Some(uri.as_str()),

            _ => None
        }
    }

    /// Human-readable progress line printed to the console
    /// 
    /// Return `None` for updates not meant to be printed
    pub fn console_line(&self) -> Option<String> {
        match self {
            Self::RequestingListing { uri } |
            Self::RequestingUnit { uri, .. } => Some(format!("Requesting: {uri}")),

            Self::UnitFailed { id, reason } => Some(format!("Failed to retrieve data for {id}. ({reason})")),

            _ => None
        }
    }
}
