use serde::{Deserialize, Serialize};

use crate::{constants::CATALOG, runtime::Env};

pub type VideoId = String;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    /// Opaque media location handed to the media element as is.
    pub src: String,
}

impl Video {
    pub fn new<E: Env>(title: &str, src: &str) -> Self {
        Video {
            id: E::new_id(),
            title: title.to_owned(),
            src: src.to_owned(),
        }
    }
}

/// Builds the catalog from [`CATALOG`], assigning a fresh id to every entry.
pub fn default_catalog<E: Env>() -> Vec<Video> {
    CATALOG
        .iter()
        .map(|(title, src)| Video::new::<E>(title, src))
        .collect()
}
