// src/entity/feat.rs

use serde::{Deserialize, Serialize};

use crate::core::html::Block;
use crate::core::net::join_url;
use crate::parse::unit_normalize_prose;
use crate::segment::segment_feat;
use super::row::{self, Row};

pub mod keys {
    pub const FEAT_NAME: &str = "Feat Name";
    pub const NAME: &str = "Name";
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feat {
    pub name: String,
    pub description: String,
    pub prerequisite: String,
    pub has_prerequisite: bool,
    pub url: String,
}

impl Feat {
    /// Listing row plus the feat page's content blocks.
    pub fn build(row: &Row, base_url: &str, detail: &[Block]) -> Feat {
        let detail = segment_feat(detail);
        let prerequisite = detail.prerequisite.unwrap_or_default();

        Feat {
            name: s!(row.get_any(&[keys::FEAT_NAME, keys::NAME]).trim()),
            description: unit_normalize_prose(&detail.description),
            has_prerequisite: !prerequisite.is_empty(),
            prerequisite,
            url: join_url(base_url, row.get(row::URL)),
        }
    }
}
