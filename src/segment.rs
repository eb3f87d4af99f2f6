// src/segment.rs
//! Detail-page segmentation.
//!
//! Detail pages carry no queryable schema for their prose, so regions are found
//! by literal sentinels in block text. A spell page is laid out as:
//!
//! ```text
//! [0, 9)        header: name, source, school, casting table, separators
//! [9, i)        description
//! [i, ..)       trailer: "At Higher Levels ..." and/or "Spell Lists ..."
//! ```
//!
//! where `i` is the first block at or after 9 whose text contains a sentinel.
//! With no sentinel the description runs to the end and the trailer is empty.

use crate::core::html::Block;
use crate::core::sanitize::{sanitize_text, title_case};
use crate::entity::enums::ClassType;

/// Header/metadata blocks at the top of a spell page.
pub const HEADER_BLOCKS: usize = 9;
pub const UPCAST_SENTINEL: &str = "At Higher Levels";
pub const CLASSES_SENTINEL: &str = "Spell Lists";
pub const SPELL_SENTINELS: &[&str] = &[UPCAST_SENTINEL, CLASSES_SENTINEL];

const COMPONENTS_LABEL: &str = "Components:";
const PREREQUISITE: &str = "prerequisite";
const SOURCE_LABEL: &str = "source:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Description,
    Trailer,
}

/// Two-state scan. Moves from `Description` to `Trailer` on the first block
/// containing any sentinel and stays there.
pub struct RegionScanner<'s> {
    sentinels: &'s [&'s str],
    region: Region,
}

impl<'s> RegionScanner<'s> {
    pub fn new(sentinels: &'s [&'s str]) -> Self {
        Self { sentinels, region: Region::Description }
    }

    pub fn is_boundary(&self, text: &str) -> bool {
        self.sentinels.iter().any(|s| text.contains(s))
    }

    pub fn feed(&mut self, block: &Block) -> Region {
        if self.region == Region::Description && self.is_boundary(&block.text) {
            self.region = Region::Trailer;
        }
        self.region
    }
}

pub struct Regions<'a> {
    pub header: &'a [Block],
    pub description: &'a [Block],
    pub trailer: &'a [Block],
}

/// Split `blocks` after `skip` header blocks using `sentinels`.
pub fn split_regions<'a>(blocks: &'a [Block], skip: usize, sentinels: &[&str]) -> Regions<'a> {
    let skip = skip.min(blocks.len());
    let mut scanner = RegionScanner::new(sentinels);

    let boundary = blocks[skip..]
        .iter()
        .position(|b| scanner.feed(b) == Region::Trailer)
        .map_or(blocks.len(), |i| skip + i);

    Regions {
        header: &blocks[..skip],
        description: &blocks[skip..boundary],
        trailer: &blocks[boundary..],
    }
}

/// Segmented spell detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpellDetail {
    /// Sanitized description blocks, concatenated with no separator.
    pub description: String,
    pub upcast: Option<String>,
    pub classes: Vec<ClassType>,
    /// Parenthesized material text from the header, if any.
    pub material: Option<String>,
}

pub fn segment_spell(blocks: &[Block]) -> SpellDetail {
    let regions = split_regions(blocks, HEADER_BLOCKS, SPELL_SENTINELS);

    let description = regions.description.iter().map(|b| sanitize_text(&b.text)).collect();

    SpellDetail {
        description,
        upcast: extract_upcast(regions.trailer),
        classes: extract_classes(regions.trailer),
        material: extract_material(regions.header),
    }
}

/// Strip a literal prefix and the `.`/`:` punctuation that follows it.
fn strip_label<'t>(text: &'t str, label: &str) -> Option<&'t str> {
    let rest = text.trim_start().strip_prefix(label)?;
    Some(rest.trim_start_matches(|c: char| c == '.' || c == ':' || c.is_whitespace()).trim_end())
}

/// Only the first trailer block can hold the upcast text.
pub fn extract_upcast(trailer: &[Block]) -> Option<String> {
    let first = trailer.first()?;
    let upcast = strip_label(&first.text, UPCAST_SENTINEL)?;
    if upcast.is_empty() {
        return None;
    }
    Some(sanitize_text(upcast))
}

/// Class lists from every trailer block starting with the classes sentinel,
/// in page order; a class listed twice appears twice.
/// Annotations after a class name ("Wizard (Optional)") are dropped; names that
/// don't resolve are logged and skipped.
pub fn extract_classes(trailer: &[Block]) -> Vec<ClassType> {
    let mut classes = Vec::new();
    for list in trailer.iter().filter_map(|b| strip_label(&b.text, CLASSES_SENTINEL)) {
        for token in list.split(',') {
            let token = token.trim();
            let name = token.split(' ').next().unwrap_or(token);
            if name.is_empty() {
                continue;
            }
            match ClassType::lookup(&title_case(name)) {
                Some(class) => classes.push(class),
                None => log::warn!("unknown class {name:?} in spell list {list:?}"),
            }
        }
    }
    classes
}

/// "Components: V, S, M (a sprig of rosemary)" → "a sprig of rosemary".
pub fn extract_material(header: &[Block]) -> Option<String> {
    let line = header
        .iter()
        .flat_map(|b| b.text.lines())
        .find_map(|l| l.find(COMPONENTS_LABEL).map(|at| &l[at + COMPONENTS_LABEL.len()..]))?;

    let open = line.find('(')?;
    let inner = &line[open + 1..];
    let inner = inner.trim_end();
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    let material = sanitize_text(inner.trim());
    if material.is_empty() { None } else { Some(material) }
}

/// Segmented feat detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatDetail {
    pub prerequisite: Option<String>,
    pub description: String,
}

/// Feat pages: blank blocks and the leading "Source:" line are dropped; a
/// first block mentioning a prerequisite is split off.
pub fn segment_feat(blocks: &[Block]) -> FeatDetail {
    let mut rest: Vec<&Block> = blocks.iter().filter(|b| !b.is_blank()).collect();

    if rest.first().is_some_and(|b| b.text.trim_start().to_lowercase().starts_with(SOURCE_LABEL)) {
        rest.remove(0);
    }

    let mut prerequisite = None;
    if rest.first().is_some_and(|b| b.text.to_lowercase().contains(PREREQUISITE)) {
        let text = rest.remove(0).text.trim();
        if let Some(split) = text.find(' ') {
            let req = sanitize_text(text[split + 1..].trim());
            if !req.is_empty() {
                prerequisite = Some(req);
            }
        }
    }

    let joined = rest.iter().map(|b| b.text.trim()).collect::<Vec<_>>().join("\n");
    FeatDetail { prerequisite, description: sanitize_text(&joined) }
}
