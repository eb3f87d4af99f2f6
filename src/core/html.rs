// src/core/html.rs
//! Element-tree helpers over `scraper`.
//!
//! Pages on the site keep everything of interest inside one content container
//! (`<div id="page-content">`). Detail pages are consumed as the container's
//! direct children, in order, each projected to its text with links already
//! flattened. Whitespace-only text nodes between elements are kept as blocks
//! so positions line up with the page's child list.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// One direct child of the content container, projected to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub text: String,
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// Text content of an element. `<br>` becomes a newline, anchors contribute
/// their inner text.
pub fn element_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    push_text(el, &mut out);
    out
}

fn push_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) if e.name().eq_ignore_ascii_case("br") => out.push('\n'),
            Node::Element(_) => {
                if let Some(inner) = ElementRef::wrap(child) {
                    push_text(inner, out);
                }
            }
            _ => {}
        }
    }
}

fn find_container<'a>(doc: &'a Html, id: &str, url: &str) -> Result<ElementRef<'a>> {
    let sel = selector(&format!("#{id}"))?;
    doc.select(&sel)
        .next()
        .ok_or_else(|| ScrapeError::MissingContent { id: s!(id), url: s!(url) })
}

/// Ordered children of the content container as text blocks.
pub fn content_blocks(page: &str, container_id: &str, url: &str) -> Result<Vec<Block>> {
    let doc = Html::parse_document(page);
    let container = find_container(&doc, container_id, url)?;

    let mut blocks = Vec::new();
    for child in container.children() {
        match child.value() {
            Node::Text(t) => blocks.push(Block::new(&**t)),
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    blocks.push(Block::new(element_text(el)));
                }
            }
            _ => {}
        }
    }
    Ok(blocks)
}

/// Markup of the content container's children, minus scripts and any element
/// carrying one of `skip_classes`.
pub fn content_markup(page: &str, container_id: &str, skip_classes: &[&str], url: &str) -> Result<String> {
    let doc = Html::parse_document(page);
    let container = find_container(&doc, container_id, url)?;

    let mut out = s!();
    for child in container.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                let name = e.name();
                if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                    continue;
                }
                if e.classes().any(|c| skip_classes.contains(&c)) {
                    continue;
                }
                if let Some(el) = ElementRef::wrap(child) {
                    out.push_str(&el.html());
                }
            }
            _ => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
<div id="page-content">
<p>Source: Player's Handbook</p>
<p><strong>Casting Time:</strong> 1 action<br />
<strong>Range:</strong> 150 feet</p>
<p>A bright streak flashes to a <a href="/x">point</a> you choose.</p>
<div class="page-tags"><span>tag</span></div>
<script>var x = 1;</script>
</div>
</body></html>"#;

    #[test]
    fn blocks_keep_whitespace_nodes_and_flatten_links() {
        let blocks = content_blocks(PAGE, "page-content", "test").unwrap();
        // "\n", p, "\n", p, "\n", p, "\n", div, "\n", script, "\n"
        assert_eq!(blocks.len(), 11);
        assert!(blocks[0].is_blank());
        assert_eq!(blocks[1].text, "Source: Player's Handbook");
        assert!(blocks[3].text.contains("1 action\n"));
        assert_eq!(blocks[5].text, "A bright streak flashes to a point you choose.");
    }

    #[test]
    fn missing_container_is_an_error() {
        let err = content_blocks("<html><body><p>x</p></body></html>", "page-content", "u").unwrap_err();
        assert!(err.to_string().contains("page-content"));
    }

    #[test]
    fn markup_skips_scripts_and_tags_block() {
        let html = content_markup(PAGE, "page-content", &["page-tags"], "test").unwrap();
        assert!(html.contains("A bright streak"));
        assert!(!html.contains("var x"));
        assert!(!html.contains("tag</span>"));
    }
}
