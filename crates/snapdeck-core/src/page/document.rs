use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::pager::{is_section_id, PagerWidget, SectionList, WidgetItem};
use crate::{Error, Result};

const DEMO_PAGE: &str = include_str!("../../assets/demo.toml");

/// A landing page: header data plus an ordered stack of blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub languages: Vec<LanguageLink>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Explicit side pager links; one per section when empty
    #[serde(default)]
    pub pager: Vec<PagerLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Absolute URL that relative language links are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            base_url: None,
        }
    }
}

fn default_brand() -> String {
    "snapdeck".to_string()
}

/// Header language selector entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLink {
    pub label: String,
    pub href: String,
    /// Language of the current page
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerLink {
    pub label: String,
    pub href: String,
}

/// Background of a block; decides text colours in the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    Dark,
    #[default]
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMotion {
    Float,
    Rotate,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub glyph: String,
    #[serde(default)]
    pub motion: IconMotion,
}

/// One region of the page. Blocks with a `p<digits>` id are pager sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Quote text animated character by character
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub backdrop: Backdrop,
    /// Fixed height in host units; a full viewport when absent
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub icons: Vec<Icon>,
    /// Animate the block body in when it scrolls into view
    #[serde(default = "default_true")]
    pub reveal: bool,
}

fn default_true() -> bool {
    true
}

impl Block {
    pub fn is_section(&self) -> bool {
        is_section_id(&self.id)
    }
}

impl PageDocument {
    /// Parse and validate a TOML page document
    pub fn parse(content: &str) -> Result<Self> {
        let page: PageDocument =
            toml::from_str(content).map_err(|e| Error::PageParse(e.to_string()))?;
        page.validate()?;
        Ok(page)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Built-in nine-section demo page
    pub fn demo() -> Result<Self> {
        Self::parse(DEMO_PAGE)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for block in &self.blocks {
            if block.id.trim().is_empty() {
                return Err(Error::InvalidPage("block with empty id".to_string()));
            }
            if !seen.insert(block.id.as_str()) {
                return Err(Error::InvalidPage(format!("duplicate block id '{}'", block.id)));
            }
        }

        let quotes = self.blocks.iter().filter(|b| b.quote.is_some()).count();
        if quotes > 1 {
            return Err(Error::InvalidPage(format!(
                "{} blocks carry a quote, at most one is allowed",
                quotes
            )));
        }

        if let Some(base) = &self.site.base_url {
            Url::parse(base).map_err(|e| Error::InvalidLink {
                href: base.clone(),
                reason: format!("site base_url must be absolute: {}", e),
            })?;
        }
        for link in &self.languages {
            validate_href(&link.href)?;
        }

        let sections = self.section_list();
        for link in &self.pager {
            let resolves = link
                .href
                .strip_prefix('#')
                .is_some_and(|id| sections.index_of(id).is_some());
            if !resolves {
                warn!("Pager link '{}' does not point at a section", link.href);
            }
        }

        Ok(())
    }

    /// Absolute URL for a link href. Relative references need `site.base_url`.
    pub fn resolve_link(&self, href: &str) -> Result<Url> {
        match Url::parse(href) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.site.base_url.as_deref().ok_or_else(|| Error::InvalidLink {
                    href: href.to_string(),
                    reason: "relative link without a site base_url".to_string(),
                })?;
                Url::parse(base)
                    .and_then(|base| base.join(href))
                    .map_err(|e| Error::InvalidLink {
                        href: href.to_string(),
                        reason: e.to_string(),
                    })
            }
            Err(e) => Err(Error::InvalidLink {
                href: href.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Identifiers of every block, in document order
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.id.as_str())
    }

    pub fn section_list(&self) -> SectionList {
        SectionList::collect(self.element_ids())
    }

    pub fn pager_widget(&self) -> PagerWidget {
        if self.pager.is_empty() {
            PagerWidget::for_sections(&self.section_list())
        } else {
            PagerWidget::new(
                self.pager
                    .iter()
                    .map(|link| WidgetItem::new(link.href.clone(), link.label.clone()))
                    .collect(),
            )
        }
    }

    /// Index and text of the block holding the quote
    pub fn quote(&self) -> Option<(usize, &str)> {
        self.blocks
            .iter()
            .enumerate()
            .find_map(|(idx, b)| b.quote.as_deref().map(|q| (idx, q)))
    }

    pub fn block_index(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }
}

/// Accept absolute URLs and relative references; reject anything unparsable
fn validate_href(href: &str) -> Result<()> {
    if href.trim().is_empty() {
        return Err(Error::InvalidLink {
            href: href.to_string(),
            reason: "empty link".to_string(),
        });
    }
    match Url::parse(href) {
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(e) => Err(Error::InvalidLink {
            href: href.to_string(),
            reason: e.to_string(),
        }),
    }
}
