//! Document configuration model: per-page art references and hotspot
//! tables, as supplied by the static content layer. Validated once at
//! startup; immutable afterwards.

use crate::hotspot::{Hotspot, HotspotAction};
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("document has no pages")]
    Empty,
    #[error("page numbers must cover 1..={expected}, missing page {missing}")]
    MissingPage { expected: u32, missing: u32 },
    #[error("hotspot '{title}' has coordinates outside 0-100%")]
    HotspotOutOfRange { title: String },
    #[error("hotspot '{title}' has zero extent")]
    HotspotEmpty { title: String },
    #[error("hotspot '{title}' references unknown photo '{photo}'")]
    UnknownPhoto { title: String, photo: String },
}

/// Front/back image references plus alt text for one paper face pair.
/// A missing back image falls back to reusing the front.
#[derive(Clone, Debug)]
pub struct PageArt {
    pub front: String,
    pub back: Option<String>,
    pub alt: String,
}

impl PageArt {
    pub fn new(front: &str, back: Option<&str>, alt: &str) -> Self {
        Self {
            front: front.to_string(),
            back: back.map(str::to_string),
            alt: alt.to_string(),
        }
    }

    pub fn back_or_front(&self) -> &str {
        self.back.as_deref().unwrap_or(&self.front)
    }
}

/// How a document presents its pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Single paper, or a card stack for multi-page documents.
    Stack,
    /// The two-page hinged book.
    FlipBook,
}

/// One openable document: pages keyed by number (1..=N), hotspots for the
/// first page, and the photo art referenced by photo hotspots.
#[derive(Clone, Debug)]
pub struct PaperDoc {
    pub pages: FnvHashMap<u32, PageArt>,
    pub hotspots: Vec<Hotspot>,
    pub photos: FnvHashMap<String, PageArt>,
    pub view_mode: ViewMode,
}

impl PaperDoc {
    pub fn single(art: PageArt) -> Self {
        let mut pages = FnvHashMap::default();
        pages.insert(1, art);
        Self {
            pages,
            hotspots: Vec::new(),
            photos: FnvHashMap::default(),
            view_mode: ViewMode::Stack,
        }
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn page(&self, n: u32) -> Option<&PageArt> {
        self.pages.get(&n)
    }

    pub fn is_multi_page(&self) -> bool {
        self.pages.len() > 1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages.is_empty() {
            return Err(ConfigError::Empty);
        }
        let expected = self.page_count();
        for n in 1..=expected {
            if !self.pages.contains_key(&n) {
                return Err(ConfigError::MissingPage {
                    expected,
                    missing: n,
                });
            }
        }
        for h in &self.hotspots {
            let vals = [h.top_pct, h.left_pct, h.width_pct, h.height_pct];
            if vals.iter().any(|v| !(0.0..=100.0).contains(v)) {
                return Err(ConfigError::HotspotOutOfRange {
                    title: h.title.clone(),
                });
            }
            if h.width_pct <= 0.0 || h.height_pct <= 0.0 {
                return Err(ConfigError::HotspotEmpty {
                    title: h.title.clone(),
                });
            }
            if let HotspotAction::Photo { photo } = &h.action {
                if !self.photos.contains_key(photo) {
                    return Err(ConfigError::UnknownPhoto {
                        title: h.title.clone(),
                        photo: photo.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
