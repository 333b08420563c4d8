//! The static document catalog and its mapping to desk folder elements.

use fnv::FnvHashMap;
use paper_core::config::{PageArt, PaperDoc, ViewMode};
use paper_core::hotspot::{Hotspot, HotspotAction};

/// Desk folder element id -> document id.
pub const FOLDER_DOCS: &[(&str, &str)] = &[
    ("folder-personal", "personal"),
    ("folder-professional", "professional"),
    ("folder-projects", "projects"),
    ("folder-sketchbook", "sketchbook"),
];

/// All documents, validated by the caller before use.
pub fn documents() -> FnvHashMap<String, PaperDoc> {
    let mut docs = FnvHashMap::default();
    docs.insert("personal".to_string(), personal());
    docs.insert("professional".to_string(), professional());
    docs.insert("projects".to_string(), projects());
    docs.insert("sketchbook".to_string(), sketchbook());
    docs
}

fn personal() -> PaperDoc {
    let mut doc = PaperDoc::single(PageArt::new(
        "assets/personal-front.webp",
        Some("assets/personal-back.webp"),
        "Personal page",
    ));
    doc.hotspots = vec![
        Hotspot {
            top_pct: 12.0,
            left_pct: 58.0,
            width_pct: 30.0,
            height_pct: 22.0,
            rotation_deg: -4.0,
            action: HotspotAction::Photo {
                photo: "holiday".to_string(),
            },
            title: "Holiday photo".to_string(),
        },
        Hotspot {
            top_pct: 70.0,
            left_pct: 10.0,
            width_pct: 26.0,
            height_pct: 8.0,
            rotation_deg: 2.0,
            action: HotspotAction::Link {
                href: "https://www.strava.com/".to_string(),
            },
            title: "Running log".to_string(),
        },
    ];
    doc.photos.insert(
        "holiday".to_string(),
        PageArt::new("assets/photo-holiday.webp", None, "Holiday snapshot"),
    );
    doc
}

fn professional() -> PaperDoc {
    let mut doc = PaperDoc::single(PageArt::new(
        "assets/professional-front.webp",
        Some("assets/professional-back.webp"),
        "Professional page",
    ));
    doc.hotspots = vec![
        Hotspot {
            top_pct: 8.0,
            left_pct: 8.0,
            width_pct: 34.0,
            height_pct: 10.0,
            rotation_deg: 0.0,
            action: HotspotAction::Link {
                href: "https://github.com/".to_string(),
            },
            title: "GitHub".to_string(),
        },
        Hotspot {
            top_pct: 22.0,
            left_pct: 8.0,
            width_pct: 34.0,
            height_pct: 10.0,
            rotation_deg: 0.0,
            action: HotspotAction::Link {
                href: "https://www.linkedin.com/".to_string(),
            },
            title: "LinkedIn".to_string(),
        },
    ];
    doc
}

fn projects() -> PaperDoc {
    let mut doc = PaperDoc::single(PageArt::new(
        "assets/projects-1-front.webp",
        Some("assets/projects-1-back.webp"),
        "Projects, page one",
    ));
    doc.pages.insert(
        2,
        PageArt::new(
            "assets/projects-2-front.webp",
            Some("assets/projects-2-back.webp"),
            "Projects, page two",
        ),
    );
    doc
}

fn sketchbook() -> PaperDoc {
    let mut doc = PaperDoc::single(PageArt::new(
        "assets/sketch-cover.webp",
        Some("assets/sketch-cover-inside.webp"),
        "Sketchbook cover",
    ));
    doc.pages.insert(
        2,
        PageArt::new("assets/sketch-inside.webp", None, "Sketchbook inside page"),
    );
    doc.view_mode = ViewMode::FlipBook;
    doc
}
