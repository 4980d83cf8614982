//! Tile builder.
//! Turns a settled `LauncherState` into a flat list of tile descriptions.
//! Backends in `render` draw these; no markup or escaping happens here.

use crate::entry::{LauncherEntry, LauncherState};
use crate::text::{is_absolute_url, pretty_url};

pub const DEFAULT_LINK_GLYPH: &str = "🔗";
pub const EMPTY_GLYPH: &str = "✨";
pub const EMPTY_TITLE: &str = "No items configured";
pub const EMPTY_HINT: &str = "Edit items.json to add links";
pub const EMPTY_OPACITY: f32 = 0.9;

/// What goes in a tile's icon area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileIcon {
    /// Absolute URL to an image, drawn as a cropped rounded square.
    Image { src: String },
    /// Literal text or emoji, drawn as-is.
    Glyph(String),
    /// No icon configured.
    Default,
}

impl TileIcon {
    /// `None` means the field was absent or falsy. A present value that stringifies
    /// to "" (an empty list) stays a blank glyph.
    pub fn from_config(icon: Option<&str>) -> Self {
        match icon {
            None => TileIcon::Default,
            Some(src) if is_absolute_url(src) => TileIcon::Image { src: src.to_string() },
            Some(text) => TileIcon::Glyph(text.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Placeholder,
    Entry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    pub icon: TileIcon,
    pub title: String,
    pub meta: String,
    /// Navigation target; `None` when the entry has no url.
    pub target: Option<String>,
}

impl Tile {
    pub fn placeholder() -> Self {
        Tile {
            kind: TileKind::Placeholder,
            icon: TileIcon::Glyph(EMPTY_GLYPH.to_string()),
            title: EMPTY_TITLE.to_string(),
            meta: EMPTY_HINT.to_string(),
            target: None,
        }
    }

    pub fn from_entry(entry: &LauncherEntry) -> Self {
        let url = entry.url();
        Tile {
            kind: TileKind::Entry,
            icon: TileIcon::from_config(entry.icon().as_deref()),
            title: entry.name().unwrap_or_default(),
            meta: pretty_url(url.as_deref().unwrap_or("")),
            target: url,
        }
    }

    /// Hover text for entry tiles, same as the visible title. The placeholder has none.
    pub fn tooltip(&self) -> Option<&str> {
        match self.kind {
            TileKind::Placeholder => None,
            TileKind::Entry => Some(&self.title),
        }
    }

    /// Entry tiles take keyboard focus; the placeholder does not.
    pub fn is_focusable(&self) -> bool {
        self.kind == TileKind::Entry
    }

    pub fn opacity(&self) -> Option<f32> {
        match self.kind {
            TileKind::Placeholder => Some(EMPTY_OPACITY),
            TileKind::Entry => None,
        }
    }
}

/// One tile per entry in order, or the single placeholder when there are none.
pub fn build(state: &LauncherState) -> Vec<Tile> {
    if state.is_empty() {
        return vec![Tile::placeholder()];
    }
    state.items().iter().map(Tile::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tile_for(raw: serde_json::Value) -> Tile {
        Tile::from_entry(&LauncherEntry::new(raw))
    }

    #[test]
    fn test_build_empty_state_is_single_placeholder() {
        let tiles = build(&LauncherState::empty());
        assert_eq!(tiles.len(), 1);
        let tile = &tiles[0];
        assert_eq!(tile.kind, TileKind::Placeholder);
        assert_eq!(tile.icon, TileIcon::Glyph("✨".to_string()));
        assert_eq!(tile.title, "No items configured");
        assert_eq!(tile.meta, "Edit items.json to add links");
        assert_eq!(tile.target, None);
        assert!(!tile.is_focusable());
        assert_eq!(tile.tooltip(), None);
        assert_eq!(tile.opacity(), Some(0.9));
    }

    #[test]
    fn test_build_one_tile_per_entry_in_order() {
        let state = LauncherState::from_values(vec![
            json!({ "name": "first" }),
            json!({ "name": "second" }),
            json!("not even an object"),
        ]);
        let tiles = build(&state);
        let titles: Vec<&str> = tiles.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", ""]);
        assert!(tiles.iter().all(|t| t.kind == TileKind::Entry && t.is_focusable()));
    }

    #[test]
    fn test_icon_selection() {
        assert_eq!(
            TileIcon::from_config(Some("https://example.com/a.png")),
            TileIcon::Image { src: "https://example.com/a.png".to_string() }
        );
        assert_eq!(TileIcon::from_config(Some("★")), TileIcon::Glyph("★".to_string()));
        assert_eq!(TileIcon::from_config(None), TileIcon::Default);
        assert_eq!(TileIcon::from_config(Some("")), TileIcon::Glyph(String::new()));
    }

    #[test]
    fn test_icon_from_loose_values() {
        assert_eq!(tile_for(json!({ "icon": "" })).icon, TileIcon::Default);
        assert_eq!(tile_for(json!({ "icon": [] })).icon, TileIcon::Glyph(String::new()));
        assert_eq!(
            tile_for(json!({ "icon": {} })).icon,
            TileIcon::Glyph("[object Object]".to_string())
        );
    }

    #[test]
    fn test_entry_tile_fields() {
        let tile = tile_for(json!({
            "name": "Docs",
            "url": "https://example.com/docs",
            "icon": "https://example.com/i.png"
        }));
        assert_eq!(tile.title, "Docs");
        assert_eq!(tile.tooltip(), Some("Docs"));
        assert_eq!(tile.meta, "https://example.com/docs");
        assert_eq!(tile.target.as_deref(), Some("https://example.com/docs"));
        assert_eq!(tile.icon, TileIcon::Image { src: "https://example.com/i.png".to_string() });
        assert_eq!(tile.opacity(), None);
    }

    #[test]
    fn test_long_url_shortened_for_meta_only() {
        let url = "https://example.com/a/very/long/path/that/keeps/going";
        let tile = tile_for(json!({ "name": "Long", "url": url }));
        assert_eq!(tile.meta.chars().count(), 35);
        assert_eq!(tile.target.as_deref(), Some(url));
    }

    #[test]
    fn test_missing_url_has_no_target() {
        let tile = tile_for(json!({ "name": "Nowhere" }));
        assert_eq!(tile.meta, "");
        assert_eq!(tile.target, None);
        assert_eq!(tile.icon, TileIcon::Default);
    }
}
