//! HTML backend.
//! Rebuilds the whole `#launcher` container from the tile list on every call.
//! Entry tiles with a target are anchors opening in a new context with `noopener noreferrer`,
//! so click and Enter behave the same without any script.
//! Every configuration string passes through `escape_html` before it lands in markup.

use crate::text::escape_html;
use crate::tiles::{DEFAULT_LINK_GLYPH, Tile, TileIcon};

pub const CONTAINER_ID: &str = "launcher";
const ICON_SIZE_PX: u32 = 46;
const ICON_RADIUS_PX: u32 = 8;

const PAGE_STYLE: &str = r#"
:root { color-scheme: dark; }
body {
  margin: 0;
  min-height: 100vh;
  background: radial-gradient(circle at top, #1b1035, #07060d 70%);
  color: #e8e6ff;
  font-family: system-ui, sans-serif;
}
#launcher {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  gap: 18px;
  padding: 32px;
}
.tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 8px;
  padding: 18px 12px;
  border-radius: 14px;
  background: rgba(255, 255, 255, 0.04);
  border: 1px solid rgba(140, 110, 255, 0.35);
  box-shadow: 0 0 12px rgba(140, 110, 255, 0.25);
  color: inherit;
  text-decoration: none;
  cursor: pointer;
  outline: none;
}
.tile:hover, .tile:focus {
  border-color: #00f0ff;
  box-shadow: 0 0 18px rgba(0, 240, 255, 0.55);
}
.icon { font-size: 34px; line-height: 46px; height: 46px; }
.title {
  font-weight: 600;
  text-align: center;
  overflow: hidden;
  text-overflow: ellipsis;
  max-width: 100%;
  white-space: nowrap;
}
.meta { font-size: 12px; opacity: 0.6; overflow-wrap: anywhere; text-align: center; }
"#;


// *************** Public API ***************

/// Only the container element and its tiles.
pub fn render_container(tiles: &[Tile]) -> String {
    let mut out = format!("<div id=\"{}\">\n", CONTAINER_ID);
    for tile in tiles {
        out.push_str(&render_tile(tile));
        out.push('\n');
    }
    out.push_str("</div>\n");
    out
}

/// A standalone page wrapping the container.
pub fn render_page(tiles: &[Tile]) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Launcher</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        PAGE_STYLE,
        render_container(tiles)
    )
}


// *************** Internal Functions ***************

fn render_tile(tile: &Tile) -> String {
    let tooltip = match tile.tooltip() {
        Some(text) => format!(" title=\"{}\"", escape_html(text)),
        None => String::new(),
    };
    let body = format!(
        "<div class=\"icon\">{}</div><div class=\"title\"{}>{}</div><div class=\"meta\">{}</div>",
        render_icon(&tile.icon),
        tooltip,
        escape_html(&tile.title),
        escape_html(&tile.meta)
    );

    let mut attrs = String::from("class=\"tile\"");
    if tile.is_focusable() {
        attrs.push_str(" tabindex=\"0\"");
    }
    if let Some(opacity) = tile.opacity() {
        attrs.push_str(&format!(" style=\"opacity:{}\"", opacity));
    }

    match tile.target.as_deref() {
        Some(target) if !target.is_empty() => format!(
            "<a {} href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            attrs,
            escape_html(target),
            body
        ),
        _ => format!("<div {}>{}</div>", attrs, body),
    }
}

fn render_icon(icon: &TileIcon) -> String {
    match icon {
        TileIcon::Image { src } => format!(
            "<img src=\"{}\" alt=\"\" style=\"width:{size}px;height:{size}px;\
             border-radius:{radius}px;object-fit:cover\">",
            escape_html(src),
            size = ICON_SIZE_PX,
            radius = ICON_RADIUS_PX
        ),
        TileIcon::Glyph(text) => escape_html(text),
        TileIcon::Default => DEFAULT_LINK_GLYPH.to_string(),
    }
}

// *************** Tests ***************
