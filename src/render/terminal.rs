//! Terminal backend.
//! Draws the tile list as an interactive picker (arrow keys to move, Enter to open).
//! Esc or `q` leaves without opening anything.
//! The empty state is printed as one line; there is nothing to pick from.

use anyhow::{Context, Result};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use crate::navigate::{Navigator, navigate};
use crate::tiles::{DEFAULT_LINK_GLYPH, Tile, TileIcon, TileKind};

const IMAGE_GLYPH: &str = "🖼"; // Terminals can't draw the image itself

/// One picker row: icon, title, shortened url. Control characters from the config are dropped.
pub fn tile_label(tile: &Tile) -> String {
    let icon = match &tile.icon {
        TileIcon::Image { .. } => IMAGE_GLYPH.to_string(),
        TileIcon::Glyph(text) => printable(text),
        TileIcon::Default => DEFAULT_LINK_GLYPH.to_string(),
    };
    let title = printable(&tile.title);
    let meta = printable(&tile.meta);
    if meta.is_empty() {
        format!("{}  {}", icon, title)
    } else {
        format!("{}  {}  ·  {}", icon, title, meta)
    }
}

fn printable(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Runs the picker until the user quits. Each Enter opens the highlighted tile's target.
pub fn run_picker(tiles: &[Tile], navigator: &dyn Navigator) -> Result<()> {
    if tiles.iter().all(|t| t.kind == TileKind::Placeholder) {
        for tile in tiles {
            println!("{}", tile_label(tile));
        }
        return Ok(());
    }

    let labels: Vec<String> = tiles.iter().map(tile_label).collect();
    let theme = ColorfulTheme::default();
    let mut cursor = 0;

    loop {
        let picked = Select::with_theme(&theme)
            .with_prompt("Launch")
            .items(&labels)
            .default(cursor)
            .interact_opt()
            .context("Failed to read selection from terminal")?;

        let Some(index) = picked else {
            return Ok(());
        };
        cursor = index;
        navigate(navigator, tiles[index].target.as_deref());
    }
}
