//! Render facade - dispatches the tile list to one backend.
//! - **Html**: writes a page (or just the `#launcher` container) to a file or stdout
//! - **Pick**: interactive terminal picker that opens the chosen tile
//!
//! Exactly one backend runs per load.

pub mod html;
pub mod terminal;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::navigate::Navigator;
use crate::tiles::Tile;

/// Which backend draws the tiles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Static HTML (default)
    #[default]
    Html,
    /// Terminal picker
    Pick,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Html => write!(f, "html"),
            RenderMode::Pick => write!(f, "pick"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(RenderMode::Html),
            "pick" => Ok(RenderMode::Pick),
            other => anyhow::bail!("Unknown render mode '{}' (expected html or pick)", other),
        }
    }
}

/// Options for the HTML backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlOptions<'a> {
    pub output: Option<&'a Path>,
    pub fragment: bool,
}

/// Writes the HTML for `tiles`. A file is replaced whole; without one the markup goes to stdout.
pub fn write_html(tiles: &[Tile], options: HtmlOptions<'_>) -> Result<()> {
    let markup = if options.fragment {
        html::render_container(tiles)
    } else {
        html::render_page(tiles)
    };

    match options.output {
        Some(path) => std::fs::write(path, markup)
            .with_context(|| format!("Failed to write launcher page: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(markup.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write launcher page to stdout")
        }
    }
}

/// Main entry point for drawing tiles.
pub fn render(
    tiles: &[Tile],
    mode: RenderMode,
    options: HtmlOptions<'_>,
    navigator: &dyn Navigator,
) -> Result<()> {
    match mode {
        RenderMode::Html => write_html(tiles, options),
        RenderMode::Pick => terminal::run_picker(tiles, navigator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LauncherState;
    use crate::navigate::SystemNavigator;
    use crate::tiles::build;

    #[test]
    fn test_render_mode_display() {
        assert_eq!(format!("{}", RenderMode::Html), "html");
        assert_eq!(format!("{}", RenderMode::Pick), "pick");
    }

    #[test]
    fn test_render_mode_default() {
        assert_eq!(RenderMode::default(), RenderMode::Html);
    }

    #[test]
    fn test_render_mode_from_str() {
        assert_eq!("HTML".parse::<RenderMode>().unwrap(), RenderMode::Html);
        assert_eq!("pick".parse::<RenderMode>().unwrap(), RenderMode::Pick);
        assert!("gtk".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_write_html_replaces_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "stale").unwrap();

        let tiles = build(&LauncherState::empty());
        let options = HtmlOptions { output: Some(&path), fragment: true };
        render(&tiles, RenderMode::Html, options, &SystemNavigator).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, html::render_container(&tiles));
    }

    #[test]
    fn test_write_html_full_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let tiles = build(&LauncherState::empty());
        write_html(&tiles, HtmlOptions { output: Some(&path), fragment: false }).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_write_html_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");
        let tiles = build(&LauncherState::empty());
        let options = HtmlOptions { output: Some(&path), fragment: true };
        let err = write_html(&tiles, options).unwrap_err();
        assert!(err.to_string().contains("Failed to write launcher page"));
    }
}
