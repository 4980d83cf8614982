//! Navigation.
//! Opens a tile's target in a fresh browsing context via the platform opener.
//! The opened process is detached, so nothing links it back to this program.
//! Empty targets are a silent no-op; scheme and reachability are not checked.

use std::io;
use tracing::{debug, info, warn};

/// Something that can open a target string outside this process.
pub trait Navigator {
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Default browser / URL handler of the desktop session.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&self, target: &str) -> io::Result<()> {
        open::that_detached(target)
    }
}

/// Opens `target` unless it is absent or empty. Returns whether an open was issued.
/// Launch failures are logged and otherwise swallowed.
pub fn navigate(navigator: &dyn Navigator, target: Option<&str>) -> bool {
    let Some(target) = target.filter(|t| !t.is_empty()) else {
        debug!("Tile has no target, ignoring activation");
        return false;
    };

    match navigator.open(target) {
        Ok(()) => {
            info!("Opened {}", target);
            true
        }
        Err(e) => {
            warn!("Failed to open {}: {}", target, e);
            false
        }
    }
}
