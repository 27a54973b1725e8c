//! Shows the saved chart in the platform's default image viewer.

use std::path::Path;
use tracing::{info, warn};

/// Open `path` in the system viewer. A headless machine has no viewer, so a
/// failure here is only logged.
pub fn show(path: &Path) {
    match open::that(path) {
        Ok(()) => info!(path = %path.display(), "opened chart viewer"),
        Err(err) => warn!(path = %path.display(), error = %err, "could not open chart viewer"),
    }
}
