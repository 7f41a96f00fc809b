// SPDX-License-Identifier: MPL-2.0
//! Gallery settings resolved once at construction.
//!
//! The original storefront read these from data attributes on the gallery
//! element; here they live in a TOML file loaded at startup, with the same
//! fallback values. Settings are immutable after the gallery is built.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Settings};
//!
//! let settings = config::load().unwrap_or_default();
//! assert!(settings.desktop.slides_per_view >= 1);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fallback slide spacing per breakpoint, in pixels.
pub const DEFAULT_DESKTOP_SPACE: f32 = 20.0;
pub const DEFAULT_TABLET_SPACE: f32 = 15.0;
pub const DEFAULT_MOBILE_SPACE: f32 = 10.0;

const CONFIG_FILE: &str = "gallery.toml";

/// Per-breakpoint layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointSettings {
    /// Number of slides simultaneously visible. Always at least 1.
    pub slides_per_view: u32,
    /// Horizontal gap between adjacent slides, in pixels. Never negative.
    pub space_between: f32,
}

impl BreakpointSettings {
    /// Creates breakpoint settings, clamping out-of-range values.
    #[must_use]
    pub fn new(slides_per_view: u32, space_between: f32) -> Self {
        Self {
            slides_per_view: slides_per_view.max(1),
            space_between: space_between.max(0.0),
        }
    }
}

/// Immutable gallery configuration, resolved once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub desktop: BreakpointSettings,
    pub tablet: BreakpointSettings,
    pub mobile: BreakpointSettings,
    #[serde(default = "default_true")]
    pub enable_pagination: bool,
    #[serde(default = "default_true")]
    pub enable_navigation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            desktop: BreakpointSettings::new(1, DEFAULT_DESKTOP_SPACE),
            tablet: BreakpointSettings::new(1, DEFAULT_TABLET_SPACE),
            mobile: BreakpointSettings::new(1, DEFAULT_MOBILE_SPACE),
            enable_pagination: true,
            enable_navigation: true,
        }
    }
}

impl Settings {
    /// Returns a copy with every breakpoint forced back into its valid
    /// range, so hand-edited config files cannot produce a zero-wide view.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            desktop: BreakpointSettings::new(
                self.desktop.slides_per_view,
                self.desktop.space_between,
            ),
            tablet: BreakpointSettings::new(self.tablet.slides_per_view, self.tablet.space_between),
            mobile: BreakpointSettings::new(self.mobile.slides_per_view, self.mobile.space_between),
            ..*self
        }
    }
}

/// Loads settings from `gallery.toml` in the working directory, falling
/// back to defaults when the file does not exist.
pub fn load() -> Result<Settings> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        return load_from_path(path);
    }
    Ok(Settings::default())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings.normalized())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
