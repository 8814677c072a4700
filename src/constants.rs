//! Constants for imglink
//!
//! Magic values, format names, and environment variable names used
//! throughout the codebase.

// === File Names and Extensions ===

/// File extension for Markdown notes (without the dot, as `Path::extension` yields it)
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension assumed for image references that carry none
pub const DEFAULT_IMAGE_EXTENSION: &str = ".png";

/// Filename of the persisted settings record
pub const SETTINGS_FILENAME: &str = ".imglink.json";

// === Environment Variables ===

/// Override for the vault root directory
pub const ENV_VAULT: &str = "IMGLINK_VAULT";

/// Override for the settings file path
pub const ENV_SETTINGS: &str = "IMGLINK_SETTINGS";

// === Settings Defaults ===

/// Default filename prefix for renamed images
pub const DEFAULT_PREFIX: &str = "zd";

/// Default first index assigned in a rename run
pub const DEFAULT_START_INDEX: u32 = 1;

/// Default minimum digit width for the index
pub const DEFAULT_PAD_LENGTH: usize = 3;
