//! Site Settings
//!
//! Fixed resource paths, storage keys and layout thresholds.

/// Site configuration document
pub const CONFIG_PATH: &str = "data/config.json";

/// Blog index document
pub const BLOG_INDEX_PATH: &str = "data/blogs.json";

/// Local storage key holding the last viewed section id
pub const SECTION_STORAGE_KEY: &str = "currentSection";

/// Section the logo link navigates to
pub const DEFAULT_SECTION: &str = "home";

/// Below this viewport width a navigation click also toggles the drawer
pub const DRAWER_BREAKPOINT_PX: f64 = 1200.0;

/// Delay between the preloader fade and its removal
pub const PRELOADER_FADE_MS: u32 = 1000;

/// Filter id that matches every portfolio item
pub const FILTER_ALL: &str = "all";
