//! Constants for the `sitedraft` application.

use nu_ansi_term::Color;

pub(crate) const SITEDRAFT_CFG_FILE_NAME: &str = ".sitedraft.toml";

pub(crate) const DEFAULT_API_BASE: &str = "https://api.github.com";
pub(crate) const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub(crate) const DEFAULT_SERVER_BASE: &str = "http://localhost:1337";
pub(crate) const DEFAULT_UPLOAD_ROOT: &str = "uploads";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_ROUTE: &str = "repos";
pub(crate) const DEFAULT_ENGINE: &str = "jekyll";

/// Prefix of every draft branch. The remainder of the name is the base64-encoded file path.
pub(crate) const DRAFT_PREFIX: &str = "_draft-";

pub(crate) const SITE_CONFIG_FILE: &str = "_config.yml";
pub(crate) const NAVIGATION_CONFIG_FILE: &str = "_navigation.json";
pub(crate) const NAVBAR_PATH: &str = "_data/navbar.yml";
pub(crate) const NAVBAR_COMMIT_MESSAGE: &str = "Update site navigation";
pub(crate) const MERGE_COMMIT_MESSAGE: &str = "Merged via Federalist";

pub(crate) const PAGE_SIZE: u32 = 100;

pub(crate) const COLORS: [Color; 6] = [
    Color::Blue,
    Color::Cyan,
    Color::Green,
    Color::Purple,
    Color::Yellow,
    Color::Red,
];

pub(crate) const FILLED_CIRCLE: char = '●';
pub(crate) const EMPTY_CIRCLE: char = '○';
pub(crate) const BOTTOM_LEFT_BOX: char = '└';
pub(crate) const LEFT_FORK_BOX: char = '├';
pub(crate) const VERTICAL_BOX: char = '│';
pub(crate) const HORIZONTAL_BOX: char = '─';
