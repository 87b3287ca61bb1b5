//! Subcommands that inspect the site.

mod status;
pub use status::StatusCmd;

mod show;
pub use show::ShowCmd;

mod drafts;
pub use drafts::DraftsCmd;

mod assets;
pub use assets::AssetsCmd;

mod layouts;
pub use layouts::{DefaultsCmd, LayoutsCmd};

mod clone;
pub use clone::CloneCmd;
