//! Subcommands that write to the site through drafts.

use crate::{remote::models::Contents, session::Edit};
use anyhow::{anyhow, Result};
use clap::Args;
use std::{
    io::Read,
    path::{Path, PathBuf},
};

mod save;
pub use save::SaveCmd;

mod publish;
pub use publish::PublishCmd;

mod discard;
pub use discard::DiscardCmd;

mod upload;
pub use upload::UploadCmd;

/// Reads new content for the edited file from `path`, or from stdin when `path` is `-`.
fn read_content(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))
}

/// Returns the commit message to use for an edit of `file`.
fn message_or_default(message: Option<String>, file: &str) -> String {
    message.unwrap_or_else(|| format!("Update {}", file))
}

/// The edited file's new content, shared by `save` and `publish`.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct ContentArgs {
    /// Path to the new content of the file, or `-` to read stdin. Opens an editor when absent
    #[arg(long)]
    from: Option<PathBuf>,
    /// The commit message
    #[arg(long, short)]
    message: Option<String>,
}

impl ContentArgs {
    /// Builds the [Edit] of `file` described by the arguments. Without `--from`, the user edits
    /// `current` in their editor.
    fn edit(self, file: &str, current: Option<&Contents>) -> Result<Edit> {
        let content = match &self.from {
            Some(path) => read_content(path)?,
            None => {
                let current = match current {
                    Some(Contents::File(f)) => f.decoded_content()?,
                    _ => String::new(),
                };
                let extension = Path::new(file)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| format!(".{}", e))
                    .unwrap_or_else(|| ".md".to_string());

                let prompt = format!("Edit `{}`:", file);
                let edited = inquire::Editor::new(prompt.as_str())
                    .with_predefined_text(&current)
                    .with_file_extension(&extension)
                    .prompt()?;
                edited
            }
        };
        Ok(Edit::text(message_or_default(self.message, file), content))
    }
}
