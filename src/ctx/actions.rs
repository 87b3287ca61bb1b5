//! Actions that can be dispatched by the user.

use super::SdContext;
use crate::{errors::SessionError, session::Edit};
use anyhow::Result;
use nu_ansi_term::Color;

impl SdContext {
    /// Asks the user for confirmation before discarding the checked out draft.
    ///
    /// ## Returns
    /// - `Ok(true)` - The draft branch was deleted.
    /// - `Ok(false)` - The user declined.
    pub async fn discard_draft(&mut self, assume_yes: bool) -> Result<bool> {
        // Ensure the user does not attempt to delete the default branch.
        if !self.session.state().is_drafting() {
            return Err(SessionError::CannotDeleteDefaultBranch.into());
        }

        // Ask for confirmation to prevent accidental loss of unpublished edits.
        let confirm = assume_yes
            || inquire::Confirm::new(
                format!(
                    "Discard the draft of `{}` on branch `{}`?",
                    Color::Green.paint(self.session.file().unwrap_or_default()),
                    Color::Blue.paint(self.session.branch())
                )
                .as_str(),
            )
            .with_default(false)
            .prompt()?;

        if !confirm {
            return Ok(false);
        }

        self.session.delete_branch().await?;
        Ok(true)
    }

    /// Asks the user for confirmation before merging `edit` into the default branch.
    pub async fn publish_draft(&mut self, edit: &Edit, assume_yes: bool) -> Result<bool> {
        let confirm = assume_yes
            || inquire::Confirm::new(
                format!(
                    "Publish `{}` to `{}`?",
                    Color::Green.paint(self.session.file().unwrap_or_default()),
                    Color::Blue.paint(self.session.default_branch())
                )
                .as_str(),
            )
            .with_default(false)
            .prompt()?;

        if !confirm {
            return Ok(false);
        }

        let merged = self.session.publish(edit).await?;
        if !merged.merged && !merged.message.is_empty() {
            println!("{}", Color::Yellow.paint(merged.message));
        }
        Ok(true)
    }
}
