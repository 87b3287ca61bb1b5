//! Contains the formatting logic for the [SdContext] struct.

use super::SdContext;
use crate::{
    constants::{
        BOTTOM_LEFT_BOX, COLORS, EMPTY_CIRCLE, FILLED_CIRCLE, HORIZONTAL_BOX, LEFT_FORK_BOX,
        VERTICAL_BOX,
    },
    navigation::{self, NavigationDocument, UiTreeNode},
    session::{DraftState, RepositorySession},
};
use anyhow::Result;
use nu_ansi_term::Color;
use std::fmt::Write;

impl SdContext {
    /// Projects the fetched navigation document into a UI tree, annotated with the session's
    /// drafts.
    pub fn navigation_tree(&self) -> Result<Vec<UiTreeNode>> {
        let document = NavigationDocument::from_config(self.session.config_files())?;
        Ok(navigation::to_ui_tree(&document, self.session.drafts()))
    }

    /// Prints the site navigation.
    pub fn print_navigation(&self) -> Result<()> {
        let mut buf = String::new();
        write_navigation(&mut buf, &self.navigation_tree()?)?;
        print!("{}", buf);
        Ok(())
    }

    /// Prints a summary of the session's branch and draft state.
    pub fn print_status(&self) -> Result<()> {
        let mut buf = String::new();
        write_status(&mut buf, &self.session)?;
        print!("{}", buf);
        Ok(())
    }
}

/// Writes the branch, draft state and last known revisions of `session` to `f`.
fn write_status<W: Write>(f: &mut W, session: &RepositorySession) -> Result<()> {
    writeln!(
        f,
        "On branch `{}` (default `{}` at {})",
        Color::Green.paint(session.branch()),
        Color::Blue.paint(session.default_branch()),
        short_sha(session.default_sha())
    )?;
    if let Some(file) = session.file() {
        writeln!(
            f,
            "Editing `{}` (blob {})",
            Color::Cyan.paint(file),
            short_sha(session.blob_sha())
        )?;
    }
    let state = match session.state() {
        DraftState::Clean => Color::Green.paint("no draft").to_string(),
        DraftState::DraftInProgress { .. } => Color::Yellow.paint("draft in progress").to_string(),
        DraftState::PrOpen { number, .. } => Color::Yellow
            .paint(format!("draft under review (#{})", number))
            .to_string(),
    };
    writeln!(f, "State: {}", state)?;
    writeln!(f, "Drafts: {}", session.drafts().len())?;
    writeln!(
        f,
        "Assets: {} under `{}`",
        session.assets().len(),
        session.upload_root()
    )?;
    Ok(())
}

/// Abbreviates a SHA the way `git log --oneline` does.
fn short_sha(sha: Option<&str>) -> String {
    match sha {
        Some(sha) => Color::Purple.paint(sha.chars().take(7).collect::<String>()).to_string(),
        None => Color::DarkGray.paint("unknown").to_string(),
    }
}

/// Writes a navigation forest to the given [Write]r, one page per line.
///
/// Pages with a draft are marked with a filled circle.
pub fn write_navigation<W: Write>(w: &mut W, tree: &[UiTreeNode]) -> std::fmt::Result {
    tree.iter()
        .try_for_each(|node| write_node_recursive(w, node, 0, "", "", true))
}

/// Writes a node and its descendants to the given writer recursively.
fn write_node_recursive<W: Write>(
    w: &mut W,
    node: &UiTreeNode,
    depth: usize,
    prefix: &str,
    connection: &str,
    is_parent_last_child: bool,
) -> std::fmt::Result {
    // Form the log-line for the current page.
    let draft_icon = if node.li_attr.draft_state {
        FILLED_CIRCLE
    } else {
        EMPTY_CIRCLE
    };
    let rendered = COLORS[depth % COLORS.len()]
        .paint(format!("{}{} {}", connection, draft_icon, node.text));
    let flags = [("menu", node.data.menu), ("footer", node.data.footer)]
        .iter()
        .filter_map(|(name, set)| set.then_some(*name))
        .collect::<Vec<_>>();
    let metadata = format!(
        " ({}){}",
        Color::Cyan.italic().paint(&node.li_attr.edit_href),
        if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        }
    );

    writeln!(w, "{}{}{}", prefix, rendered, metadata)?;

    let mut children = node.children.iter().peekable();
    while let Some(child) = children.next() {
        // Form the connection between the previous log-line and the current log-line.
        let is_last_child = children.peek().is_none();
        let connection = format!(
            "{}{}",
            if is_last_child {
                BOTTOM_LEFT_BOX
            } else {
                LEFT_FORK_BOX
            },
            HORIZONTAL_BOX
        );

        // Top-level pages have no rail of their own.
        let prefix = if depth > 0 {
            if is_parent_last_child {
                format!("{}  ", prefix)
            } else {
                let color = COLORS[depth % COLORS.len()];
                format!("{}{} ", prefix, color.paint(VERTICAL_BOX.to_string()))
            }
        } else {
            prefix.to_string()
        };

        write_node_recursive(
            w,
            child,
            depth + 1,
            prefix.as_str(),
            connection.as_str(),
            is_last_child,
        )?;
    }

    Ok(())
}
