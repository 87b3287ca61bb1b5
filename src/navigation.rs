//! Synchronization between the persisted navigation document and the UI tree.
//!
//! The persisted document is an ordered tree of [PageNode]s. The UI works on a projection of
//! it, [UiTreeNode], which is keyed for a tree widget and annotated with draft state. Only the
//! `assigned` half of the document round-trips: `unassigned` is always written back empty.

use crate::{config::ConfigFiles, constants::NAVIGATION_CONFIG_FILE, errors::SessionResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The persisted navigation document.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NavigationDocument {
    /// Pages placed in the navigation.
    #[serde(default)]
    pub assigned: Vec<PageNode>,
    /// Pages not yet placed.
    #[serde(default)]
    pub unassigned: Vec<PageNode>,
}

impl NavigationDocument {
    /// Parses a navigation document.
    #[cfg(test)]
    pub fn from_yaml(source: &str) -> SessionResult<Self> {
        serde_yaml::from_str(source).map_err(Into::into)
    }

    /// Reads the navigation document out of fetched configuration. A missing or empty document
    /// is an empty navigation.
    pub fn from_config(files: &ConfigFiles) -> SessionResult<Self> {
        match files
            .get(NAVIGATION_CONFIG_FILE)
            .filter(|file| file.present && !file.document.is_null())
        {
            Some(file) => serde_yaml::from_value(file.document.clone()).map_err(Into::into),
            None => Ok(Self::default()),
        }
    }

    /// Serializes the document. Keys are emitted in declaration order, so an unchanged tree
    /// always serializes to the same bytes.
    pub fn to_yaml(&self) -> SessionResult<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }
}

/// A page in the persisted navigation tree.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageNode {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub show_in_menu: bool,
    #[serde(default)]
    pub show_in_footer: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageNode>,
}

/// A node of the UI tree.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct UiTreeNode {
    /// The page title.
    pub text: String,
    /// Editable navigation flags. Edits made in the UI land here.
    pub data: NodeData,
    /// Attributes rendered onto the node's element.
    pub li_attr: NodeAttributes,
    /// Widget state. Never persisted.
    pub state: NodeState,
    #[serde(default)]
    pub children: Vec<UiTreeNode>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub menu: bool,
    pub footer: bool,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    #[serde(rename = "data-edit-href")]
    pub edit_href: String,
    /// Whether a draft branch exists for the page. Computed, never persisted.
    #[serde(rename = "data-draft-state")]
    pub draft_state: bool,
    #[serde(rename = "data-show-in-menu")]
    pub show_in_menu: bool,
    #[serde(rename = "data-show-in-footer")]
    pub show_in_footer: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    pub opened: bool,
}

/// Projects the assigned pages of `document` into UI tree nodes.
///
/// A node is marked as a draft iff its `href` is one of `drafts`.
pub fn to_ui_tree(document: &NavigationDocument, drafts: &[String]) -> Vec<UiTreeNode> {
    let drafts = drafts.iter().map(String::as_str).collect::<HashSet<_>>();
    document
        .assigned
        .iter()
        .map(|page| annotate(page, &drafts))
        .collect()
}

/// Renames `title` to `text` and attaches the widget annotations, then descends.
fn annotate(page: &PageNode, drafts: &HashSet<&str>) -> UiTreeNode {
    let mut node = UiTreeNode {
        text: page.title.clone(),
        data: NodeData {
            menu: page.show_in_menu,
            footer: page.show_in_footer,
        },
        li_attr: NodeAttributes {
            edit_href: page.href.clone(),
            draft_state: drafts.contains(page.href.as_str()),
            show_in_menu: page.show_in_menu,
            show_in_footer: page.show_in_footer,
        },
        state: NodeState { opened: true },
        children: Vec::with_capacity(page.children.len()),
    };

    node.children
        .extend(page.children.iter().map(|child| annotate(child, drafts)));
    node
}

/// Converts an edited UI tree back into a persisted document.
///
/// Navigation flags are read from `data`, which is what the UI edits, and `href` from the
/// node attributes. Draft and widget state are dropped.
pub fn to_persisted_tree(tree: &[UiTreeNode]) -> NavigationDocument {
    NavigationDocument {
        assigned: tree.iter().map(strip).collect(),
        unassigned: Vec::new(),
    }
}

fn strip(node: &UiTreeNode) -> PageNode {
    PageNode {
        title: node.text.clone(),
        href: node.li_attr.edit_href.clone(),
        show_in_menu: node.data.menu,
        show_in_footer: node.data.footer,
        children: node.children.iter().map(strip).collect(),
    }
}
