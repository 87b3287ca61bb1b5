//! Resolution of front-matter defaults and layouts from the site configuration.

use crate::constants::SITE_CONFIG_FILE;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;
use tracing::warn;

/// A fetched configuration document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Whether the document was found.
    pub present: bool,
    /// The parsed document. [Value::Null] if the document was missing or malformed.
    pub document: Value,
}

impl ConfigFile {
    /// Builds a [ConfigFile] from a fetched body. A body that fails to parse is recorded as an
    /// empty document rather than failing the fetch.
    pub fn from_body(name: &str, present: bool, body: &str) -> Self {
        // JSON documents are valid YAML, so one parser serves both formats.
        let document = serde_yaml::from_str::<Value>(body).unwrap_or_else(|e| {
            warn!(file = name, error = %e, "configuration document failed to parse");
            Value::Null
        });
        Self { present, document }
    }
}

/// Configuration documents keyed by file name.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFiles(pub HashMap<String, ConfigFile>);

impl ConfigFiles {
    /// Gets a configuration document by file name.
    pub fn get(&self, name: &str) -> Option<&ConfigFile> {
        self.0.get(name)
    }

    /// Inserts a configuration document.
    pub fn insert(&mut self, name: impl Into<String>, file: ConfigFile) {
        self.0.insert(name.into(), file);
    }

    /// Returns the `values` map of the first site-root scoped entry of `_config.yml`'s
    /// `defaults` list, if any.
    fn root_defaults(&self) -> Option<&Value> {
        let config = self.get(SITE_CONFIG_FILE).filter(|c| c.present)?;
        let defaults = config.document.get("defaults")?.as_sequence()?;

        defaults
            .iter()
            .find(|entry| {
                entry
                    .get("scope")
                    .and_then(|scope| scope.get("path"))
                    .and_then(Value::as_str)
                    == Some("")
            })
            .and_then(|entry| entry.get("values"))
    }

    /// Returns the site-root front-matter defaults as a YAML fragment, or a single newline when
    /// the configuration declares none.
    pub fn get_defaults(&self) -> String {
        self.root_defaults()
            .and_then(|values| serde_yaml::to_string(values).ok())
            .unwrap_or_else(|| "\n".to_string())
    }

    /// Returns the layouts permitted by the site-root defaults, or `["default"]` when no
    /// `layout` is declared.
    ///
    /// A scalar `layout` is treated as a single-element list. A declared empty list stays empty.
    pub fn get_layouts(&self) -> Vec<String> {
        match self.root_defaults().and_then(|values| values.get("layout")) {
            None | Some(Value::Null) => vec!["default".to_string()],
            Some(Value::Sequence(seq)) => seq
                .iter()
                .filter_map(|l| l.as_str().map(ToOwned::to_owned))
                .collect(),
            Some(Value::String(layout)) => vec![layout.clone()],
            Some(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn with_config(body: &str) -> ConfigFiles {
        let mut files = ConfigFiles::default();
        files.insert(
            SITE_CONFIG_FILE,
            ConfigFile::from_body(SITE_CONFIG_FILE, true, body),
        );
        files
    }

    #[test]
    fn resolves_root_scope_defaults() {
        let files = with_config(
            r#"
defaults:
  - scope:
      path: "_posts"
    values:
      layout: ["article"]
  - scope:
      path: ""
    values:
      layout: ["post"]
"#,
        );

        let fragment: Value = serde_yaml::from_str(&files.get_defaults()).unwrap();
        assert_eq!(
            fragment,
            serde_yaml::from_str::<Value>("layout: [post]").unwrap()
        );
        assert_eq!(files.get_layouts(), ["post"]);
    }

    #[test]
    fn accepts_json_configuration() {
        let files =
            with_config(r#"{"defaults":[{"scope":{"path":""},"values":{"layout":["post"]}}]}"#);
        assert_eq!(files.get_layouts(), ["post"]);
    }

    #[test]
    fn missing_defaults_yield_a_newline() {
        let files = with_config("title: My Site\n");
        assert_eq!(files.get_defaults(), "\n");
        assert_eq!(files.get_layouts(), ["default"]);

        assert_eq!(ConfigFiles::default().get_defaults(), "\n");
    }

    #[test]
    fn absent_config_is_ignored() {
        let mut files = ConfigFiles::default();
        files.insert(
            SITE_CONFIG_FILE,
            ConfigFile::from_body(
                SITE_CONFIG_FILE,
                false,
                r#"{"defaults":[{"scope":{"path":""},"values":{"layout":["post"]}}]}"#,
            ),
        );
        assert_eq!(files.get_layouts(), ["default"]);
    }

    #[test]
    fn malformed_documents_degrade_to_empty() {
        let file = ConfigFile::from_body(SITE_CONFIG_FILE, true, "key: [unclosed");
        assert_eq!(file.document, Value::Null);
    }

    #[test]
    fn scalar_layout_is_a_single_layout() {
        let files = with_config(
            "defaults:\n  - scope:\n      path: \"\"\n    values:\n      layout: page\n",
        );
        assert_eq!(files.get_layouts(), ["page"]);
    }

    #[test]
    fn empty_layout_list_stays_empty() {
        let files = with_config(
            "defaults:\n  - scope:\n      path: \"\"\n    values:\n      layout: []\n",
        );
        assert!(files.get_layouts().is_empty());

        let files = with_config(
            "defaults:\n  - scope:\n      path: \"\"\n    values:\n      layout: ~\n",
        );
        assert_eq!(files.get_layouts(), ["default"]);
    }
}
