//! Asset bundle descriptors.
//!
//! A bundle is a named set of CSS/JS files plus the names of the bundles it
//! depends on. Resolution and de-duplication happen in [`crate::Page`].

use serde::{Deserialize, Serialize};

use crate::settings::Environment;

pub const FONT_BUNDLE: &str = "materialize-font";
pub const MATERIALIZE_BUNDLE: &str = "materialize";
pub const PLUGIN_BUNDLE: &str = "materialize-plugin";
pub const EXTRA_BUNDLE: &str = "materialize-extra";

/// One file reference, optionally with a separate production (minified) path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetFile {
    Same(String),
    PerEnvironment { dev: String, prod: String },
}

impl AssetFile {
    fn per_env(dev: &str, prod: &str) -> Self {
        AssetFile::PerEnvironment {
            dev: dev.to_string(),
            prod: prod.to_string(),
        }
    }

    pub fn path(&self, env: Environment) -> &str {
        match (self, env) {
            (AssetFile::Same(p), _) => p,
            (AssetFile::PerEnvironment { dev, .. }, Environment::Dev) => dev,
            (AssetFile::PerEnvironment { prod, .. }, Environment::Prod) => prod,
        }
    }
}

/// A named, declarative group of CSS/JS files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBundle {
    pub name: String,
    /// Prefix joined to relative file paths. Absolute and protocol-relative
    /// paths are used as-is.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub css: Vec<AssetFile>,
    #[serde(default)]
    pub js: Vec<AssetFile>,
    #[serde(default)]
    pub depends: Vec<String>,
}

impl AssetBundle {
    /// Google Material Icons font.
    pub fn material_font() -> Self {
        AssetBundle {
            name: FONT_BUNDLE.to_string(),
            base_url: String::new(),
            css: vec![AssetFile::Same(
                "//fonts.googleapis.com/icon?family=Material+Icons".to_string(),
            )],
            js: Vec::new(),
            depends: Vec::new(),
        }
    }

    /// Materialize stylesheet.
    pub fn materialize() -> Self {
        AssetBundle {
            name: MATERIALIZE_BUNDLE.to_string(),
            base_url: "/assets/materialize".to_string(),
            css: vec![AssetFile::per_env(
                "css/materialize.css",
                "css/materialize.min.css",
            )],
            js: Vec::new(),
            depends: vec![FONT_BUNDLE.to_string()],
        }
    }

    /// Materialize JavaScript plugins.
    pub fn plugin() -> Self {
        AssetBundle {
            name: PLUGIN_BUNDLE.to_string(),
            base_url: "/assets/materialize".to_string(),
            css: Vec::new(),
            js: vec![AssetFile::per_env("js/materialize.js", "js/materialize.min.js")],
            depends: vec![MATERIALIZE_BUNDLE.to_string()],
        }
    }

    /// Extra styles for card action icons and breadcrumb variants.
    pub fn extra() -> Self {
        AssetBundle {
            name: EXTRA_BUNDLE.to_string(),
            base_url: "/assets/materialize-extra".to_string(),
            css: vec![AssetFile::per_env(
                "css/materialize.extra.css",
                "css/materialize.extra.min.css",
            )],
            js: Vec::new(),
            depends: vec![MATERIALIZE_BUNDLE.to_string()],
        }
    }

    /// The bundles this crate ships.
    pub fn builtin() -> Vec<AssetBundle> {
        vec![
            Self::material_font(),
            Self::materialize(),
            Self::plugin(),
            Self::extra(),
        ]
    }

    pub fn css_urls(&self, env: Environment, base_url: Option<&str>) -> Vec<String> {
        self.urls(&self.css, env, base_url)
    }

    pub fn js_urls(&self, env: Environment, base_url: Option<&str>) -> Vec<String> {
        self.urls(&self.js, env, base_url)
    }

    fn urls(&self, files: &[AssetFile], env: Environment, base_url: Option<&str>) -> Vec<String> {
        let base = base_url.unwrap_or(&self.base_url);
        files.iter().map(|f| join_url(base, f.path(env))).collect()
    }
}

fn join_url(base: &str, path: &str) -> String {
    let absolute = path.starts_with('/') || path.contains("://");
    if absolute || base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_picks_minified_in_prod() {
        let bundle = AssetBundle::materialize();
        assert_eq!(
            bundle.css_urls(Environment::Prod, None),
            vec!["/assets/materialize/css/materialize.min.css"]
        );
        assert_eq!(
            bundle.css_urls(Environment::Dev, Some("https://cdn.example.com/m/")),
            vec!["https://cdn.example.com/m/css/materialize.css"]
        );
    }

    #[test]
    fn test_protocol_relative_font_url_is_untouched() {
        let bundle = AssetBundle::material_font();
        assert_eq!(
            bundle.css_urls(Environment::Prod, Some("/ignored")),
            vec!["//fonts.googleapis.com/icon?family=Material+Icons"]
        );
    }

    #[test]
    fn test_bundle_from_yaml() {
        let yaml = "name: app\nbaseUrl: /static\ncss: [app.css]\njs:\n  - dev: app.js\n    prod: app.min.js\ndepends: [materialize-plugin]\n";
        let bundle: AssetBundle = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(bundle.js_urls(Environment::Prod, None), vec!["/static/app.min.js"]);
        assert_eq!(bundle.depends, vec![PLUGIN_BUNDLE]);
    }
}
