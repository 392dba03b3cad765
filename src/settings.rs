use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::assets::AssetBundle;
use crate::error::MaterializeResult;

/// Which asset variants to link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    #[default]
    Prod,
}

/// Page-level rendering settings.
///
/// ```yaml
/// environment: dev
/// homeUrl: /dashboard
/// idPrefix: m
/// bundleBaseUrls:
///   materialize: https://cdn.example.com/materialize/1.0.0
/// bundles:
///   - name: app
///     css: [/css/app.css]
///     depends: [materialize]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub environment: Environment,
    /// Target of the default breadcrumb home link.
    pub home_url: String,
    /// Prefix for generated widget ids (`w0`, `w1`, ...).
    pub id_prefix: String,
    /// Per-bundle base URL overrides, keyed by bundle name.
    pub bundle_base_urls: HashMap<String, String>,
    /// Additional bundles the host declares next to the built-in ones.
    pub bundles: Vec<AssetBundle>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            environment: Environment::default(),
            home_url: "/".to_string(),
            id_prefix: "w".to_string(),
            bundle_base_urls: HashMap::new(),
            bundles: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> MaterializeResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn base_url_for(&self, bundle: &str) -> Option<&str> {
        self.bundle_base_urls.get(bundle).map(String::as_str)
    }
}
