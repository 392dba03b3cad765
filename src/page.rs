//! The host page: asset bundle and inline script registry for one response.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::assets::AssetBundle;
use crate::error::{MaterializeError, MaterializeResult};
use crate::html;
use crate::settings::Settings;
use crate::attributes::Attributes;

/// Where a registered script ends up in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptPosition {
    /// Inside `<head>`.
    Head,
    /// Right after `<body>`.
    Begin,
    /// Right before `</body>`.
    End,
    /// Before `</body>`, run once the DOM is ready.
    #[default]
    Ready,
    /// Before `</body>`, run on window load.
    Load,
}

/// What widgets need from the page they render into.
pub trait View {
    /// Declares that the page needs bundle `name` (and its dependencies).
    /// Registering the same bundle again is a no-op.
    fn register_bundle(&mut self, name: &str) -> MaterializeResult<()>;

    /// Appends an inline script. `key` defaults to the script text, so the
    /// same snippet registered twice appears once.
    fn register_js(&mut self, script: &str, position: ScriptPosition, key: Option<&str>);

    /// A fresh id for a widget that was not given one.
    fn next_widget_id(&mut self) -> String;

    fn settings(&self) -> &Settings;
}

#[derive(Debug, Clone, PartialEq)]
struct RegisteredScript {
    key: String,
    position: ScriptPosition,
    script: String,
}

/// Default [`View`] implementation.
#[derive(Debug, Clone)]
pub struct Page {
    settings: Settings,
    catalog: Vec<AssetBundle>,
    /// Registered bundles, dependencies before dependents.
    bundles: Vec<AssetBundle>,
    scripts: Vec<RegisteredScript>,
    id_counter: usize,
}

impl Default for Page {
    fn default() -> Self {
        Page::new(Settings::default())
    }
}

impl Page {
    pub fn new(settings: Settings) -> Self {
        let mut catalog = AssetBundle::builtin();
        for bundle in &settings.bundles {
            match catalog.iter_mut().find(|b| b.name == bundle.name) {
                Some(existing) => *existing = bundle.clone(),
                None => catalog.push(bundle.clone()),
            }
        }
        Page {
            settings,
            catalog,
            bundles: Vec::new(),
            scripts: Vec::new(),
            id_counter: 0,
        }
    }

    /// Names of registered bundles in load order.
    pub fn bundle_names(&self) -> Vec<&str> {
        self.bundles.iter().map(|b| b.name.as_str()).collect()
    }

    pub fn has_bundle(&self, name: &str) -> bool {
        self.bundles.iter().any(|b| b.name == name)
    }

    /// Registered scripts for one position, in registration order.
    pub fn scripts(&self, position: ScriptPosition) -> Vec<&str> {
        self.scripts
            .iter()
            .filter(|s| s.position == position)
            .map(|s| s.script.as_str())
            .collect()
    }

    /// Collects `name` and its missing dependencies into `pending`,
    /// dependencies first. Nothing is registered here.
    fn resolve(
        &self,
        name: &str,
        stack: &mut Vec<String>,
        pending: &mut Vec<AssetBundle>,
    ) -> MaterializeResult<()> {
        if self.has_bundle(name) || pending.iter().any(|b| b.name == name) {
            return Ok(());
        }
        if stack.iter().any(|n| n == name) {
            return Err(MaterializeError::CircularBundle {
                name: name.to_string(),
                via: stack.last().cloned().unwrap_or_default(),
            });
        }
        let bundle = self
            .catalog
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| MaterializeError::UnknownBundle {
                name: name.to_string(),
            })?;

        stack.push(name.to_string());
        for dep in &bundle.depends {
            self.resolve(dep, stack, pending)?;
        }
        stack.pop();

        pending.push(bundle.clone());
        Ok(())
    }

    // ─── Output ──────────────────────────────────────────────────────────────

    /// Stylesheet links and head scripts.
    pub fn head_html(&self) -> String {
        let env = self.settings.environment;
        let mut lines: Vec<String> = Vec::new();
        for bundle in &self.bundles {
            let base = self.settings.base_url_for(&bundle.name);
            for url in bundle.css_urls(env, base) {
                let attrs = Attributes::new().with("href", url).with("rel", "stylesheet");
                lines.push(html::begin_tag("link", &attrs));
            }
        }
        if let Some(block) = script_block(&self.scripts(ScriptPosition::Head)) {
            lines.push(block);
        }
        lines.join("\n")
    }

    /// Scripts that go right after `<body>`.
    pub fn body_begin_html(&self) -> String {
        script_block(&self.scripts(ScriptPosition::Begin)).unwrap_or_default()
    }

    /// Bundle scripts followed by end, ready and load scripts.
    pub fn body_end_html(&self) -> String {
        let env = self.settings.environment;
        let mut lines: Vec<String> = Vec::new();
        for bundle in &self.bundles {
            let base = self.settings.base_url_for(&bundle.name);
            for url in bundle.js_urls(env, base) {
                lines.push(html::tag("script", "", &Attributes::new().with("src", url)));
            }
        }
        if let Some(block) = script_block(&self.scripts(ScriptPosition::End)) {
            lines.push(block);
        }
        let ready = self.scripts(ScriptPosition::Ready);
        if !ready.is_empty() {
            lines.push(html::tag(
                "script",
                &format!(
                    "document.addEventListener('DOMContentLoaded', function () {{\n{}\n}});",
                    ready.join("\n")
                ),
                &Attributes::new(),
            ));
        }
        let load = self.scripts(ScriptPosition::Load);
        if !load.is_empty() {
            lines.push(html::tag(
                "script",
                &format!(
                    "window.addEventListener('load', function () {{\n{}\n}});",
                    load.join("\n")
                ),
                &Attributes::new(),
            ));
        }
        lines.join("\n")
    }
}

fn script_block(scripts: &[&str]) -> Option<String> {
    if scripts.is_empty() {
        return None;
    }
    Some(html::tag(
        "script",
        &format!("\n{}\n", scripts.join("\n")),
        &Attributes::new(),
    ))
}

impl View for Page {
    fn register_bundle(&mut self, name: &str) -> MaterializeResult<()> {
        let mut pending = Vec::new();
        self.resolve(name, &mut Vec::new(), &mut pending)?;
        for bundle in pending {
            debug!(bundle = %bundle.name, "registered asset bundle");
            self.bundles.push(bundle);
        }
        Ok(())
    }

    fn register_js(&mut self, script: &str, position: ScriptPosition, key: Option<&str>) {
        let key = key.unwrap_or(script).to_string();
        if let Some(existing) = self.scripts.iter_mut().find(|s| s.key == key) {
            if existing.script != script || existing.position != position {
                warn!(%key, "script key registered again with different text, replacing");
                existing.script = script.to_string();
                existing.position = position;
            }
            return;
        }
        trace!(?position, %key, "registered script");
        self.scripts.push(RegisteredScript {
            key,
            position,
            script: script.to_string(),
        });
    }

    fn next_widget_id(&mut self) -> String {
        let id = format!("{}{}", self.settings.id_prefix, self.id_counter);
        self.id_counter += 1;
        id
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }
}
