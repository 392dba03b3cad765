use serde::Deserialize;

use crate::assets::EXTRA_BUNDLE;
use crate::attributes::Attributes;
use crate::error::{require, MaterializeResult};
use crate::html;
use crate::page::View;
use crate::types::BreadcrumbType;
use crate::widget::Widget;

/// Breadcrumb trail inside a `nav` bar.
///
/// ```yaml
/// Breadcrumbs:
///   links:
///     - { label: Sample Post, url: /post/1 }
///     - Edit
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breadcrumbs {
    /// Options of the `nav` element.
    pub options: Attributes,
    pub wrapper_options: Attributes,
    pub column_options: Attributes,
    pub encode_labels: bool,
    /// First link; `None` links "Home" to the configured home URL.
    pub home_link: Option<HomeLink>,
    pub links: Vec<BreadcrumbLink>,
    #[serde(rename = "type")]
    pub kind: BreadcrumbType,
}

impl Default for Breadcrumbs {
    fn default() -> Self {
        Breadcrumbs {
            options: Attributes::new(),
            wrapper_options: Attributes::new(),
            column_options: Attributes::new(),
            encode_labels: true,
            home_link: None,
            links: Vec::new(),
            kind: BreadcrumbType::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreadcrumbItem {
    pub label: Option<String>,
    pub url: Option<String>,
    pub encode: Option<bool>,
    pub options: Attributes,
}

impl BreadcrumbItem {
    pub fn new(label: &str, url: Option<&str>) -> Self {
        BreadcrumbItem {
            label: Some(label.to_string()),
            url: url.map(str::to_string),
            ..Default::default()
        }
    }
}

/// A bare label renders as plain text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BreadcrumbLink {
    Label(String),
    Item(BreadcrumbItem),
}

impl From<&str> for BreadcrumbLink {
    fn from(label: &str) -> Self {
        BreadcrumbLink::Label(label.to_string())
    }
}

impl From<BreadcrumbItem> for BreadcrumbLink {
    fn from(item: BreadcrumbItem) -> Self {
        BreadcrumbLink::Item(item)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeLink {
    /// `false` drops the home link altogether.
    pub render: bool,
    pub label: Option<String>,
    pub url: Option<String>,
    pub encode: Option<bool>,
    pub options: Attributes,
}

impl Default for HomeLink {
    fn default() -> Self {
        HomeLink {
            render: true,
            label: None,
            url: None,
            encode: None,
            options: Attributes::new(),
        }
    }
}

impl HomeLink {
    pub fn hidden() -> Self {
        HomeLink {
            render: false,
            ..Default::default()
        }
    }
}

impl Breadcrumbs {
    pub fn new(links: Vec<BreadcrumbLink>) -> Self {
        Breadcrumbs {
            links,
            ..Default::default()
        }
    }

    fn render_item(&self, item: &BreadcrumbItem) -> MaterializeResult<String> {
        let label = require(&item.label, "Breadcrumbs", "links.label")?;
        item.options.validate()?;
        let label = html::encode_if(label, item.encode.unwrap_or(self.encode_labels));
        let attrs = Attributes::class("breadcrumb").merged(&item.options);
        Ok(match &item.url {
            Some(url) => html::a(&label, Some(url.as_str()), &attrs),
            None => html::tag("span", &label, &attrs),
        })
    }
}

impl Widget for Breadcrumbs {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        if self.links.is_empty() {
            return Ok(String::new());
        }
        self.options.validate()?;
        self.wrapper_options.validate()?;
        self.column_options.validate()?;

        let mut items = Vec::with_capacity(self.links.len() + 1);
        match &self.home_link {
            None => {
                let home = BreadcrumbItem::new("Home", Some(view.settings().home_url.as_str()));
                items.push(self.render_item(&home)?);
            }
            Some(home) if home.render => {
                let item = BreadcrumbItem {
                    label: home.label.clone(),
                    url: home.url.clone(),
                    encode: home.encode,
                    options: home.options.clone(),
                };
                items.push(self.render_item(&item)?);
            }
            Some(_) => {}
        }
        for link in &self.links {
            let item = match link {
                BreadcrumbLink::Label(label) => self.render_item(&BreadcrumbItem::new(label, None))?,
                BreadcrumbLink::Item(item) => self.render_item(item)?,
            };
            items.push(item);
        }

        let mut nav = self.options.clone();
        if self.kind != BreadcrumbType::Default {
            nav.add_class(&format!("breadcrumbs-{}", self.kind.as_str()));
            view.register_bundle(EXTRA_BUNDLE)?;
        }
        let column = html::tag(
            "div",
            &items.join(""),
            &Attributes::class("col s12").merged(&self.column_options),
        );
        let wrapper = html::tag(
            "div",
            &column,
            &Attributes::class("nav-wrapper").merged(&self.wrapper_options),
        );
        Ok(html::tag("nav", &wrapper, &nav))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterializeError;
    use crate::page::Page;
    use crate::settings::Settings;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_home_link() {
        let mut page = Page::default();
        let crumbs = Breadcrumbs::new(vec![
            BreadcrumbItem::new("Post", Some("/post/1")).into(),
            "Edit".into(),
        ]);
        assert_eq!(
            crumbs.render(&mut page).unwrap(),
            "<nav><div class=\"nav-wrapper\"><div class=\"col s12\">\
             <a class=\"breadcrumb\" href=\"/\">Home</a>\
             <a class=\"breadcrumb\" href=\"/post/1\">Post</a>\
             <span class=\"breadcrumb\">Edit</span>\
             </div></div></nav>"
        );
    }

    #[test]
    fn test_home_url_comes_from_settings() {
        let mut settings = Settings::default();
        settings.home_url = "/dashboard".to_string();
        let mut page = Page::new(settings);
        let html = Breadcrumbs::new(vec!["Here".into()]).render(&mut page).unwrap();
        assert!(html.contains(r#"<a class="breadcrumb" href="/dashboard">Home</a>"#));
    }

    #[test]
    fn test_empty_links_render_nothing() {
        let mut page = Page::default();
        assert_eq!(Breadcrumbs::default().render(&mut page).unwrap(), "");
    }

    #[test]
    fn test_hidden_home_link_and_custom_classes() {
        let mut page = Page::default();
        let crumbs: Breadcrumbs = serde_yaml::from_str(
            "homeLink: { render: false }\nwrapperOptions: { class: teal }\nlinks:\n  - { label: A, options: { class: white-text } }\n",
        )
        .unwrap();
        assert_eq!(
            crumbs.render(&mut page).unwrap(),
            "<nav><div class=\"nav-wrapper teal\"><div class=\"col s12\">\
             <span class=\"breadcrumb white-text\">A</span></div></div></nav>"
        );
    }

    #[test]
    fn test_custom_home_link() {
        let mut page = Page::default();
        let crumbs: Breadcrumbs =
            serde_yaml::from_str("homeLink: { label: Start, url: /start }\nlinks: [Now]\n").unwrap();
        let html = crumbs.render(&mut page).unwrap();
        assert!(html.contains(r#"<a class="breadcrumb" href="/start">Start</a>"#));
    }

    #[test]
    fn test_missing_label_is_an_error() {
        let mut page = Page::default();
        let crumbs = Breadcrumbs::new(vec![BreadcrumbItem::default().into()]);
        assert_eq!(
            crumbs.render(&mut page),
            Err(MaterializeError::missing("Breadcrumbs", "links.label"))
        );
    }

    #[test]
    fn test_flat_type_uses_extra_bundle() {
        let mut page = Page::default();
        let mut crumbs = Breadcrumbs::new(vec!["X".into()]);
        crumbs.kind = BreadcrumbType::Flat;
        let html = crumbs.render(&mut page).unwrap();
        assert!(html.starts_with(r#"<nav class="breadcrumbs-flat">"#));
        assert!(page.has_bundle(EXTRA_BUNDLE));
    }
}
