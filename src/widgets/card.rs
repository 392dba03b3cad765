use serde::Deserialize;

use crate::assets::EXTRA_BUNDLE;
use crate::attributes::Attributes;
use crate::error::{require, MaterializeError, MaterializeResult};
use crate::html;
use crate::page::View;
use crate::types::CardTitlePos;
use crate::widget::{IconSpec, Widget, WidgetBase};
use crate::widgets::Button;

/// Card inside a grid column.
///
/// ```yaml
/// Card:
///   title: Card Title
///   content: <p>I am a very simple card.</p>
///   actions:
///     - { label: This is a link, url: "#" }
/// ```
///
/// Produces `div.row > div.col > div.card`, with the title and content in
/// `div.card-content` and the links in `div.card-action`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    /// Options of the outer `div.row`.
    pub options: Attributes,
    pub column_options: Attributes,
    pub card_options: Attributes,
    pub title: Option<String>,
    /// Overrides `encodeLabels` for the title.
    pub encode_title: Option<bool>,
    pub title_options: Attributes,
    pub title_position: CardTitlePos,
    /// Body markup, inserted as-is.
    pub content: Option<String>,
    pub content_options: Attributes,
    pub image: Option<CardImage>,
    pub horizontal: bool,
    /// Floating button overlapping the image (`halfway-fab`).
    pub fab: Option<Button>,
    pub reveal: Option<CardReveal>,
    pub actions: Vec<CardAction>,
    pub action_options: Attributes,
    pub encode_labels: bool,
}

impl Default for Card {
    fn default() -> Self {
        Card {
            options: Attributes::new(),
            column_options: Attributes::class("s12 m6"),
            card_options: Attributes::new(),
            title: None,
            encode_title: None,
            title_options: Attributes::new(),
            title_position: CardTitlePos::default(),
            content: None,
            content_options: Attributes::new(),
            image: None,
            horizontal: false,
            fab: None,
            reveal: None,
            actions: Vec::new(),
            action_options: Attributes::new(),
            encode_labels: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardImage {
    pub url: Option<String>,
    pub options: Attributes,
    pub container_options: Attributes,
}

/// Panel that slides over the card when the title or image is clicked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardReveal {
    /// Defaults to the card title.
    pub title: Option<String>,
    pub content: String,
    pub options: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardAction {
    pub label: Option<String>,
    pub encode: Option<bool>,
    pub url: Option<String>,
    pub icon: Option<IconSpec>,
    pub options: Attributes,
}

impl CardAction {
    pub fn link(label: &str, url: &str) -> Self {
        CardAction {
            label: Some(label.to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }
}

/// Opening half of a card whose body is supplied between `begin` and `end`.
#[derive(Debug)]
pub struct OpenCard<'a> {
    card: &'a Card,
    html: String,
}

impl<'a> OpenCard<'a> {
    /// Markup up to and including the title inside `div.card-content`.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Closes the card: configured content, actions and reveal panel.
    pub fn end(self, view: &mut dyn View) -> MaterializeResult<String> {
        self.card.closing_html(view)
    }
}

impl Card {
    pub fn new(title: &str, content: &str) -> Self {
        Card {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    pub fn action(mut self, action: CardAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Emits the opening markup. Nested body content goes between
    /// [`OpenCard::html`] and [`OpenCard::end`].
    pub fn begin(&self, view: &mut dyn View) -> MaterializeResult<OpenCard<'_>> {
        let html = self.opening_html(view)?;
        Ok(OpenCard { card: self, html })
    }

    fn encode_title(&self) -> bool {
        self.encode_title.unwrap_or(self.encode_labels)
    }

    fn title_html(&self, in_content: bool) -> MaterializeResult<String> {
        let Some(title) = &self.title else {
            return Ok(String::new());
        };
        self.title_options.validate()?;
        let mut attrs = Attributes::class("card-title").merged(&self.title_options);
        let mut text = html::encode_if(title, self.encode_title());
        if self.reveal.is_some() && in_content {
            attrs.add_class("activator");
            text.push_str(&html::icon("more_vert", &Attributes::class("right")));
        }
        Ok(html::tag("span", &text, &attrs))
    }

    fn image_html(&self, view: &mut dyn View) -> MaterializeResult<String> {
        let Some(image) = &self.image else {
            return Ok(String::new());
        };
        let url = require(&image.url, "Card", "image.url")?;
        image.options.validate()?;
        image.container_options.validate()?;

        let mut container = Attributes::class("card-image").merged(&image.container_options);
        let mut img_attrs = image.options.clone();
        if self.reveal.is_some() {
            container.add_class("waves-effect waves-block waves-light");
            img_attrs.add_class("activator");
        }

        let mut inner = html::img(url, &img_attrs);
        if self.title_position == CardTitlePos::Image {
            inner.push_str(&self.title_html(false)?);
        }
        if let Some(fab) = &self.fab {
            let halfway = Attributes::class("halfway-fab").merged(&fab.options);
            let fab = fab.clone().options(halfway);
            inner.push_str(&fab.render(view)?);
        }
        Ok(html::tag("div", &inner, &container))
    }

    fn opening_html(&self, view: &mut dyn View) -> MaterializeResult<String> {
        self.column_options.validate()?;
        self.card_options.validate()?;
        self.content_options.validate()?;
        if self.fab.is_some() && self.image.is_none() {
            return Err(MaterializeError::InvalidOption {
                widget: "Card".to_string(),
                option: "fab".to_string(),
                reason: "a floating button needs an image to sit on".to_string(),
            });
        }

        let base = WidgetBase::init("Card", &self.options, view)?;
        let mut card_attrs = Attributes::class("card").merged(&self.card_options);
        if self.horizontal {
            card_attrs.add_class("horizontal");
        }

        let mut lines = vec![
            html::begin_grid_row(base.options()),
            html::begin_grid_col(&self.column_options),
            html::begin_tag("div", &card_attrs),
        ];
        let image = self.image_html(view)?;
        if !image.is_empty() {
            lines.push(image);
        }
        if self.horizontal {
            lines.push(html::begin_tag("div", &Attributes::class("card-stacked")));
        }
        lines.push(html::begin_tag(
            "div",
            &Attributes::class("card-content").merged(&self.content_options),
        ));
        if self.title_position == CardTitlePos::Content || self.image.is_none() {
            let title = self.title_html(true)?;
            if !title.is_empty() {
                lines.push(title);
            }
        }
        Ok(lines.join("\n"))
    }

    fn actions_html(&self, view: &mut dyn View) -> MaterializeResult<String> {
        self.action_options.validate()?;
        let mut links = Vec::with_capacity(self.actions.len());
        let mut uses_icons = false;
        for action in &self.actions {
            let label = require(&action.label, "Card", "actions.label")?;
            action.options.validate()?;
            let mut label = html::encode_if(label, action.encode.unwrap_or(self.encode_labels));
            if let Some(icon) = &action.icon {
                uses_icons = true;
                label = format!("{}{}", icon.render("Card", &Attributes::new())?, label);
            }
            links.push(html::a(&label, Some(action.url.as_deref().unwrap_or("#")), &action.options));
        }
        if uses_icons {
            view.register_bundle(EXTRA_BUNDLE)?;
        }
        Ok(html::tag(
            "div",
            &links.join("\n"),
            &Attributes::class("card-action").merged(&self.action_options),
        ))
    }

    fn reveal_html(&self, reveal: &CardReveal) -> MaterializeResult<String> {
        reveal.options.validate()?;
        let title = reveal.title.as_ref().or(self.title.as_ref());
        let mut heading = match title {
            Some(title) => html::encode_if(title, self.encode_title()),
            None => String::new(),
        };
        heading.push_str(&html::icon("close", &Attributes::class("right")));
        let heading = html::tag("span", &heading, &Attributes::class("card-title"));
        Ok(html::tag(
            "div",
            &format!("{}\n{}", heading, reveal.content),
            &Attributes::class("card-reveal").merged(&reveal.options),
        ))
    }

    fn closing_html(&self, view: &mut dyn View) -> MaterializeResult<String> {
        let mut lines = Vec::new();
        if let Some(content) = &self.content {
            lines.push(content.clone());
        }
        lines.push(html::end_tag("div"));
        if !self.actions.is_empty() {
            lines.push(self.actions_html(view)?);
        }
        if self.horizontal {
            lines.push(html::end_tag("div"));
        }
        if let Some(reveal) = &self.reveal {
            lines.push(self.reveal_html(reveal)?);
        }
        lines.push(html::end_tag("div"));
        lines.push(html::end_grid_col());
        lines.push(html::end_grid_row());
        Ok(lines.join("\n"))
    }
}

impl Widget for Card {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        let open = self.begin(view)?;
        let opening = open.html().to_string();
        let closing = open.end(view)?;
        Ok(format!("{}\n{}", opening, closing))
    }
}
