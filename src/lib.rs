//! # materialize-ui
//!
//! Server-side rendering of [Materialize](https://materializecss.com) components.
//!
//! ## Features
//! - Widget templates: buttons, cards, tabs, collections, breadcrumbs,
//!   autocomplete inputs and model-bound forms
//! - Class-merging attribute dictionaries and an escaping markup emitter
//! - Asset bundle and inline script registration with de-duplication
//! - YAML configuration for pages and widget lists
//!
//! ## Example
//! ```ignore
//! use materialize_ui::{Button, Page, Position, Widget};
//!
//! let mut page = Page::default();
//! let html = Button::new("Save")
//!     .icon("save", Position::Left)
//!     .render(&mut page)?;
//!
//! let head = page.head_html();
//! let scripts = page.body_end_html();
//! ```
//!
//! ## Example: YAML document
//! ```ignore
//! use materialize_ui::{render_yaml, Page};
//!
//! let yaml = r#"
//! - Tabs:
//!     items:
//!       - { label: One, content: <p>First</p> }
//!       - { label: Two, content: <p>Second</p> }
//! "#;
//!
//! let mut page = Page::default();
//! let html = render_yaml(yaml, &mut page)?;
//! ```

pub mod assets;
pub mod attributes;
pub mod document;
pub mod error;
pub mod html;
pub mod model;
pub mod page;
pub mod settings;
pub mod types;
pub mod widget;
pub mod widgets;

// --- Core types ---
pub use attributes::{AttrValue, Attributes};
pub use error::{MaterializeError, MaterializeResult};
pub use page::{Page, ScriptPosition, View};
pub use settings::{Environment, Settings};
pub use types::{BreadcrumbType, ButtonType, CardTitlePos, Position, Size, Waves};
pub use widget::{ClientEvents, ClientOptions, IconSpec, Widget, WidgetBase};

// --- Assets ---
pub use assets::{AssetBundle, AssetFile};

// --- Forms ---
pub use model::{FormModel, ModelState};

// --- Widgets ---
pub use widgets::{
    ActiveField, ActiveForm, Autocomplete, BreadcrumbItem, BreadcrumbLink, Breadcrumbs, Button,
    Card, CardAction, CardImage, CardReveal, Collection, CollectionItem, OpenCard, OpenForm,
    SubmitButton, TabItem, Tabs, ValidationStateOn,
};

// --- Documents ---
pub use document::{parse_document, render_document, render_yaml, WidgetSpec};
