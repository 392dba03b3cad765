//! Widget templates.

mod active_field;
mod active_form;
mod autocomplete;
mod breadcrumbs;
mod button;
mod card;
mod collection;
mod tabs;

pub use active_field::{ActiveField, ErrorSource, FileInput, DEFAULT_TEMPLATE};
pub use active_form::{ActiveForm, FieldContext, OpenForm, ValidationStateOn};
pub use autocomplete::Autocomplete;
pub use breadcrumbs::{BreadcrumbItem, BreadcrumbLink, Breadcrumbs, HomeLink};
pub use button::{Button, SubmitButton};
pub use card::{Card, CardAction, CardImage, CardReveal, OpenCard};
pub use collection::{Avatar, AvatarImage, Collection, CollectionItem, Secondary};
pub use tabs::{TabItem, Tabs};
