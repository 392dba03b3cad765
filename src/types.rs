//! Closed sets of Materialize option values.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MaterializeError, MaterializeResult};

/// Button styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Raised,
    Floating,
    Flat,
}

impl ButtonType {
    pub const ALL: &'static [ButtonType] = &[ButtonType::Raised, ButtonType::Floating, ButtonType::Flat];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Raised => "raised",
            ButtonType::Floating => "floating",
            ButtonType::Flat => "flat",
        }
    }

    /// The structural class Materialize expects for this style.
    pub fn css_class(self) -> &'static str {
        match self {
            ButtonType::Raised => "btn",
            ButtonType::Floating => "btn-floating",
            ButtonType::Flat => "btn-flat",
        }
    }
}

/// Element sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Tiny,
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: &'static [Size] = &[Size::Tiny, Size::Small, Size::Medium, Size::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Tiny => "tiny",
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

/// Horizontal placement of an icon relative to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
}

impl Position {
    pub const ALL: &'static [Position] = &[Position::Left, Position::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

/// Waves click effects. `Effect` only enables the effect, every other
/// variant also selects a color or shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waves {
    Effect,
    Teal,
    Light,
    Red,
    Yellow,
    Orange,
    Purple,
    Green,
    Circle,
    Block,
}

impl Waves {
    pub const ALL: &'static [Waves] = &[
        Waves::Effect,
        Waves::Teal,
        Waves::Light,
        Waves::Red,
        Waves::Yellow,
        Waves::Orange,
        Waves::Purple,
        Waves::Green,
        Waves::Circle,
        Waves::Block,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Waves::Effect => "effect",
            Waves::Teal => "teal",
            Waves::Light => "light",
            Waves::Red => "red",
            Waves::Yellow => "yellow",
            Waves::Orange => "orange",
            Waves::Purple => "purple",
            Waves::Green => "green",
            Waves::Circle => "circle",
            Waves::Block => "block",
        }
    }

    pub fn css_class(self) -> String {
        format!("waves-{}", self.as_str())
    }
}

/// Breadcrumb looks. Anything but `Default` needs the extra stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreadcrumbType {
    #[default]
    Default,
    Clean,
    Flat,
}

impl BreadcrumbType {
    pub const ALL: &'static [BreadcrumbType] =
        &[BreadcrumbType::Default, BreadcrumbType::Clean, BreadcrumbType::Flat];

    pub fn as_str(self) -> &'static str {
        match self {
            BreadcrumbType::Default => "default",
            BreadcrumbType::Clean => "clean",
            BreadcrumbType::Flat => "flat",
        }
    }
}

/// Where a card renders its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTitlePos {
    /// Inside the `card-content` section.
    #[default]
    Content,
    /// Over the image, inside `card-image`.
    Image,
}

impl CardTitlePos {
    pub const ALL: &'static [CardTitlePos] = &[CardTitlePos::Content, CardTitlePos::Image];

    pub fn as_str(self) -> &'static str {
        match self {
            CardTitlePos::Content => "content",
            CardTitlePos::Image => "image",
        }
    }
}

fn parse_enum<T: Copy>(
    value: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
    property: &str,
) -> MaterializeResult<T> {
    all.iter()
        .copied()
        .find(|v| as_str(*v) == value)
        .ok_or_else(|| MaterializeError::InvalidEnum {
            property: property.to_string(),
            value: value.to_string(),
            expected: all.iter().map(|v| as_str(*v)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for ButtonType {
    type Err = MaterializeError;

    fn from_str(s: &str) -> MaterializeResult<Self> {
        parse_enum(s, Self::ALL, Self::as_str, "type")
    }
}

impl FromStr for Size {
    type Err = MaterializeError;

    fn from_str(s: &str) -> MaterializeResult<Self> {
        parse_enum(s, Self::ALL, Self::as_str, "size")
    }
}

impl FromStr for Position {
    type Err = MaterializeError;

    fn from_str(s: &str) -> MaterializeResult<Self> {
        parse_enum(s, Self::ALL, Self::as_str, "position")
    }
}

impl FromStr for Waves {
    type Err = MaterializeError;

    fn from_str(s: &str) -> MaterializeResult<Self> {
        parse_enum(s, Self::ALL, Self::as_str, "waves")
    }
}

impl FromStr for BreadcrumbType {
    type Err = MaterializeError;

    fn from_str(s: &str) -> MaterializeResult<Self> {
        parse_enum(s, Self::ALL, Self::as_str, "type")
    }
}

impl FromStr for CardTitlePos {
    type Err = MaterializeError;

    fn from_str(s: &str) -> MaterializeResult<Self> {
        parse_enum(s, Self::ALL, Self::as_str, "titlePosition")
    }
}

/// Accepts either a single value or a list (`waves: light` or
/// `waves: [light, circle]`).
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(v)) => vec![v],
        Some(OneOrMany::Many(v)) => v,
    })
}
