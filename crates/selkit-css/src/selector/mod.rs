//! Persistent selector values.
//!
//! A [`SelectorState`] is never modified after construction. Every append
//! returns a new value and leaves its receiver untouched, so one prefix can
//! be shared by any number of derived selectors:
//!
//! ```
//! use selkit_css::builder;
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let link = builder::element("a")?;
//! let hovered = link.pseudo_class("hover")?;
//! let visited = link.pseudo_class("visited")?;
//!
//! assert_eq!(link.stringify(), "a");
//! assert_eq!(hovered.stringify(), "a:hover");
//! assert_eq!(visited.stringify(), "a:visited");
//! # Ok(())
//! # }
//! ```

mod kind;

use std::fmt;
use std::str::FromStr;

pub use kind::Kind;

use crate::error::{PartParseError, SelectorError};

/// An immutable, partially or fully built selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorState {
    /// Text accumulated so far.
    text: String,
    /// Kind of the most recent atomic append; `None` when empty or combined.
    last_kind: Option<Kind>,
}

impl SelectorState {
    /// The empty selector every chain starts from.
    pub const EMPTY: Self = Self {
        text: String::new(),
        last_kind: None,
    };

    /// Append a part of `kind`, returning the extended selector.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] if `kind` may not follow the current last
    /// part (see [`Kind::validate_after`]).
    pub fn append(&self, kind: Kind, value: &str) -> Result<Self, SelectorError> {
        kind.validate_after(self.last_kind)?;

        let mut text =
            String::with_capacity(self.text.len() + value.len() + kind.prefix().len() + 1);
        text.push_str(&self.text);
        kind.write_to(&mut text, value);

        Ok(Self {
            text,
            last_kind: Some(kind),
        })
    }

    /// Append a type selector: `div`.
    ///
    /// # Errors
    ///
    /// Fails if any part is already present.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Kind::Element, value)
    }

    /// Append an id selector: `#value`.
    ///
    /// # Errors
    ///
    /// Fails after an id or any later-stage part.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Kind::Id, value)
    }

    /// Append a class selector: `.value`.
    ///
    /// # Errors
    ///
    /// Fails after an attribute, pseudo-class or pseudo-element.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Kind::Class, value)
    }

    /// Append an attribute selector: `[value]`. The value is not checked.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attribute(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Kind::Attribute, value)
    }

    /// Append a pseudo-class: `:value`.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Kind::PseudoClass, value)
    }

    /// Append a pseudo-element: `::value`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(Kind::PseudoElement, value)
    }

    /// Join `self` and `right` with a combinator. See [`combine`].
    #[must_use]
    pub fn combine(&self, combinator: impl AsRef<str>, right: &Self) -> Self {
        combine(self, combinator, right)
    }

    /// Append every part in order, stopping at the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected append.
    pub fn extend<'a, I>(&self, parts: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = (Kind, &'a str)>,
    {
        parts
            .into_iter()
            .try_fold(self.clone(), |state, (kind, value)| state.append(kind, value))
    }

    /// Build a selector from parts, starting from [`SelectorState::EMPTY`].
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected append.
    pub fn parse_chain(parts: &[(Kind, &str)]) -> Result<Self, SelectorError> {
        Self::EMPTY.extend(parts.iter().copied())
    }

    /// The selector text.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// Kind of the most recent atomic append.
    ///
    /// `None` for the empty selector and for the result of [`combine`].
    #[must_use]
    pub const fn last_kind(&self) -> Option<Kind> {
        self.last_kind
    }

    /// Whether no text has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SelectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The conventional combinators.
///
/// [`combine`] accepts any text; these are the four it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `A B`: B is a descendant of A.
    Descendant,
    /// `A > B`: B is a child of A.
    Child,
    /// `A + B`: B immediately follows A.
    NextSibling,
    /// `A ~ B`: B follows A.
    SubsequentSibling,
}

impl Combinator {
    /// Token as passed to [`combine`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// The combinator spelled by `token`, if it is one of the four.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join two selectors: `left + " " + combinator + " " + right`.
///
/// No validation takes place and the combinator is written verbatim, so a
/// descendant combinator (`" "`) yields three spaces between the sides.
/// Both raw text and a [`Combinator`] are accepted.
///
/// The result has no last kind, so any part may be appended to it.
#[must_use]
pub fn combine(
    left: &SelectorState,
    combinator: impl AsRef<str>,
    right: &SelectorState,
) -> SelectorState {
    let combinator = combinator.as_ref();
    let mut text = String::with_capacity(left.text.len() + combinator.len() + right.text.len() + 2);
    text.push_str(&left.text);
    text.push(' ');
    text.push_str(combinator);
    text.push(' ');
    text.push_str(&right.text);

    SelectorState {
        text,
        last_kind: None,
    }
}

/// One `kind=value` part, as written on a command line.
///
/// ```
/// use selkit_css::{Kind, Part};
///
/// let part: Part = "attr=href$=\".png\"".parse().unwrap();
/// assert_eq!(part.kind, Kind::Attribute);
/// assert_eq!(part.value, "href$=\".png\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Kind of the part.
    pub kind: Kind,
    /// Raw value; everything after the first `=`.
    pub value: String,
}

impl FromStr for Part {
    type Err = PartParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| PartParseError::MissingSeparator(s.to_string()))?;
        let kind = kind
            .trim()
            .parse::<Kind>()
            .map_err(|_| PartParseError::UnknownKind(kind.trim().to_string()))?;
        Ok(Self {
            kind,
            value: value.to_string(),
        })
    }
}
