//! The six kinds of selector part and the rules that order them.

use strum_macros::{Display, EnumString};

use crate::error::SelectorError;

/// A selector part kind.
///
/// Declaration order is the only legal append order within one compound
/// selector:
///
/// ```text
/// element#id.class[attr]:pseudo-class::pseudo-element
///           \----/\----/\----------/
///           may occur several times
/// ```
///
/// The derived `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    /// Type selector, written bare: `div`.
    Element,
    /// `#main`
    Id,
    /// `.container`
    Class,
    /// `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,
    /// `:focus`
    PseudoClass,
    /// `::before`
    PseudoElement,
}

impl Kind {
    /// Every kind, in ordinal order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Kinds that may appear at most once per chain.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Literal text written before the part's value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Literal text written after the part's value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// The token this kind contributes for `value`, e.g. `Kind::Id.render("x") == "#x"`.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.write_to(&mut out, value);
        out
    }

    pub(crate) fn write_to(self, out: &mut String, value: &str) {
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
    }

    /// Check that a part of this kind may directly follow `previous`.
    ///
    /// Only the immediate predecessor is consulted. Since every accepted
    /// step is non-decreasing, the whole chain stays non-decreasing, and a
    /// repeated singleton can only ever sit right after itself.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::OrderViolation`] if `previous` ranks after `self`.
    /// - [`SelectorError::DuplicateSingleton`] if `previous == self` and
    ///   `self` is a singleton kind.
    pub fn validate_after(self, previous: Option<Self>) -> Result<(), SelectorError> {
        let Some(previous) = previous else {
            return Ok(());
        };
        if previous > self {
            return Err(SelectorError::OrderViolation {
                previous,
                next: self,
            });
        }
        if previous == self && self.is_singleton() {
            return Err(SelectorError::DuplicateSingleton(self));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for pair in Kind::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_render_tokens() {
        assert_eq!(Kind::Element.render("a"), "a");
        assert_eq!(Kind::Id.render("x"), "#x");
        assert_eq!(Kind::Class.render("c"), ".c");
        assert_eq!(Kind::Attribute.render("href"), "[href]");
        assert_eq!(Kind::PseudoClass.render("focus"), ":focus");
        assert_eq!(Kind::PseudoElement.render("after"), "::after");
    }

    #[test]
    fn test_names_round_trip_through_strum() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
        assert_eq!("attr".parse::<Kind>(), Ok(Kind::Attribute));
        assert_eq!(Kind::PseudoClass.to_string(), "pseudo-class");
        assert!("tag".parse::<Kind>().is_err());
    }

    #[test]
    fn test_validate_after_table() {
        for next in Kind::ALL {
            assert_eq!(next.validate_after(None), Ok(()));
            for previous in Kind::ALL {
                let result = next.validate_after(Some(previous));
                if previous > next {
                    assert_eq!(result, Err(SelectorError::OrderViolation { previous, next }));
                } else if previous == next && next.is_singleton() {
                    assert_eq!(result, Err(SelectorError::DuplicateSingleton(next)));
                } else {
                    assert_eq!(result, Ok(()));
                }
            }
        }
    }
}
