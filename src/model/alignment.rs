//! Cell alignment enumerations and their attribute tokens.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Horizontal alignment of a table cell (`align` attribute).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// Left alignment
    #[default]
    Left,
    /// Centered
    Center,
    /// Right alignment
    Right,
}

impl HorizontalAlignment {
    /// All alignments, in declaration order.
    pub const ALL: [HorizontalAlignment; 3] = [Self::Left, Self::Center, Self::Right];

    /// Attribute token for this alignment.
    pub fn to_token(self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
        }
    }
}

/// Vertical alignment of a table cell (`valign` attribute).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top alignment
    #[default]
    Top,
    /// Middle alignment
    Middle,
    /// Bottom alignment
    Bottom,
}

impl VerticalAlignment {
    /// All alignments, in declaration order.
    pub const ALL: [VerticalAlignment; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Attribute token for this alignment.
    pub fn to_token(self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Middle => "middle",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}

/// Map a horizontal alignment to its `align` attribute token.
pub fn to_horizontal_token(alignment: HorizontalAlignment) -> &'static str {
    alignment.to_token()
}

/// Map a vertical alignment to its `valign` attribute token.
pub fn to_vertical_token(alignment: VerticalAlignment) -> &'static str {
    alignment.to_token()
}

impl FromStr for HorizontalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.to_token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unsupported_alignment(Self::KIND, s))
    }
}

impl FromStr for VerticalAlignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.to_token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unsupported_alignment(Self::KIND, s))
    }
}

/// Shared parsing surface of the two alignment enumerations.
pub(crate) trait Alignment:
    Copy + Default + FromStr<Err = Error> + TryFrom<i32, Error = Error> + 'static
{
    /// Enumeration name reported in [`Error::UnsupportedAlignment`].
    const KIND: &'static str;
}

impl Alignment for HorizontalAlignment {
    const KIND: &'static str = "HorizontalAlignment";
}

impl Alignment for VerticalAlignment {
    const KIND: &'static str = "VerticalAlignment";
}

/// Accepts a token (`"center"`), a numeric discriminant (`1`) or `null`.
struct AlignmentVisitor<T>(PhantomData<T>);

impl<'de, T: Alignment> Visitor<'de> for AlignmentVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} name or numeric value", T::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<T, E> {
        v.parse().map_err(serde_error)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<T, E> {
        i32::try_from(v)
            .map_err(|_| Error::unsupported_alignment(T::KIND, v))
            .and_then(T::try_from)
            .map_err(serde_error)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<T, E> {
        i32::try_from(v)
            .map_err(|_| Error::unsupported_alignment(T::KIND, v))
            .and_then(T::try_from)
            .map_err(serde_error)
    }

    // `null` means unset, same as a missing field.
    fn visit_unit<E: de::Error>(self) -> std::result::Result<T, E> {
        Ok(T::default())
    }
}

/// Carry an alignment failure through serde as `Unsupported <kind>: "<value>"`.
///
/// The value is written as a JSON string literal so that
/// [`parse_serde_message`] recovers it exactly, whatever it contains.
fn serde_error<E: de::Error>(err: Error) -> E {
    match err {
        Error::UnsupportedAlignment { kind, value } => {
            E::custom(format_args!("Unsupported {}: {}", kind, Value::String(value)))
        }
        other => E::custom(other),
    }
}

/// Recover an alignment failure from a serde error message.
pub(crate) fn parse_serde_message(message: &str) -> Option<Error> {
    [HorizontalAlignment::KIND, VerticalAlignment::KIND]
        .into_iter()
        .find_map(|kind| {
            let rest = message.strip_prefix("Unsupported ")?.strip_prefix(kind)?;
            let literal = rest.strip_prefix(": ")?;
            // Only the leading string literal; serde may append a position.
            let value = serde_json::Deserializer::from_str(literal)
                .into_iter::<String>()
                .next()?
                .ok()?;
            Some(Error::unsupported_alignment(kind, value))
        })
}

impl<'de> Deserialize<'de> for HorizontalAlignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(AlignmentVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for VerticalAlignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(AlignmentVisitor(PhantomData))
    }
}

/// Numeric discriminants: `Left = 0`, `Center = 1`, `Right = 2`.
impl TryFrom<i32> for HorizontalAlignment {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| Error::unsupported_alignment(Self::KIND, value))
    }
}

/// Numeric discriminants: `Top = 0`, `Middle = 1`, `Bottom = 2`.
impl TryFrom<i32> for VerticalAlignment {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| Error::unsupported_alignment(Self::KIND, value))
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_token())
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_tokens() {
        assert_eq!(to_horizontal_token(HorizontalAlignment::Left), "left");
        assert_eq!(to_horizontal_token(HorizontalAlignment::Center), "center");
        assert_eq!(to_horizontal_token(HorizontalAlignment::Right), "right");
    }

    #[test]
    fn test_vertical_tokens() {
        assert_eq!(to_vertical_token(VerticalAlignment::Top), "top");
        assert_eq!(to_vertical_token(VerticalAlignment::Middle), "middle");
        assert_eq!(to_vertical_token(VerticalAlignment::Bottom), "bottom");
    }

    #[test]
    fn test_parse_round_trips_every_token() {
        for a in HorizontalAlignment::ALL {
            assert_eq!(a.to_token().parse::<HorizontalAlignment>().unwrap(), a);
        }
        for a in VerticalAlignment::ALL {
            assert_eq!(a.to_token().parse::<VerticalAlignment>().unwrap(), a);
        }
        assert_eq!(
            " Center ".parse::<HorizontalAlignment>().unwrap(),
            HorizontalAlignment::Center
        );
    }

    #[test]
    fn test_unknown_token_is_unsupported() {
        let err = "justify".parse::<HorizontalAlignment>().unwrap_err();
        match err {
            Error::UnsupportedAlignment { kind, value } => {
                assert_eq!(kind, "HorizontalAlignment");
                assert_eq!(value, "justify");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = "baseline".parse::<VerticalAlignment>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedAlignment {
                kind: "VerticalAlignment",
                ..
            }
        ));
    }

    #[test]
    fn test_numeric_discriminants() {
        assert_eq!(
            HorizontalAlignment::try_from(2).unwrap(),
            HorizontalAlignment::Right
        );
        assert_eq!(
            VerticalAlignment::try_from(1).unwrap(),
            VerticalAlignment::Middle
        );
        assert!(HorizontalAlignment::try_from(3).is_err());
        assert!(VerticalAlignment::try_from(-1).is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&VerticalAlignment::Middle).unwrap();
        assert_eq!(json, "\"middle\"");

        let parsed: HorizontalAlignment = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(parsed, HorizontalAlignment::Right);

        let parsed: VerticalAlignment = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, VerticalAlignment::Bottom);

        let err = serde_json::from_str::<HorizontalAlignment>("\"sideways\"").unwrap_err();
        assert!(err
            .to_string()
            .starts_with(r#"Unsupported HorizontalAlignment: "sideways""#));

        let err = serde_json::from_str::<VerticalAlignment>("9").unwrap_err();
        assert!(err.to_string().starts_with(r#"Unsupported VerticalAlignment: "9""#));
    }

    #[test]
    fn test_parse_serde_message() {
        let message = r#"Unsupported VerticalAlignment: "a \"b\" at line 3 column 4" at line 1 column 60"#;
        match parse_serde_message(message) {
            Some(Error::UnsupportedAlignment { kind, value }) => {
                assert_eq!(kind, "VerticalAlignment");
                assert_eq!(value, r#"a "b" at line 3 column 4"#);
            }
            other => panic!("unexpected: {other:?}"),
        }

        assert!(parse_serde_message("missing field `rows`").is_none());
        assert!(parse_serde_message("Unsupported HorizontalAlignment: bare").is_none());
    }

    #[test]
    fn test_null_is_default() {
        let parsed: HorizontalAlignment = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, HorizontalAlignment::Left);

        let parsed: VerticalAlignment = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, VerticalAlignment::Top);
    }
}
