//! Normalization of diff inputs.
//!
//! Callers may hand over text, a number, a boolean, or nothing at all. All of
//! these are converted to plain text before any diffing happens.
//!
//! ```
//! use line_diff_view::input::TextInput;
//!
//! assert_eq!(TextInput::from(42).into_text(), "42");
//! assert_eq!(TextInput::from(true).into_text(), "true");
//! assert_eq!(TextInput::from(None::<&str>).into_text(), "");
//! assert_eq!(TextInput::from("as is\n").into_text(), "as is\n");
//! ```

use std::borrow::Cow;

/// One side of a diff, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum TextInput<'a> {
    Text(Cow<'a, str>),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    /// Kept apart from `Float` so it prints in its own shortest form
    Float32(f32),
    Bool(bool),
    /// Treated as empty text
    Absent,
}

impl<'a> TextInput<'a> {
    /// Convert to text: text passes through untouched, scalars use their
    /// canonical display form, and an absent input is empty.
    #[must_use]
    pub fn into_text(self) -> Cow<'a, str> {
        match self {
            TextInput::Text(text) => text,
            TextInput::Integer(n) => Cow::Owned(n.to_string()),
            TextInput::Unsigned(n) => Cow::Owned(n.to_string()),
            TextInput::Float(n) => Cow::Owned(n.to_string()),
            TextInput::Float32(n) => Cow::Owned(n.to_string()),
            TextInput::Bool(b) => Cow::Owned(b.to_string()),
            TextInput::Absent => Cow::Borrowed(""),
        }
    }
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(text: &'a str) -> Self {
        TextInput::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(text: &'a String) -> Self {
        TextInput::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for TextInput<'_> {
    fn from(text: String) -> Self {
        TextInput::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for TextInput<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        TextInput::Text(text)
    }
}

macro_rules! impl_from_scalar {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for TextInput<'_> {
                fn from(value: $ty) -> Self {
                    TextInput::$variant(<$wide>::from(value))
                }
            }
        )+
    };
}

impl_from_scalar!(Integer as i64: i8, i16, i32, i64);
impl_from_scalar!(Unsigned as u64: u8, u16, u32, u64);
impl_from_scalar!(Float as f64: f64);
impl_from_scalar!(Float32 as f32: f32);

impl From<bool> for TextInput<'_> {
    fn from(value: bool) -> Self {
        TextInput::Bool(value)
    }
}

impl<'a, T> From<Option<T>> for TextInput<'a>
where
    T: Into<TextInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(TextInput::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn text_passes_through_borrowed() {
        let text = TextInput::from("line 1\nline 2\n").into_text();
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "line 1\nline 2\n");
    }

    #[test]
    fn owned_text_passes_through() {
        assert_eq!(TextInput::from(String::from("owned")).into_text(), "owned");
    }

    #[test]
    fn integers_use_decimal_form() {
        assert_eq!(TextInput::from(42).into_text(), "42");
        assert_eq!(TextInput::from(-7i64).into_text(), "-7");
        assert_eq!(TextInput::from(u64::MAX).into_text(), "18446744073709551615");
    }

    #[test]
    fn floats_drop_trailing_zero_fraction() {
        assert_eq!(TextInput::from(42.0).into_text(), "42");
        assert_eq!(TextInput::from(1.5f32).into_text(), "1.5");
    }

    #[test]
    fn f32_is_not_widened_before_printing() {
        assert_eq!(TextInput::from(0.1f32).into_text(), "0.1");
        assert_eq!(TextInput::from(0.1f64).into_text(), "0.1");
        assert_eq!(TextInput::from(Some(2.2f32)).into_text(), "2.2");
    }

    #[test]
    fn booleans_are_lowercase() {
        assert_eq!(TextInput::from(false).into_text(), "false");
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(TextInput::Absent.into_text(), "");
        assert_eq!(TextInput::from(None::<i32>).into_text(), "");
        assert_eq!(TextInput::from(Some("present")).into_text(), "present");
    }
}
