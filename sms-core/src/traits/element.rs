//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can travel
//! through an SMS stream as entry values.

/// Trait for types that can be stored as matrix entry values
///
/// Values are read from and written to a single whitespace-free token, so
/// every element type needs a parser and a `Display` rendering that round
/// trips through it.
pub trait MatrixElement: Clone + PartialEq + core::fmt::Display + Sized {
    /// Parse a value token, `None` if it is not a valid value
    fn parse_token(token: &str) -> Option<Self>;

    /// Whether this value is numerically zero
    ///
    /// Opaque element types have no notion of zero and always report `false`.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_numeric_element {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn parse_token(token: &str) -> Option<Self> {
                    token.parse::<$ty>().ok()
                }

                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_numeric_element! {
    f64 => 0.0,
    f32 => 0.0,
    i64 => 0,
    i32 => 0,
}

/// Opaque value token, carried through verbatim
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token(pub alloc::string::String);

#[cfg(feature = "alloc")]
impl Token {
    /// Borrow the raw token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "alloc")]
impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "alloc")]
impl MatrixElement for Token {
    fn parse_token(token: &str) -> Option<Self> {
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Token(alloc::string::String::from(token)))
    }

    fn is_zero(&self) -> bool {
        false
    }
}
