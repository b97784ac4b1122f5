//! Macro for defining catalogue identifier newtypes.
//!
//! Every identifier shares one invariant (non-blank, surrounding whitespace
//! trimmed) and one set of trait impls, so they are generated from a single
//! invocation per type.

/// Define a strongly-typed, non-blank identifier newtype.
///
/// Generates:
/// - The struct with `Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize`
/// - Custom `Deserialize` accepting strings and integers, rejecting blanks
/// - `new()` (debug-asserts non-blank), `try_new()`, `as_str()`
/// - `Display`, `AsRef<str>`, `Borrow<str>`, `FromStr`
/// - `PartialEq<str>`, `PartialEq<&str>`
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                // Backends emit ids both as strings and as integers.
                let raw = <crate::serde_helpers::StringOrNumber as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                $Name::try_new(raw.into_string())
                    .ok_or_else(|| serde::de::Error::custom(concat!(stringify!($Name), " must not be blank")))
            }
        }

        impl $Name {
            /// Create a new id. Blank input is a bug in the caller.
            ///
            /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
            pub fn new(id: impl Into<String>) -> Self {
                let s = id.into();
                debug_assert!(!s.trim().is_empty(), concat!(stringify!($Name), " must not be blank"));
                Self(s.trim().to_string())
            }

            /// Try to create a new id, returning `None` if the input is blank.
            pub fn try_new(id: impl Into<String>) -> Option<Self> {
                let s = id.into();
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Self(trimmed.to_string()))
                }
            }

            /// Return the underlying id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str { &self.0 }
        }

        impl std::str::FromStr for $Name {
            type Err = &'static str;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $Name::try_new(s).ok_or(concat!(stringify!($Name), " must not be blank"))
            }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool { self.0 == *other }
        }
    };
}

pub(crate) use define_id;
