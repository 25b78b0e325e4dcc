//! Flag vocabularies shared with the emulated client library.
//!
//! Option flags ([`CurlOpt`]) name configuration knobs and info flags
//! ([`CurlInfo`]) name pieces of post-transfer metadata. Both carry the
//! numeric codes of the emulated library so values coming from foreign
//! callers can be mapped with `from_code`. Codes outside the known set
//! are kept as `Other(code)` and travel through the shim untouched.
//!
//! # Examples
//!
//! ```rust
//! use curl_shim::flags::{field_name, CurlInfo, CurlOpt};
//!
//! assert_eq!(CurlOpt::from_code(10002), CurlOpt::Url);
//! assert_eq!(CurlOpt::Url.name(), "CURLOPT_URL");
//! assert_eq!(field_name(CurlInfo::HttpCode), Some("http_code"));
//! ```

/// Declares a flag enum backed by the emulated library's numeric codes.
///
/// Equality, hashing and ordering go through `code()`, so a flag built as
/// `Other(n)` for a known `n` is the same key as its named variant.
macro_rules! curl_flags {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident (unknown = $unknown:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $text:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A code outside the known vocabulary.
            Other(i32),
        }

        impl $name {
            /// Numeric code used by the emulated library.
            pub fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)*
                    Self::Other(code) => code,
                }
            }

            /// Maps a numeric code onto its named variant when one exists.
            pub fn from_code(code: i32) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    other => Self::Other(other),
                }
            }

            /// Canonical constant name, as spelled by the emulated library.
            pub fn name(self) -> &'static str {
                match Self::from_code(self.code()) {
                    $(Self::$variant => $text,)*
                    Self::Other(_) => $unknown,
                }
            }

            /// Returns the named variant for this flag's code.
            pub fn canonical(self) -> Self {
                Self::from_code(self.code())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.code() == other.code()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.code().hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.code().cmp(&other.code())
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                Self::from_code(code)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use curl_flags;

pub mod info;
pub mod option;

pub use info::{field_name, CurlInfo, INFO_NAMES};
pub use option::CurlOpt;
