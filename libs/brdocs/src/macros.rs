//! Macros for defining typed document numbers.

/// Macro to define a validated document newtype backed by a document module.
///
/// This generates a newtype wrapper around the raw digits with:
/// - A `PROFILE` constant pointing at the module's profile
/// - `parse()` / `parse_strict()` that only accept checksum-valid numbers
/// - `random()` to generate a fresh valid number
/// - `Display` (canonical form) and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations using the canonical form
///
/// # Example
///
/// ```ignore
/// define_document!(Cpf, cpf);
///
/// let cpf: Cpf = "111.444.777-35".parse()?;
/// assert_eq!(cpf.as_digits(), "11144477735");
/// ```
#[macro_export]
macro_rules! define_document {
    ($name:ident, $module:ident) => {
        /// A checksum-valid document number, stored as raw digits.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The profile for this document kind.
            pub const PROFILE: $crate::DocumentProfile = $crate::$module::PROFILE;

            /// Parses a number in any punctuation, requiring valid check digits.
            pub fn parse(s: &str) -> Result<Self, $crate::DocumentError> {
                $crate::$module::validate(s, $crate::Options::default()).map(Self)
            }

            /// Parses a number that must also be in canonical form.
            pub fn parse_strict(s: &str) -> Result<Self, $crate::DocumentError> {
                $crate::$module::validate(s, $crate::Options::STRICT).map(Self)
            }

            /// Generates a random valid number.
            #[must_use]
            pub fn random() -> Self {
                loop {
                    let raw = Self::PROFILE.make(None, false);
                    // a repeated-digit draw is checksum-valid but rejected by parse
                    if !Self::PROFILE.is_sequence(&raw) {
                        return Self(raw);
                    }
                }
            }

            /// Returns the raw digits.
            #[must_use]
            pub fn as_digits(&self) -> &str {
                &self.0
            }

            /// Consumes the value, returning the raw digits.
            #[must_use]
            pub fn into_digits(self) -> String {
                self.0
            }

            /// Returns the canonical punctuated form.
            #[must_use]
            pub fn formatted(&self) -> String {
                Self::PROFILE.format(&self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::DocumentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.formatted())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
