use std::fmt::Debug;

/// A closed, named set of constants, each with a distinct integer
/// discriminant assigned in declaration order.
///
/// Implemented by every enumerated domain type that crosses the wire;
/// normally generated through [`wire_enum!`](crate::wire_enum), not written
/// by hand. Discriminants are `i16`, matching the storage convention for
/// enumerated columns elsewhere in the backend.
pub trait WireEnum: Copy + Eq + Debug + Send + Sync + 'static {
    /// Stable identifier used for policy lookup and error reporting.
    const TYPE_NAME: &'static str;

    /// Declared constants in declaration order as `(name, discriminant)`.
    const VARIANTS: &'static [(&'static str, i16)];

    /// Returns the declared (PascalCase) name of this constant.
    fn name(self) -> &'static str;

    /// Returns the integer discriminant of this constant.
    fn discriminant(self) -> i16;

    /// Maps a discriminant back to its constant, if one is declared for it.
    fn from_discriminant(discriminant: i16) -> Option<Self>;

    /// Case-insensitive name lookup. Covers the exact, PascalCase and
    /// lowerCamelCase spellings accepted on reads.
    fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .and_then(|(_, discriminant)| Self::from_discriminant(*discriminant))
    }

    /// Returns all declared constants in declaration order.
    fn all() -> Vec<Self> {
        Self::VARIANTS
            .iter()
            .filter_map(|(_, discriminant)| Self::from_discriminant(*discriminant))
            .collect()
    }
}

/// Declares an enumerated wire type: the enum itself, its [`WireEnum`] impl
/// and a `Display` impl rendering the declared name.
///
/// ```
/// pressmill_codec::wire_enum! {
///     /// Publication lifecycle of a page.
///     pub enum PageStatus {
///         Draft = 0,
///         Published = 1,
///         Archived = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $discriminant:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i16)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $discriminant,
            )+
        }

        impl $crate::wire::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [(&'static str, i16)] = &[
                $((stringify!($variant), $discriminant),)+
            ];

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            #[inline]
            fn discriminant(self) -> i16 {
                self as i16
            }

            fn from_discriminant(discriminant: i16) -> Option<Self> {
                match discriminant {
                    $($discriminant => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::wire::WireEnum::name(*self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    wire_enum! {
        pub enum Fixture {
            Alpha = 0,
            BetaGamma = 1,
        }
    }

    #[test]
    fn variant_table_in_declaration_order() {
        assert_eq!(Fixture::TYPE_NAME, "Fixture");
        assert_eq!(Fixture::VARIANTS, &[("Alpha", 0), ("BetaGamma", 1)]);
    }

    #[test]
    fn discriminant_round_trip() {
        for constant in Fixture::all() {
            assert_eq!(
                Fixture::from_discriminant(constant.discriminant()),
                Some(constant)
            );
        }
        assert_eq!(Fixture::from_discriminant(7), None);
    }

    #[test]
    fn name_lookup_ignores_case() {
        assert_eq!(Fixture::from_name_ignore_case("alpha"), Some(Fixture::Alpha));
        assert_eq!(
            Fixture::from_name_ignore_case("BETAGAMMA"),
            Some(Fixture::BetaGamma)
        );
        assert_eq!(Fixture::from_name_ignore_case("delta"), None);
    }

    #[test]
    fn display_renders_declared_name() {
        assert_eq!(Fixture::BetaGamma.to_string(), "BetaGamma");
    }
}
