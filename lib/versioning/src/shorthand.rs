// Numeric shorthand, e.g. `1` for "1.0.0" and `1.5` for "1.5.0".

use crate::{Semver, VersioningError};

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Semver {
                fn from(value: $t) -> Self {
                    Semver::from_major(value.to_string())
                }
            }
        )*
    };
}

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Semver {
                type Error = VersioningError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    if value < 0 {
                        return Err(VersioningError::NegativeValue(value.to_string()));
                    }

                    Semver::parse(&value.to_string())
                }
            }
        )*
    };
}

/// The integer part of the float becomes the major and its fractional digits the minor.
/// `Display` for floats never uses exponent notation so the rendered text is always
/// `{int}` or `{int}.{fraction}`.
macro_rules! impl_try_from_float {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Semver {
                type Error = VersioningError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    if value < 0.0 {
                        return Err(VersioningError::NegativeValue(value.to_string()));
                    }

                    // abs turns -0.0 into 0.0
                    Semver::parse(&value.abs().to_string())
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_try_from_signed!(i8, i16, i32, i64, i128, isize);
impl_try_from_float!(f32, f64);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{ErrorKind, Semver, VersioningError};

    #[test]
    fn should_parse_int() {
        let version = Semver::try_from(1i64).unwrap();

        assert_eq!("1", version.major());
        assert_eq!("0", version.minor());
        assert_eq!("0", version.patch());
        assert!(version.prerelease().is_empty());
        assert!(version.build().is_empty());
    }

    #[test]
    fn should_reject_negative_int() {
        assert_eq!(
            Err(VersioningError::NegativeValue("-11".to_string())),
            Semver::try_from(-11i64)
        );
        assert_eq!(
            ErrorKind::NegativeValue,
            Semver::try_from(i128::MIN).unwrap_err().kind()
        );
    }

    #[test]
    fn should_parse_unsigned() {
        assert_eq!("18446744073709551615.0.0", Semver::from(u64::MAX).to_string());
        assert_eq!(Semver::parse("7").unwrap(), Semver::from(7u8));
    }

    #[test]
    fn should_parse_float() {
        let version = Semver::try_from(1.5637881234f64).unwrap();

        assert_eq!("1", version.major());
        assert_eq!("5637881234", version.minor());
        assert_eq!("0", version.patch());
        assert!(version.prerelease().is_empty());
        assert!(version.build().is_empty());
    }

    #[test_case(2.0 => "2.0.0".to_string(); "whole")]
    #[test_case(0.25 => "0.25.0".to_string(); "fraction")]
    #[test_case(-0.0 => "0.0.0".to_string(); "negative zero")]
    #[test_case(0.0000001 => "0.0000001.0".to_string(); "small")]
    #[test_case(1e21 => "1000000000000000000000.0.0".to_string(); "large")]
    fn should_render_float(value: f64) -> String {
        Semver::try_from(value).unwrap().to_string()
    }

    #[test_case(-1.5 => ErrorKind::NegativeValue; "negative")]
    #[test_case(f64::NEG_INFINITY => ErrorKind::NegativeValue; "negative infinity")]
    #[test_case(f64::INFINITY => ErrorKind::InvalidNumericIdentifier; "infinity")]
    #[test_case(f64::NAN => ErrorKind::InvalidNumericIdentifier; "nan")]
    fn should_reject_float(value: f64) -> ErrorKind {
        Semver::try_from(value).unwrap_err().kind()
    }

    #[test]
    fn should_parse_f32() {
        assert_eq!("1.5.0", Semver::try_from(1.5f32).unwrap().to_string());
    }
}
