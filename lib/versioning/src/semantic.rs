use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{VersioningError, VersioningResult};

/// A version decomposed per the SemVer grammar.
///
/// Major, minor and patch are digit strings kept exactly as written, apart from a stripped
/// `v`/`V` prefix. Minor and patch hold "0" when they were omitted from the text.
/// A value can only be obtained by parsing so every field is known to be valid.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Semver {
    major: String,
    minor: String,
    patch: String,
    prerelease: Vec<String>,
    build: Vec<String>,
}

impl FromStr for Semver {
    type Err = VersioningError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(VersioningError::EmptyInput);
        }

        let text = version_prefix(text);
        allowed_characters(text)?;

        let (core, prerelease, build) = segments(text);
        let (major, minor, patch) = numeric_core(core)?;

        let prerelease = match prerelease {
            Some(segment) => prerelease_identifiers(segment)?,
            None => Vec::new(),
        };

        let build = match build {
            Some(segment) => build_identifiers(segment)?,
            None => Vec::new(),
        };

        Ok(Self {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
            prerelease,
            build,
        })
    }
}

fn version_prefix(input: &str) -> &str {
    input
        .strip_prefix(|c: char| c == 'v' || c == 'V')
        .unwrap_or(input)
}

fn allowed_characters(input: &str) -> VersioningResult<()> {
    match input
        .char_indices()
        .find(|(_, c)| !is_identifier_character(*c) && *c != '.' && *c != '+')
    {
        Some((position, character)) => Err(VersioningError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Splits text into the numeric core, the pre-release segment and the build segment.
/// The first `-` only opens a pre-release when no `+` came before it.
fn segments(input: &str) -> (&str, Option<&str>, Option<&str>) {
    let Some(index) = input.find(|c: char| c == '-' || c == '+') else {
        return (input, None, None);
    };

    let (core, rest) = input.split_at(index);
    if let Some(build) = rest.strip_prefix('+') {
        return (core, None, Some(build));
    }

    // rest starts with the single byte '-'
    match rest[1..].split_once('+') {
        Some((prerelease, build)) => (core, Some(prerelease), Some(build)),
        None => (core, Some(&rest[1..]), None),
    }
}

fn numeric_core(core: &str) -> VersioningResult<(&str, &str, &str)> {
    let parts: Vec<&str> = core.split('.').collect();
    let (major, minor, patch) = match parts.as_slice() {
        [major] => (*major, "0", "0"),
        [major, minor] => (*major, *minor, "0"),
        [major, minor, patch] => (*major, *minor, *patch),
        _ => return Err(VersioningError::MalformedCore(core.to_string())),
    };

    Ok((
        numeric_identifier(major)?,
        numeric_identifier(minor)?,
        numeric_identifier(patch)?,
    ))
}

// Leading zeros are accepted here, unlike numeric pre-release identifiers.
fn numeric_identifier(input: &str) -> VersioningResult<&str> {
    if is_numeric(input) {
        Ok(input)
    } else {
        Err(VersioningError::InvalidNumericIdentifier(input.to_string()))
    }
}

fn prerelease_identifiers(segment: &str) -> VersioningResult<Vec<String>> {
    segment
        .split('.')
        .map(|ident| {
            if is_identifier(ident) && !has_leading_zero(ident) {
                Ok(ident.to_string())
            } else {
                Err(VersioningError::InvalidPrereleaseIdentifier(
                    ident.to_string(),
                ))
            }
        })
        .collect()
}

fn build_identifiers(segment: &str) -> VersioningResult<Vec<String>> {
    segment
        .split('.')
        .map(|ident| {
            if is_identifier(ident) {
                Ok(ident.to_string())
            } else {
                Err(VersioningError::InvalidBuildMetadataIdentifier(
                    ident.to_string(),
                ))
            }
        })
        .collect()
}

fn is_identifier_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_identifier(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_identifier_character)
}

fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

fn has_leading_zero(input: &str) -> bool {
    input.len() > 1 && input.starts_with('0') && is_numeric(input)
}

/// Compares digit strings by value without converting them to a fixed width integer.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => cmp_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn cmp_prerelease(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // a release outranks any of its pre-releases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(a, b)| cmp_identifier(a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

impl Semver {
    pub fn parse(text: &str) -> VersioningResult<Self> {
        Semver::from_str(text)
    }

    /// A release version with only the major set, used by the numeric shorthand.
    pub(crate) fn from_major(major: String) -> Self {
        Self {
            major,
            minor: "0".to_string(),
            patch: "0".to_string(),
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    pub fn prerelease(&self) -> &[String] {
        &self.prerelease
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Orders versions by SemVer precedence. Build metadata is ignored and numeric parts are
    /// compared by value, so "1.0.0+a" and "01.0.0+b" have equal precedence.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        cmp_numeric(&self.major, &other.major)
            .then_with(|| cmp_numeric(&self.minor, &other.minor))
            .then_with(|| cmp_numeric(&self.patch, &other.patch))
            .then_with(|| cmp_prerelease(&self.prerelease, &other.prerelease))
    }
}

impl TryFrom<&str> for Semver {
    type Error = VersioningError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Semver::from_str(value)
    }
}

impl TryFrom<String> for Semver {
    type Error = VersioningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Semver::from_str(value.as_str())
    }
}

impl Display for Semver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl Serialize for Semver {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Semver {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Semver::from_str(&text).map_err(D::Error::custom)
    }
}
