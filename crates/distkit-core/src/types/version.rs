//! Release version and version-specifier types.
//!
//! Versions are one or more dot-separated numeric segments with an optional
//! pre-release tag (`0.1`, `0.16.0`, `1.0rc1`). Missing trailing segments
//! compare as zero, so `1.0` and `1.0.0` are the same release.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A release version: numeric segments plus an optional pre-release tag
#[derive(Debug, Clone)]
pub struct Version {
    pub release: Vec<u64>,
    pub pre: Option<String>,
}

/// A single version constraint (`>=0.3.1`, `~=1.4`, `!=2.0`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub op: Op,
    pub version: Version,
}

/// A conjunction of specifiers (`>=0.3.1,<1.0`); empty means "any version"
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecifierSet {
    pub specifiers: Vec<Specifier>,
}

/// Comparison operator for version specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Exact,      // ==1.0.0
    NotEqual,   // !=1.0.0
    Greater,    // >1.0.0
    GreaterEq,  // >=1.0.0
    Less,       // <1.0.0
    LessEq,     // <=1.0.0
    Compatible, // ~=1.4.2
}

/// Version parsing and validation errors
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version format: {input}")]
    InvalidFormat { input: String },

    #[error("Invalid number in version: {component}")]
    InvalidNumber { component: String },

    #[error("Invalid pre-release tag: {pre}")]
    InvalidPrerelease { pre: String },

    #[error("Invalid specifier: {input}")]
    InvalidSpecifier { input: String },
}

impl Version {
    /// Create a final (non-prerelease) version from release segments
    pub fn new(release: Vec<u64>) -> Self {
        Self { release, pre: None }
    }

    /// Check if this version satisfies a specifier set
    pub fn satisfies(&self, set: &SpecifierSet) -> bool {
        set.matches(self)
    }

    /// Check if this is a pre-release version
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Release segment at `index`, with missing segments reading as zero
    fn segment(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    /// Compare release segments with zero padding, then pre-release tags
    fn precedence_cmp(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        for i in 0..len {
            match self.segment(i).cmp(&other.segment(i)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        match (&self.pre, &other.pre) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less, // pre-release < final
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b), // lexical comparison
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence_cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_cmp(other)
    }
}

fn valid_pre_tag(pre: &str) -> bool {
    !pre.is_empty()
        && pre.chars().all(|c| c.is_ascii_alphanumeric() || c == '.')
        && pre.chars().any(|c| c.is_ascii_alphanumeric())
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(VersionError::InvalidFormat {
                input: s.to_string(),
            });
        }

        // Explicit separator form: "1.0-rc1"
        let (core, mut pre) = match input.split_once('-') {
            Some((c, p)) => (c, Some(p.to_string())),
            None => (input, None),
        };

        let mut release = Vec::new();
        let segments: Vec<&str> = core.split('.').collect();
        for (i, segment) in segments.iter().enumerate() {
            match segment.find(|c: char| !c.is_ascii_digit()) {
                None => {
                    if segment.is_empty() {
                        return Err(VersionError::InvalidFormat {
                            input: input.to_string(),
                        });
                    }
                    let value =
                        segment
                            .parse()
                            .map_err(|_| VersionError::InvalidNumber {
                                component: segment.to_string(),
                            })?;
                    release.push(value);
                },
                Some(split_at) => {
                    // Attached tag form: "1.0rc1" or "1.0.post1"
                    if pre.is_some() {
                        return Err(VersionError::InvalidFormat {
                            input: input.to_string(),
                        });
                    }
                    if split_at > 0 {
                        let value = segment[..split_at].parse().map_err(|_| {
                            VersionError::InvalidNumber {
                                component: segment.to_string(),
                            }
                        })?;
                        release.push(value);
                    }
                    let mut tag = segment[split_at..].to_string();
                    for rest in &segments[i + 1..] {
                        tag.push('.');
                        tag.push_str(rest);
                    }
                    pre = Some(tag);
                    break;
                },
            }
        }

        if release.is_empty() {
            return Err(VersionError::InvalidFormat {
                input: input.to_string(),
            });
        }

        if let Some(ref tag) = pre {
            if !valid_pre_tag(tag) {
                return Err(VersionError::InvalidPrerelease {
                    pre: tag.clone(),
                });
            }
        }

        Ok(Version { release, pre })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.release.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }

        if let Some(ref pre) = self.pre {
            write!(f, "-{}", pre)?;
        }

        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl SpecifierSet {
    /// The unconstrained set (matches every version)
    pub fn any() -> Self {
        Self::default()
    }

    /// Parse a comma-separated specifier list; empty or "*" means any
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let input = input.trim();
        if input.is_empty() || input == "*" {
            return Ok(Self::any());
        }

        let specifiers = input
            .split(',')
            .map(Specifier::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { specifiers })
    }

    /// Check if a version matches every specifier in the set
    pub fn matches(&self, version: &Version) -> bool {
        self.specifiers.iter().all(|spec| spec.matches(version))
    }

    /// Check if the set places no constraint at all
    pub fn is_any(&self) -> bool {
        self.specifiers.is_empty()
    }
}

impl fmt::Display for SpecifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.specifiers.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", spec)?;
        }
        Ok(())
    }
}

impl Specifier {
    /// Parse a single specifier; a bare version means an exact pin
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let input = input.trim();

        let (op, version_str) = if let Some(stripped) = input.strip_prefix(">=") {
            (Op::GreaterEq, stripped)
        } else if let Some(stripped) = input.strip_prefix("<=") {
            (Op::LessEq, stripped)
        } else if let Some(stripped) = input.strip_prefix("==") {
            (Op::Exact, stripped)
        } else if let Some(stripped) = input.strip_prefix("!=") {
            (Op::NotEqual, stripped)
        } else if let Some(stripped) = input.strip_prefix("~=") {
            (Op::Compatible, stripped)
        } else if let Some(stripped) = input.strip_prefix('>') {
            (Op::Greater, stripped)
        } else if let Some(stripped) = input.strip_prefix('<') {
            (Op::Less, stripped)
        } else if let Some(stripped) = input.strip_prefix('=') {
            (Op::Exact, stripped)
        } else {
            (Op::Exact, input)
        };

        let version = Version::from_str(version_str)?;

        // A compatible release needs a segment to hold fixed
        if op == Op::Compatible && version.release.len() < 2 {
            return Err(VersionError::InvalidSpecifier {
                input: input.to_string(),
            });
        }

        Ok(Specifier { op, version })
    }

    /// Check if a version matches this specifier
    pub fn matches(&self, version: &Version) -> bool {
        match self.op {
            Op::Exact => *version == self.version,
            Op::NotEqual => *version != self.version,
            Op::Greater => *version > self.version,
            Op::GreaterEq => *version >= self.version,
            Op::Less => *version < self.version,
            Op::LessEq => *version <= self.version,
            Op::Compatible => self.matches_compatible(version),
        }
    }

    /// Compatible release: `~=1.4.2` allows `>=1.4.2` within the `1.4` series
    fn matches_compatible(&self, version: &Version) -> bool {
        if *version < self.version {
            return false;
        }
        let fixed = self.version.release.len() - 1;
        (0..fixed).all(|i| version.segment(i) == self.version.segment(i))
            && version.release.len() >= fixed
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Exact => "==",
            Op::NotEqual => "!=",
            Op::Greater => ">",
            Op::GreaterEq => ">=",
            Op::Less => "<",
            Op::LessEq => "<=",
            Op::Compatible => "~=",
        };
        write!(f, "{}", symbol)
    }
}
