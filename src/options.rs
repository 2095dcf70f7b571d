// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Display toggles for formatted lines.

use std::borrow::Cow;
use std::fmt;
use std::ops::BitAnd;
use std::ops::BitAndAssign;
use std::ops::BitOr;
use std::ops::BitOrAssign;
use std::str::FromStr;

use crate::Error;

/// A set of independent display toggles for [`FormattingLogger`](crate::FormattingLogger).
///
/// Flags combine with `|`. Any combination is valid, including [`NONE`](FormatOptions::NONE),
/// which passes messages through verbatim.
///
/// # Examples
///
/// ```
/// use logto::FormatOptions;
///
/// let options = FormatOptions::LEVEL | FormatOptions::SINGLE_LINE;
/// assert!(options.contains(FormatOptions::LEVEL));
/// assert!(!options.contains(FormatOptions::CATEGORY));
///
/// let parsed: FormatOptions = "level | single_line".parse().unwrap();
/// assert_eq!(parsed, options);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct FormatOptions(u8);

impl FormatOptions {
    /// No prefix; the message is passed through unchanged.
    pub const NONE: FormatOptions = FormatOptions(0);
    /// Collapse the message to a single line.
    pub const SINGLE_LINE: FormatOptions = FormatOptions(1);
    /// Prefix a short severity tag.
    pub const LEVEL: FormatOptions = FormatOptions(1 << 1);
    /// Prefix the local date and time.
    pub const LOCAL_TIME: FormatOptions = FormatOptions(1 << 2);
    /// Prefix the UTC timestamp.
    pub const UTC_TIME: FormatOptions = FormatOptions(1 << 3);
    /// Prefix the event id code and numeric id.
    pub const ID: FormatOptions = FormatOptions(1 << 4);
    /// Prefix the event category.
    pub const CATEGORY: FormatOptions = FormatOptions(1 << 5);

    /// Every flag except [`SINGLE_LINE`](FormatOptions::SINGLE_LINE).
    pub const DEFAULT: FormatOptions = FormatOptions(
        Self::LEVEL.0 | Self::LOCAL_TIME.0 | Self::UTC_TIME.0 | Self::ID.0 | Self::CATEGORY.0,
    );
    /// Level, local time, id and category.
    pub const DEFAULT_WITH_LOCAL_TIME: FormatOptions =
        FormatOptions(Self::LEVEL.0 | Self::LOCAL_TIME.0 | Self::ID.0 | Self::CATEGORY.0);
    /// Level, UTC time, id and category.
    pub const DEFAULT_WITH_UTC_TIME: FormatOptions =
        FormatOptions(Self::LEVEL.0 | Self::UTC_TIME.0 | Self::ID.0 | Self::CATEGORY.0);

    const FLAGS: [(FormatOptions, &'static str); 6] = [
        (Self::SINGLE_LINE, "single_line"),
        (Self::LEVEL, "level"),
        (Self::LOCAL_TIME, "local_time"),
        (Self::UTC_TIME, "utc_time"),
        (Self::ID, "id"),
        (Self::CATEGORY, "category"),
    ];

    const COMPOSITES: [(FormatOptions, &'static str); 4] = [
        (Self::NONE, "none"),
        (Self::DEFAULT, "default"),
        (Self::DEFAULT_WITH_LOCAL_TIME, "default_with_local_time"),
        (Self::DEFAULT_WITH_UTC_TIME, "default_with_utc_time"),
    ];

    /// The raw bits.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Build options from raw bits; bits with no flag assigned are dropped.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        FormatOptions(bits & 0b11_1111)
    }

    /// Whether no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether every flag of `other` is set in `self`.
    pub const fn contains(&self, other: FormatOptions) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any flag of `other` is set in `self`.
    pub const fn intersects(&self, other: FormatOptions) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether the options are exactly [`SINGLE_LINE`](FormatOptions::SINGLE_LINE) and nothing
    /// else.
    pub const fn is_single_line_only(&self) -> bool {
        self.0 == Self::SINGLE_LINE.0
    }

    /// Read options from the environment variable `name`.
    ///
    /// Returns `Ok(None)` if the variable is not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use logto::FormatOptions;
    ///
    /// let options = FormatOptions::from_env("LOGTO_OPTIONS")
    ///     .unwrap()
    ///     .unwrap_or(FormatOptions::DEFAULT);
    /// ```
    pub fn from_env<'a, E>(name: E) -> Result<Option<FormatOptions>, Error>
    where
        E: Into<Cow<'a, str>>,
    {
        let name = name.into();
        match std::env::var(&*name) {
            Ok(s) => s
                .parse()
                .map(Some)
                .map_err(|err: Error| err.with_context("env", name)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(Error::new("failed to read format options")
                .with_context("env", name)
                .with_source(err)),
        }
    }
}

impl BitOr for FormatOptions {
    type Output = FormatOptions;

    fn bitor(self, rhs: FormatOptions) -> FormatOptions {
        FormatOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatOptions {
    fn bitor_assign(&mut self, rhs: FormatOptions) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FormatOptions {
    type Output = FormatOptions;

    fn bitand(self, rhs: FormatOptions) -> FormatOptions {
        FormatOptions(self.0 & rhs.0)
    }
}

impl BitAndAssign for FormatOptions {
    fn bitand_assign(&mut self, rhs: FormatOptions) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for FormatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormatOptions({self})")
    }
}

impl fmt::Display for FormatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for (flag, name) in Self::FLAGS {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for FormatOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = FormatOptions::NONE;
        for token in s.split(['|', ',']) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let flag = Self::FLAGS
                .iter()
                .chain(Self::COMPOSITES.iter())
                .find(|(_, name)| token.eq_ignore_ascii_case(name))
                .map(|(flag, _)| *flag);

            match flag {
                Some(flag) => options |= flag,
                None => {
                    return Err(Error::new("failed to parse format options")
                        .with_context("token", token)
                        .with_context("input", s));
                }
            }
        }
        Ok(options)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormatOptions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FormatOptions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_single_line() {
        let options = FormatOptions::DEFAULT;
        assert!(!options.contains(FormatOptions::SINGLE_LINE));
        for flag in [
            FormatOptions::LEVEL,
            FormatOptions::LOCAL_TIME,
            FormatOptions::UTC_TIME,
            FormatOptions::ID,
            FormatOptions::CATEGORY,
        ] {
            assert!(options.contains(flag), "{flag} missing from default");
        }
        assert_eq!(options.bits(), 0b11_1110);
    }

    #[test]
    fn test_single_line_only() {
        assert!(FormatOptions::SINGLE_LINE.is_single_line_only());
        assert!(!(FormatOptions::SINGLE_LINE | FormatOptions::LEVEL).is_single_line_only());
        assert!(!FormatOptions::NONE.is_single_line_only());
        assert!((FormatOptions::SINGLE_LINE | FormatOptions::ID).intersects(FormatOptions::SINGLE_LINE));
    }

    #[test]
    fn test_bit_ops() {
        let mut options = FormatOptions::LEVEL;
        options |= FormatOptions::CATEGORY;
        assert_eq!(options & FormatOptions::CATEGORY, FormatOptions::CATEGORY);
        assert_eq!(options & FormatOptions::ID, FormatOptions::NONE);
        options &= FormatOptions::LEVEL;
        assert_eq!(options, FormatOptions::LEVEL);
        assert_eq!(FormatOptions::from_bits_truncate(0xFF).bits(), 0b11_1111);
    }

    #[test]
    fn test_parse_and_display() {
        let options: FormatOptions = "Level, utc_time | single_line".parse().unwrap();
        assert_eq!(
            options,
            FormatOptions::LEVEL | FormatOptions::UTC_TIME | FormatOptions::SINGLE_LINE
        );
        assert_eq!(options.to_string(), "single_line|level|utc_time");
        assert_eq!(options.to_string().parse::<FormatOptions>().unwrap(), options);

        assert_eq!("".parse::<FormatOptions>().unwrap(), FormatOptions::NONE);
        assert_eq!(FormatOptions::NONE.to_string(), "none");
        assert_eq!(
            "default_with_utc_time".parse::<FormatOptions>().unwrap(),
            FormatOptions::DEFAULT_WITH_UTC_TIME
        );
        assert_eq!(
            "default|single_line".parse::<FormatOptions>().unwrap(),
            FormatOptions::DEFAULT | FormatOptions::SINGLE_LINE
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        let err = "level|colour".parse::<FormatOptions>().unwrap_err();
        assert_eq!(err.message(), "failed to parse format options");
        assert_eq!(err.context("token"), Some("colour"));
        assert_eq!(err.context("input"), Some("level|colour"));
    }

    #[test]
    fn test_from_env_unset() {
        let options = FormatOptions::from_env("LOGTO_TEST_OPTIONS_THAT_IS_NEVER_SET").unwrap();
        assert_eq!(options, None);
    }
}
