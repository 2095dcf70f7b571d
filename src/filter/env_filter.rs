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

//! Provides [`env_filter`](https://crates.io/crates/env_filter) based filter for events.

use std::borrow::Cow;
use std::str::FromStr;

use log::LevelFilter;

use crate::Error;
use crate::filter::Filter;
use crate::record::EventId;
use crate::record::Severity;

/// The default environment variable for filtering events.
pub const DEFAULT_FILTER_ENV: &str = "RUST_LOG";

/// A filter consists of one or more comma-separated directives which match on event names.
///
/// Each directive names a prefix of the dotted event name and the most verbose severity enabled
/// for it, for example `warn,Database.Command=debug`. Severities map onto the `log` levels:
/// `Information` is `info`, `Warning` is `warn`, and both `Error` and `Critical` are
/// `error`. Events with [`Severity::None`] are never enabled.
///
/// The directive syntax is similar to that of [`env_logger`](https://crates.io/crates/env_logger)'s.
/// Read more from [the `env_logger` documentation](https://docs.rs/env_logger/#enabling-logging)
#[derive(Debug)]
pub struct EnvFilter(env_filter::Filter);

impl EnvFilter {
    /// Initializes the filter from the [EnvFilterBuilder].
    pub fn new(mut builder: EnvFilterBuilder) -> Self {
        EnvFilter(builder.0.build())
    }

    /// Initializes the filter from the environment using default variable name `RUST_LOG`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logto::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env();
    /// ```
    pub fn from_default_env() -> Self {
        EnvFilter::from_env(DEFAULT_FILTER_ENV)
    }

    /// Initializes the filter from the environment using default variable name `RUST_LOG`.
    /// If the variable is not set, the default value will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logto::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env_or("info");
    /// ```
    pub fn from_default_env_or<'a, V>(default: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        EnvFilter::from_env_or(DEFAULT_FILTER_ENV, default)
    }

    /// Initializes the filter from the environment using specific variable name.
    pub fn from_env<'a, E>(name: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        let name = name.into();

        let builder = EnvFilterBuilder::new();
        match std::env::var(&*name) {
            Ok(s) => EnvFilter::new(builder.parse(&s)),
            Err(_) => EnvFilter::new(builder),
        }
    }

    /// Initializes the filter from the environment using specific variable name.
    /// If the variable is not set, the default value will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logto::filter::EnvFilter;
    /// let filter = EnvFilter::from_env_or("MY_LOG", "info");
    /// ```
    pub fn from_env_or<'a, 'b, E, V>(name: E, default: V) -> Self
    where
        E: Into<Cow<'a, str>>,
        V: Into<Cow<'b, str>>,
    {
        let name = name.into();
        let default = default.into();

        let builder = EnvFilterBuilder::new();
        match std::env::var(&*name) {
            Ok(s) => EnvFilter::new(builder.parse(&s)),
            Err(_) => EnvFilter::new(builder.parse(&default)),
        }
    }
}

impl Filter for EnvFilter {
    fn enabled(&self, event_id: &EventId, severity: Severity) -> bool {
        let Some(level) = severity.to_log_level() else {
            return false;
        };

        let metadata = log::Metadata::builder()
            .level(level)
            .target(event_id.name())
            .build();
        self.0.enabled(&metadata)
    }
}

impl From<Severity> for EnvFilter {
    fn from(severity: Severity) -> Self {
        EnvFilter::new(EnvFilterBuilder::new().filter_level(severity))
    }
}

impl<'a> From<&'a str> for EnvFilter {
    fn from(filter: &'a str) -> Self {
        EnvFilter::new(EnvFilterBuilder::new().parse(filter))
    }
}

impl FromStr for EnvFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvFilterBuilder::new().try_parse(s).map(EnvFilter::new)
    }
}

/// A builder for the env filter.
///
/// It can be used to parse a set of directives from a string before building a [EnvFilter]
/// instance.
#[derive(Default, Debug)]
pub struct EnvFilterBuilder(env_filter::Builder);

impl EnvFilterBuilder {
    /// Initializes the filter builder with defaults.
    pub fn new() -> Self {
        EnvFilterBuilder(env_filter::Builder::new())
    }

    /// Adds a directive for every event whose name starts with `category`.
    pub fn filter_category(mut self, category: &str, severity: Severity) -> Self {
        self.0.filter_module(category, level_filter(severity));
        self
    }

    /// Adds a directive for all events.
    pub fn filter_level(mut self, severity: Severity) -> Self {
        self.0.filter_level(level_filter(severity));
        self
    }

    /// Parses the directive string, returning an error if the given directive string is invalid.
    pub fn try_parse(mut self, filters: &str) -> Result<Self, Error> {
        self.0.try_parse(filters).map_err(|err| {
            Error::new("failed to parse filter directives")
                .with_context("input", filters)
                .with_source(err)
        })?;
        Ok(self)
    }

    /// Parses the directive string; invalid directives are skipped.
    pub fn parse(mut self, filters: &str) -> Self {
        self.0.parse(filters);
        self
    }
}

fn level_filter(severity: Severity) -> LevelFilter {
    match severity.to_log_level() {
        Some(level) => level.to_level_filter(),
        None => LevelFilter::Off,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMAND_EXECUTED: EventId = EventId::new(20101, "Database.Command.CommandExecuted");
    const CONTEXT_INITIALIZED: EventId =
        EventId::new(10403, "Infrastructure.ContextInitialized");

    #[test]
    fn test_directives_match_event_name_prefix() {
        let filter: EnvFilter = "warn,Database.Command=debug".parse().unwrap();
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Debug));
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Trace));
        assert!(!filter.enabled(&CONTEXT_INITIALIZED, Severity::Information));
        assert!(filter.enabled(&CONTEXT_INITIALIZED, Severity::Critical));
        assert!(!filter.enabled(&CONTEXT_INITIALIZED, Severity::None));
    }

    #[test]
    fn test_builder() {
        let filter = EnvFilter::new(
            EnvFilterBuilder::new()
                .filter_level(Severity::Error)
                .filter_category("Infrastructure", Severity::Trace),
        );
        assert!(filter.enabled(&CONTEXT_INITIALIZED, Severity::Trace));
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Warning));
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Error));
    }

    #[test]
    fn test_from_severity() {
        let filter = EnvFilter::from(Severity::Information);
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Information));
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Debug));
    }

    #[test]
    fn test_env_fallback() {
        let filter = EnvFilter::from_env_or("LOGTO_TEST_FILTER_THAT_IS_NEVER_SET", "error");
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Critical));
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Warning));
    }

    #[test]
    fn test_invalid_directive() {
        let err = "Database=loud".parse::<EnvFilter>().unwrap_err();
        assert_eq!(err.context("input"), Some("Database=loud"));
    }
}
