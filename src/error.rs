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

use std::fmt;
use std::io;

const MISSING_EVENT: &str = "missing event";

/// The error struct of logto.
///
/// An error carries a message, optional key-value context, and the underlying sources that caused
/// it. Sinks return this type, and [`FormattingLogger::log`] hands it back to the caller as-is.
///
/// [`FormattingLogger::log`]: crate::FormattingLogger::log
pub struct Error {
    message: String,
    sources: Vec<anyhow::Error>,
    context: Vec<(&'static str, String)>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}: {v}")?;
            }
            write!(f, " }}")?;
        }

        if !self.sources.is_empty() {
            write!(f, ", sources: [")?;
            for (i, source) in self.sources.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{source}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("message", &self.message);
            de.field("context", &self.context);
            de.field("sources", &self.sources);
            return de.finish();
        }

        writeln!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }
        if !self.sources.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sources:")?;
            for source in self.sources.iter() {
                writeln!(f, "   {source:#}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.sources.first().map(|v| v.as_ref())
    }
}

impl Error {
    /// Create a new Error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sources: vec![],
            context: vec![],
        }
    }

    /// Add one more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Add one more source in error.
    pub fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.sources.push(src.into());
        self
    }

    /// The error message, without context or sources.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Look up the first context value recorded under `key`.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Return an iterator over all sources of this error.
    pub fn sources(&self) -> impl ExactSizeIterator<Item = &(dyn std::error::Error + 'static)> {
        self.sources.iter().map(|v| v.as_ref())
    }

    /// Default constructor for [`Error`] from [`io::Error`].
    pub fn from_io_error(err: io::Error) -> Error {
        Error::new("failed to perform io").with_source(err)
    }

    /// The argument-validation failure returned when no event is passed to
    /// [`FormattingLogger::log`](crate::FormattingLogger::log).
    pub fn missing_event() -> Error {
        Error::new(MISSING_EVENT).with_context("argument", "event")
    }

    /// Whether this error is the [`missing_event`](Error::missing_event) failure.
    pub fn is_missing_event(&self) -> bool {
        self.message == MISSING_EVENT && self.context("argument") == Some("event")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context_and_sources() {
        let err = Error::new("failed to parse format options")
            .with_context("token", "bogus")
            .with_context("input", "level|bogus")
            .with_source(anyhow::anyhow!("unknown flag"));
        assert_eq!(
            err.to_string(),
            "failed to parse format options, context: { token: bogus, input: level|bogus }, sources: [unknown flag]"
        );
        assert_eq!(err.context("token"), Some("bogus"));
        assert_eq!(err.sources().len(), 1);
    }

    #[test]
    fn test_missing_event() {
        let err = Error::missing_event();
        assert!(err.is_missing_event());
        assert_eq!(err.to_string(), "missing event, context: { argument: event }");
        assert!(!Error::new(MISSING_EVENT).is_missing_event());
        assert!(!Error::new("failed to perform io")
            .with_context("argument", "event")
            .is_missing_event());
    }

    #[test]
    fn test_from_io_error_keeps_source() {
        let err = Error::from_io_error(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.message(), "failed to perform io");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "pipe closed");
    }
}
