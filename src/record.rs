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

//! Log events, their identity and severity.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The severity of an event.
///
/// Severities are totally ordered from [`Trace`](Severity::Trace) to
/// [`Critical`](Severity::Critical). [`None`](Severity::None) sits above every real level and
/// denotes an unset or unrecognized severity.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Detailed diagnostics, usually only useful while developing.
    Trace = 0,
    /// Debugging information.
    Debug = 1,
    /// The general flow of the application.
    Information = 2,
    /// Abnormal or unexpected events that do not stop execution.
    Warning = 3,
    /// A failure of the current operation.
    Error = 4,
    /// An unrecoverable failure that requires immediate attention.
    Critical = 5,
    /// No severity.
    None = 6,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Information,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::None,
    ];

    /// The full name of the severity.
    pub const fn name(&self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
            Severity::None => "None",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for severity in Severity::ALL {
            if s.eq_ignore_ascii_case(severity.name()) {
                return Ok(severity);
            }
        }
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Information),
            "warn" => Ok(Severity::Warning),
            "crit" => Ok(Severity::Critical),
            _ => Err(Error::new("failed to parse severity").with_context("input", s)),
        }
    }
}

/// The identity of a kind of event: a numeric id and a dotted hierarchical name.
///
/// ```
/// use logto::record::EventId;
///
/// const COMMAND_EXECUTED: EventId =
///     EventId::new(20101, "Microsoft.EntityFrameworkCore.Database.Command.CommandExecuted");
///
/// assert_eq!(COMMAND_EXECUTED.leaf_name(), "CommandExecuted");
/// assert_eq!(
///     COMMAND_EXECUTED.category(),
///     Some("Microsoft.EntityFrameworkCore.Database.Command")
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventId {
    id: i32,
    name: Cow<'static, str>,
}

impl EventId {
    /// Create an event id from a numeric id and a static name.
    pub const fn new(id: i32, name: &'static str) -> Self {
        EventId {
            id,
            name: Cow::Borrowed(name),
        }
    }

    /// Create an event id whose name is computed at runtime.
    pub fn new_owned(id: i32, name: impl Into<Cow<'static, str>>) -> Self {
        EventId {
            id,
            name: name.into(),
        }
    }

    /// The numeric id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The dotted hierarchical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The last segment of the name, or the whole name if it has no separator.
    pub fn leaf_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) => &self.name[pos + 1..],
            None => &self.name,
        }
    }

    /// The category part of the name; see [`category_of`](crate::format::category_of).
    pub fn category(&self) -> Option<&str> {
        crate::format::category_of(&self.name)
    }
}

impl AsRef<EventId> for EventId {
    fn as_ref(&self) -> &EventId {
        self
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.id)
    }
}

/// A fully rendered log event.
///
/// Build one with [`LogEvent::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
    severity: Severity,
    event_id: EventId,
    event_id_code: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
}

impl LogEvent {
    /// Returns a new builder.
    pub fn builder() -> LogEventBuilder {
        LogEventBuilder::default()
    }

    /// The severity of the event.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The identity of the event.
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// The display code of the event id, such as `RelationalEventId.CommandExecuted`.
    ///
    /// Falls back to the [leaf name](EventId::leaf_name) when no code was set.
    pub fn event_id_code(&self) -> &str {
        match &self.event_id_code {
            Some(code) => code,
            None => self.event_id.leaf_name(),
        }
    }

    /// The rendered message. May contain line breaks.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create a builder initialized with this event's values.
    pub fn to_builder(&self) -> LogEventBuilder {
        LogEventBuilder {
            event: self.clone(),
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Builder for [`LogEvent`].
#[derive(Debug)]
pub struct LogEventBuilder {
    event: LogEvent,
}

impl Default for LogEventBuilder {
    fn default() -> Self {
        LogEventBuilder {
            event: LogEvent {
                severity: Severity::Information,
                event_id: EventId::new(0, ""),
                event_id_code: None,
                message: Cow::Borrowed(""),
            },
        }
    }
}

impl LogEventBuilder {
    /// Set [`severity`](LogEvent::severity).
    pub fn severity(mut self, severity: Severity) -> Self {
        self.event.severity = severity;
        self
    }

    /// Set [`event_id`](LogEvent::event_id).
    pub fn event_id(mut self, event_id: EventId) -> Self {
        self.event.event_id = event_id;
        self
    }

    /// Set [`event_id_code`](LogEvent::event_id_code).
    pub fn event_id_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.event.event_id_code = Some(code.into());
        self
    }

    /// Set [`message`](LogEvent::message).
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.event.message = message.into();
        self
    }

    /// Set [`message`](LogEvent::message) from format arguments.
    pub fn args(self, args: fmt::Arguments) -> Self {
        match args.as_str() {
            Some(s) => self.message(s),
            None => self.message(args.to_string()),
        }
    }

    /// Invoke the builder and return a `LogEvent`.
    pub fn build(self) -> LogEvent {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Error < Severity::Critical);
        assert!(Severity::Critical < Severity::None);
        assert_eq!(Severity::Warning as u8, 3);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("information".parse::<Severity>().unwrap(), Severity::Information);
        assert_eq!(" WARN ".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
        let err = "loud".parse::<Severity>().unwrap_err();
        assert_eq!(err.context("input"), Some("loud"));
    }

    #[test]
    fn test_event_id_names() {
        let id = EventId::new(10100, "Microsoft.EntityFrameworkCore.Update.SaveChangesFailed");
        assert_eq!(id.leaf_name(), "SaveChangesFailed");
        assert_eq!(id.category(), Some("Microsoft.EntityFrameworkCore.Update"));
        assert_eq!(id.to_string(), "Microsoft.EntityFrameworkCore.Update.SaveChangesFailed[10100]");

        let id = EventId::new_owned(1, String::from("Startup"));
        assert_eq!(id.leaf_name(), "Startup");
        assert_eq!(id.category(), None);
    }

    #[test]
    fn test_event_id_code_falls_back_to_leaf_name() {
        let event = LogEvent::builder()
            .event_id(EventId::new(20101, "Database.Command.CommandExecuted"))
            .build();
        assert_eq!(event.event_id_code(), "CommandExecuted");

        let event = event
            .to_builder()
            .event_id_code("RelationalEventId.CommandExecuted")
            .build();
        assert_eq!(event.event_id_code(), "RelationalEventId.CommandExecuted");
    }

    #[test]
    fn test_builder_args() {
        let rows = 3;
        let event = LogEvent::builder()
            .severity(Severity::Debug)
            .args(format_args!("affected {rows} rows"))
            .build();
        assert_eq!(event.message(), "affected 3 rows");
        assert_eq!(event.severity(), Severity::Debug);
    }
}
