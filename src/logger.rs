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

use jiff::tz::TimeZone;

use crate::Error;
use crate::Filter;
use crate::FormatOptions;
use crate::Sink;
use crate::clock::Clock;
use crate::format::format_event;
use crate::record::EventId;
use crate::record::LogEvent;
use crate::record::Severity;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A logger that formats events as text lines and writes them to a [`Sink`].
///
/// The sink, the filter and the options are fixed when the logger is created. The logger itself
/// holds no mutable state, so it can be shared across threads as long as its sink and filter
/// can.
///
/// # Examples
///
/// ```
/// use logto::FormatOptions;
/// use logto::FormattingLogger;
/// use logto::record::EventId;
/// use logto::record::LogEvent;
/// use logto::record::Severity;
/// use logto::sink::Stdout;
///
/// const COMMAND_EXECUTED: EventId = EventId::new(20101, "Database.Command.CommandExecuted");
///
/// let logger = FormattingLogger::new(
///     Stdout::default(),
///     Severity::Information,
///     FormatOptions::LEVEL | FormatOptions::ID | FormatOptions::SINGLE_LINE,
/// );
///
/// if logger.should_log(&COMMAND_EXECUTED, Severity::Information) {
///     let event = LogEvent::builder()
///         .severity(Severity::Information)
///         .event_id(COMMAND_EXECUTED)
///         .message("Executed DbCommand (1ms)")
///         .build();
///     logger.log(&event).unwrap();
/// }
/// ```
#[derive(Debug)]
pub struct FormattingLogger {
    sink: Box<dyn Sink>,
    filter: Box<dyn Filter>,
    options: FormatOptions,
    timezone: TimeZone,
    clock: Clock,
    trap: Box<dyn Trap>,
}

impl FormattingLogger {
    /// Create a logger from its sink, filter and options.
    pub fn new(
        sink: impl Into<Box<dyn Sink>>,
        filter: impl Into<Box<dyn Filter>>,
        options: FormatOptions,
    ) -> Self {
        FormattingLogger {
            sink: sink.into(),
            filter: filter.into(),
            options,
            timezone: TimeZone::system(),
            clock: Clock::DefaultClock,
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Set the timezone used by [`FormatOptions::LOCAL_TIME`].
    ///
    /// Defaults to the system timezone if not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logto::FormatOptions;
    /// use logto::FormattingLogger;
    /// use logto::record::Severity;
    /// use logto::sink::Stderr;
    ///
    /// let logger = FormattingLogger::new(Stderr::default(), Severity::Trace, FormatOptions::DEFAULT)
    ///     .timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set the trap for errors raised inside the [`log::Log`] bridge.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The options this logger formats with.
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Whether an event with this identity and severity should be logged.
    ///
    /// Callers can skip building the event entirely when this returns `false`.
    pub fn should_log(&self, event_id: &EventId, severity: Severity) -> bool {
        self.filter.enabled(event_id, severity)
    }

    /// Format `event` and write it to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::missing_event`] without touching the sink if `event` is `None`, and
    /// otherwise whatever the sink returns.
    pub fn log<'a>(&self, event: impl Into<Option<&'a LogEvent>>) -> Result<(), Error> {
        let event = event.into().ok_or_else(Error::missing_event)?;
        let text = format_event(self.options, event, self.clock.now(), &self.timezone);
        self.sink.write(&text)
    }

    /// Flush the sink.
    pub fn flush(&self) -> Result<(), Error> {
        self.sink.flush()
    }

    pub(crate) fn handle_error(&self, err: Error) {
        self.trap.trap(&err);
    }
}
