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

use crate::FormattingLogger;
use crate::record::EventId;
use crate::record::LogEvent;
use crate::record::Severity;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Information,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

impl Severity {
    /// The closest `log` level, or `None` for [`Severity::None`].
    ///
    /// Both [`Severity::Error`] and [`Severity::Critical`] map to [`log::Level::Error`].
    pub fn to_log_level(&self) -> Option<log::Level> {
        match self {
            Severity::Trace => Some(log::Level::Trace),
            Severity::Debug => Some(log::Level::Debug),
            Severity::Information => Some(log::Level::Info),
            Severity::Warning => Some(log::Level::Warn),
            Severity::Error | Severity::Critical => Some(log::Level::Error),
            Severity::None => None,
        }
    }
}

// `crate::module::path` becomes `crate.module.path`
fn event_id_of(target: &str) -> EventId {
    EventId::new_owned(0, target.replace("::", "."))
}

/// Records from the `log` crate become events named after their target, with id `0`.
///
/// Install the logger with [`log::set_boxed_logger`] to route `log` macros through it.
impl log::Log for FormattingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.should_log(&event_id_of(metadata.target()), metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let event_id = event_id_of(record.target());
        let severity = Severity::from(record.level());
        if !self.should_log(&event_id, severity) {
            return;
        }

        let event = LogEvent::builder()
            .severity(severity)
            .event_id(event_id)
            .args(*record.args())
            .build();
        if let Err(err) = FormattingLogger::log(self, &event) {
            self.handle_error(err);
        }
    }

    fn flush(&self) {
        if let Err(err) = FormattingLogger::flush(self) {
            self.handle_error(err);
        }
    }
}
