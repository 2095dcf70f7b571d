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

//! Decide whether an event should be formatted at all.

use std::fmt;

use crate::record::EventId;
use crate::record::Severity;

mod categories;
mod custom;
pub mod env_filter;
mod event_ids;
mod min_level;

pub use self::categories::Categories;
pub use self::custom::CustomFilter;
pub use self::env_filter::EnvFilter;
pub use self::event_ids::EventIds;
pub use self::min_level::MinLevel;

/// A predicate over the identity and severity of an event.
///
/// [`FormattingLogger::should_log`](crate::FormattingLogger::should_log) calls it before the
/// event is built, so implementations should be cheap and free of side effects.
pub trait Filter: fmt::Debug + Send + Sync + 'static {
    /// Whether an event with this identity and severity should be logged.
    fn enabled(&self, event_id: &EventId, severity: Severity) -> bool;
}

impl<T: Filter> From<T> for Box<dyn Filter> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A bare severity acts as a minimum level.
impl Filter for Severity {
    fn enabled(&self, _: &EventId, severity: Severity) -> bool {
        severity >= *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMAND_EXECUTED: EventId = EventId::new(20101, "Database.Command.CommandExecuted");
    const CONTEXT_INITIALIZED: EventId =
        EventId::new(10403, "Infrastructure.ContextInitialized");

    #[test]
    fn test_severity_as_min_level() {
        let filter: Box<dyn Filter> = Severity::Warning.into();
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Information));
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Warning));
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Critical));

        let filter = MinLevel::default();
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Trace));
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Debug));
    }

    #[test]
    fn test_custom_filter() {
        let filter = CustomFilter::new(|event_id: &EventId, _| event_id.id() == 10403);
        assert!(filter.enabled(&CONTEXT_INITIALIZED, Severity::Trace));
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Critical));
        assert_eq!(format!("{filter:?}"), "CustomFilter { ... }");
    }

    #[test]
    fn test_event_ids() {
        let filter = EventIds::new(Severity::Information, [&COMMAND_EXECUTED]);
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Information));
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Debug));
        assert!(!filter.enabled(&CONTEXT_INITIALIZED, Severity::Error));

        // matched by numeric id only
        let renamed = EventId::new(20101, "Renamed");
        assert!(filter.enabled(&renamed, Severity::Error));
    }

    #[test]
    fn test_categories() {
        let filter = Categories::new(Severity::Debug, ["database.command"]);
        assert!(filter.enabled(&COMMAND_EXECUTED, Severity::Debug));
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Trace));
        assert!(!filter.enabled(&CONTEXT_INITIALIZED, Severity::Critical));

        let filter = Categories::new(Severity::Trace, Vec::<String>::new());
        assert!(!filter.enabled(&COMMAND_EXECUTED, Severity::Critical));
    }
}
