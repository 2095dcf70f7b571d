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

use std::collections::HashSet;

use crate::filter::Filter;
use crate::record::EventId;
use crate::record::Severity;

/// Log only the listed events, at or above a severity.
///
/// Events are matched by their numeric id.
///
/// # Examples
///
/// ```
/// use logto::filter::EventIds;
/// use logto::record::EventId;
/// use logto::record::Severity;
///
/// const COMMAND_EXECUTED: EventId = EventId::new(20101, "Database.Command.CommandExecuted");
///
/// let filter = EventIds::new(Severity::Information, [COMMAND_EXECUTED]);
/// ```
#[derive(Debug, Clone)]
pub struct EventIds {
    min_level: Severity,
    ids: HashSet<i32>,
}

impl EventIds {
    /// Creates a filter that accepts `events` at or above `min_level`.
    pub fn new<I, E>(min_level: Severity, events: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<EventId>,
    {
        EventIds {
            min_level,
            ids: events.into_iter().map(|e| e.as_ref().id()).collect(),
        }
    }
}

impl Filter for EventIds {
    fn enabled(&self, event_id: &EventId, severity: Severity) -> bool {
        severity >= self.min_level && self.ids.contains(&event_id.id())
    }
}
