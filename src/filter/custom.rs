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

use crate::filter::Filter;
use crate::record::EventId;
use crate::record::Severity;

type FilterFunction = dyn Fn(&EventId, Severity) -> bool + Send + Sync + 'static;

/// A filter that you can pass the custom filter function.
///
/// The custom filter function accepts the [`EventId`] and [`Severity`] of an event and returns
/// whether the event should be logged. For example:
///
/// ```
/// use logto::filter::CustomFilter;
/// use logto::record::EventId;
/// use logto::record::Severity;
///
/// let filter = CustomFilter::new(|event_id: &EventId, severity: Severity| {
///     severity >= Severity::Warning || event_id.name().starts_with("Database.Command")
/// });
/// ```
pub struct CustomFilter {
    f: Box<FilterFunction>,
}

impl fmt::Debug for CustomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomFilter {{ ... }}")
    }
}

impl CustomFilter {
    /// Creates a new `CustomFilter` from the predicate.
    pub fn new(filter: impl Fn(&EventId, Severity) -> bool + Send + Sync + 'static) -> Self {
        CustomFilter {
            f: Box::new(filter),
        }
    }
}

impl Filter for CustomFilter {
    fn enabled(&self, event_id: &EventId, severity: Severity) -> bool {
        (self.f)(event_id, severity)
    }
}
