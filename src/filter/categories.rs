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

use std::borrow::Cow;

use crate::filter::Filter;
use crate::record::EventId;
use crate::record::Severity;

/// Log only events whose name starts with one of the given categories, at or above a severity.
///
/// Prefixes are compared ASCII case-insensitively.
///
/// # Examples
///
/// ```
/// use logto::filter::Categories;
/// use logto::record::Severity;
///
/// let filter = Categories::new(Severity::Debug, ["Database.Command", "Infrastructure"]);
/// ```
#[derive(Debug, Clone)]
pub struct Categories {
    min_level: Severity,
    prefixes: Vec<Cow<'static, str>>,
}

impl Categories {
    /// Creates a filter that accepts events under `categories` at or above `min_level`.
    pub fn new<I, C>(min_level: Severity, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        Categories {
            min_level,
            prefixes: categories.into_iter().map(Into::into).collect(),
        }
    }
}

fn starts_with_ignore_ascii_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

impl Filter for Categories {
    fn enabled(&self, event_id: &EventId, severity: Severity) -> bool {
        severity >= self.min_level
            && self
                .prefixes
                .iter()
                .any(|prefix| starts_with_ignore_ascii_case(event_id.name(), prefix))
    }
}
