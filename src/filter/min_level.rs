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

use crate::filter::Filter;
use crate::record::EventId;
use crate::record::Severity;

/// Log every event at or above a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLevel(pub Severity);

impl Default for MinLevel {
    fn default() -> Self {
        MinLevel(Severity::Debug)
    }
}

impl Filter for MinLevel {
    fn enabled(&self, _: &EventId, severity: Severity) -> bool {
        severity >= self.0
    }
}

impl From<Severity> for MinLevel {
    fn from(severity: Severity) -> Self {
        MinLevel(severity)
    }
}
