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

use crate::Error;
use crate::sink::Sink;

type WriteFunction = dyn Fn(&str) -> Result<(), Error> + Send + Sync + 'static;

/// A sink that you can pass the custom write function.
///
/// The function receives every formatted line. Its error is returned from
/// [`FormattingLogger::log`](crate::FormattingLogger::log) unchanged. For example:
///
/// ```
/// use std::sync::Mutex;
///
/// use logto::sink::CustomSink;
///
/// let lines = Mutex::new(Vec::new());
/// let sink = CustomSink::new(move |text: &str| {
///     lines.lock().unwrap().push(text.to_owned());
///     Ok(())
/// });
/// ```
pub struct CustomSink {
    f: Box<WriteFunction>,
}

impl fmt::Debug for CustomSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomSink {{ ... }}")
    }
}

impl CustomSink {
    /// Creates a new `CustomSink` from the write function.
    pub fn new(sink: impl Fn(&str) -> Result<(), Error> + Send + Sync + 'static) -> Self {
        CustomSink { f: Box::new(sink) }
    }
}

impl Sink for CustomSink {
    fn write(&self, text: &str) -> Result<(), Error> {
        (self.f)(text)
    }
}
