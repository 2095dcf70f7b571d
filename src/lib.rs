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

//! Logto formats structured log events into human-readable text lines and writes them to a
//! line-oriented sink.
//!
//! # Overview
//!
//! A [`FormattingLogger`] is built from three parts that stay fixed for its lifetime:
//!
//! * a [`Sink`] that receives each formatted line,
//! * a [`Filter`] that decides whether an event is worth formatting,
//! * the [`FormatOptions`] that pick which prefix fields to render and whether multi-line
//!   messages are indented or collapsed.
//!
//! # Examples
//!
//! ```
//! use logto::FormatOptions;
//! use logto::FormattingLogger;
//! use logto::filter::Categories;
//! use logto::record::EventId;
//! use logto::record::LogEvent;
//! use logto::record::Severity;
//! use logto::sink::Stderr;
//!
//! const CONTEXT_INITIALIZED: EventId =
//!     EventId::new(10403, "Microsoft.EntityFrameworkCore.Infrastructure.ContextInitialized");
//!
//! let logger = FormattingLogger::new(
//!     Stderr::default(),
//!     Categories::new(Severity::Information, ["Microsoft.EntityFrameworkCore"]),
//!     FormatOptions::DEFAULT_WITH_UTC_TIME,
//! );
//!
//! let event = LogEvent::builder()
//!     .severity(Severity::Information)
//!     .event_id(CONTEXT_INITIALIZED)
//!     .event_id_code("CoreEventId.ContextInitialized")
//!     .message("Entity Framework Core initialized 'ShopContext'")
//!     .build();
//!
//! if logger.should_log(event.event_id(), event.severity()) {
//!     logger.log(&event).unwrap();
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod filter;
pub mod format;
pub mod record;
pub mod sink;
pub mod trap;

pub use self::error::Error;
pub use self::filter::Filter;
pub use self::logger::FormattingLogger;
pub use self::options::FormatOptions;
pub use self::sink::Sink;

mod bridge;
mod clock;
mod error;
mod logger;
mod options;
