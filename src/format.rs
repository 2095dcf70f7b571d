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

//! The text rendering of a [`LogEvent`].
//!
//! Output format with [`FormatOptions::DEFAULT`]:
//!
//! ```text
//! info: 08/11/2024 22:44:57.172 2024-08-11T14:44:57.1721053Z RelationalEventId.CommandExecuted[20101] (Database.Command) 
//!       Executed DbCommand (1ms)
//!       SELECT 1
//! ```
//!
//! With [`FormatOptions::SINGLE_LINE`] and any other flag the body follows a `-> ` marker on the
//! same line:
//!
//! ```text
//! info: RelationalEventId.CommandExecuted[20101] (Database.Command) -> Executed DbCommand (1ms)SELECT 1
//! ```

use std::fmt::Write;

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::FormatOptions;
use crate::record::LogEvent;
use crate::record::Severity;

/// The line break appended between the prefix and a multi-line body.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// The line break appended between the prefix and a multi-line body.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// The indent of continuation lines, as wide as a severity tag.
pub const PADDING: &str = "      ";

/// The marker between the prefix and the body in single-line mode.
pub const SINGLE_LINE_MARKER: &str = "-> ";

/// The short tag for `severity`.
///
/// Every tag is six characters wide, except the one for [`Severity::None`] which is `none`
/// without a trailing space.
pub fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Trace => "trce: ",
        Severity::Debug => "dbug: ",
        Severity::Information => "info: ",
        Severity::Warning => "warn: ",
        Severity::Error => "fail: ",
        Severity::Critical => "crit: ",
        Severity::None => "none",
    }
}

/// The category of a dotted event name: everything before the last `.`.
///
/// Returns `None` if the name has no separator or starts with its only one.
///
/// ```
/// use logto::format::category_of;
///
/// assert_eq!(category_of("Database.Command.Created"), Some("Database.Command"));
/// assert_eq!(category_of("Startup"), None);
/// assert_eq!(category_of(".Startup"), None);
/// ```
pub fn category_of(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(pos) if pos > 0 => Some(&name[..pos]),
        _ => None,
    }
}

/// Remove every `\r\n` and `\n` from `text[from..]`.
///
/// # Panics
///
/// Panics if `from` does not lie on a char boundary.
pub fn strip_line_breaks(text: &mut String, from: usize) {
    let tail = text.split_off(from);
    for piece in tail.split_inclusive('\n') {
        let line = match piece.strip_suffix('\n') {
            Some(line) => line.strip_suffix('\r').unwrap_or(line),
            None => piece,
        };
        text.push_str(line);
    }
}

/// Follow every line break in `text[from..]` with [`PADDING`].
///
/// # Panics
///
/// Panics if `from` does not lie on a char boundary.
pub fn indent_line_breaks(text: &mut String, from: usize) {
    let tail = text.split_off(from);
    for piece in tail.split_inclusive('\n') {
        text.push_str(piece);
        if piece.ends_with('\n') {
            text.push_str(PADDING);
        }
    }
}

/// Render `event` according to `options`.
///
/// `now` is the instant written by the time fields; it is shown in `tz` for
/// [`LOCAL_TIME`](FormatOptions::LOCAL_TIME).
pub fn format_event(
    options: FormatOptions,
    event: &LogEvent,
    now: Timestamp,
    tz: &TimeZone,
) -> String {
    let message = event.message();
    if options.is_empty() {
        return message.to_owned();
    }

    let mut text = String::new();

    if options.contains(FormatOptions::LEVEL) {
        text.push_str(severity_tag(event.severity()));
    }

    if options.contains(FormatOptions::LOCAL_TIME) {
        write_local_time(&mut text, &now.to_zoned(tz.clone()));
    }

    if options.contains(FormatOptions::UTC_TIME) {
        // SAFETY: write to a string always succeeds
        write!(&mut text, "{now:.7} ").unwrap();
    }

    if options.contains(FormatOptions::ID) {
        let code = event.event_id_code();
        let id = event.event_id().id();
        // SAFETY: write to a string always succeeds
        write!(&mut text, "{code}[{id}] ").unwrap();
    }

    if options.contains(FormatOptions::CATEGORY) {
        if let Some(category) = category_of(event.event_id().name()) {
            // SAFETY: write to a string always succeeds
            write!(&mut text, "({category}) ").unwrap();
        }
    }

    let preamble_len = text.len();

    if options.is_single_line_only() {
        text.push_str(message);
        strip_line_breaks(&mut text, 0);
    } else if options.contains(FormatOptions::SINGLE_LINE) {
        text.push_str(SINGLE_LINE_MARKER);
        text.push_str(message);
        strip_line_breaks(&mut text, preamble_len);
    } else {
        text.push_str(LINE_ENDING);
        text.push_str(message);
        indent_line_breaks(&mut text, preamble_len);
    }

    text
}

// short date then HH:mm:ss.fff
fn write_local_time(text: &mut String, now: &Zoned) {
    // SAFETY: write to a string always succeeds
    write!(
        text,
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}.{:03} ",
        now.month(),
        now.day(),
        now.year(),
        now.hour(),
        now.minute(),
        now.second(),
        now.millisecond(),
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EventId;

    fn instant() -> Timestamp {
        "2024-08-11T14:44:57.1721053Z".parse().unwrap()
    }

    fn event(message: &'static str) -> LogEvent {
        LogEvent::builder()
            .severity(Severity::Information)
            .event_id(EventId::new(20101, "Database.Command.CommandExecuted"))
            .event_id_code("RelationalEventId.CommandExecuted")
            .message(message)
            .build()
    }

    fn render(options: FormatOptions, message: &'static str) -> String {
        format_event(options, &event(message), instant(), &TimeZone::fixed(jiff::tz::offset(8)))
    }

    #[test]
    fn test_severity_tags() {
        let tags = Severity::ALL.map(severity_tag);
        assert_eq!(
            tags,
            ["trce: ", "dbug: ", "info: ", "warn: ", "fail: ", "crit: ", "none"]
        );
        for tag in &tags[..6] {
            assert_eq!(tag.len(), 6);
        }
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("Database.Command.Created"), Some("Database.Command"));
        assert_eq!(category_of("Database.Command"), Some("Database"));
        assert_eq!(category_of("Startup"), None);
        assert_eq!(category_of(".Startup"), None);
        assert_eq!(category_of(""), None);
        assert_eq!(category_of("a."), Some("a"));
    }

    #[test]
    fn test_strip_line_breaks() {
        let mut text = String::from("a\nb\r\nc\r");
        strip_line_breaks(&mut text, 0);
        assert_eq!(text, "abc\r");

        let mut text = String::from("x\ny\nz");
        strip_line_breaks(&mut text, 2);
        assert_eq!(text, "x\nyz");
    }

    #[test]
    fn test_indent_line_breaks() {
        let mut text = String::from("head\r\nfirst\nsecond");
        indent_line_breaks(&mut text, 4);
        assert_eq!(text, "head\r\n      first\n      second");

        let mut text = String::from("a\nb");
        indent_line_breaks(&mut text, 3);
        assert_eq!(text, "a\nb");
    }

    #[test]
    fn test_none_passes_message_through() {
        assert_eq!(render(FormatOptions::NONE, "first\nsecond\r\n"), "first\nsecond\r\n");
    }

    #[test]
    fn test_level_and_id_and_category() {
        let options = FormatOptions::LEVEL | FormatOptions::ID | FormatOptions::CATEGORY;
        assert_eq!(
            render(options, "Executed"),
            format!(
                "info: RelationalEventId.CommandExecuted[20101] (Database.Command) {LINE_ENDING}      Executed"
            )
        );
    }

    #[test]
    fn test_time_fields() {
        assert_eq!(
            render(FormatOptions::LOCAL_TIME | FormatOptions::SINGLE_LINE, "done"),
            "08/11/2024 22:44:57.172 -> done"
        );
        assert_eq!(
            render(FormatOptions::UTC_TIME | FormatOptions::SINGLE_LINE, "done"),
            "2024-08-11T14:44:57.1721053Z -> done"
        );
    }

    #[test]
    fn test_field_order() {
        let text = render(FormatOptions::DEFAULT | FormatOptions::SINGLE_LINE, "a\nb");
        assert_eq!(
            text,
            "info: 08/11/2024 22:44:57.172 2024-08-11T14:44:57.1721053Z \
             RelationalEventId.CommandExecuted[20101] (Database.Command) -> ab"
        );
    }

    #[test]
    fn test_module_doc_output() {
        let message = "Executed DbCommand (1ms)\nSELECT 1";
        let text = render(FormatOptions::DEFAULT, message);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "info: 08/11/2024 22:44:57.172 2024-08-11T14:44:57.1721053Z \
                 RelationalEventId.CommandExecuted[20101] (Database.Command) ",
                "      Executed DbCommand (1ms)",
                "      SELECT 1",
            ]
        );

        let options = FormatOptions::LEVEL
            | FormatOptions::ID
            | FormatOptions::CATEGORY
            | FormatOptions::SINGLE_LINE;
        assert_eq!(
            render(options, message),
            "info: RelationalEventId.CommandExecuted[20101] (Database.Command) -> \
             Executed DbCommand (1ms)SELECT 1"
        );
    }

    #[test]
    fn test_single_line_only() {
        assert_eq!(render(FormatOptions::SINGLE_LINE, "a\r\nb\nc"), "abc");
    }

    #[test]
    fn test_multi_line_body_is_indented() {
        let text = render(FormatOptions::LEVEL, "first\nsecond");
        assert_eq!(text, format!("info: {LINE_ENDING}      first\n      second"));
    }

    #[test]
    fn test_unknown_severity_tag_has_no_space() {
        let event = event("x").to_builder().severity(Severity::None).build();
        let text = format_event(
            FormatOptions::LEVEL | FormatOptions::SINGLE_LINE,
            &event,
            instant(),
            &TimeZone::UTC,
        );
        assert_eq!(text, "none-> x");
    }
}
