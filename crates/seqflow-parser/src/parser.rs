//! Line classifier built from winnow combinators.
//!
//! Each recognizer matches a keyword prefix of an already-trimmed line. The
//! recognizers are tried in a fixed order and the first match wins, so a line
//! such as `activate_all -> x : y` is structural rather than a message.

use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, eof, opt, preceded, terminated},
    error::{ContextError, ModalResult},
    token::{any, rest},
};

use crate::SequenceLine;

type IResult<O> = ModalResult<O, ContextError>;

/// Arrow token shared by solid (`->`) and dashed (`-->`) messages.
const ARROW: &str = "->";

/// Blank lines and presentational directives.
fn structural<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    alt((
        eof,
        "@startuml",
        "participant",
        "activate",
        "deactivate",
        "hide",
    ))
    .value(SequenceLine::Structural)
    .parse_next(input)
}

/// `group` followed directly by the label.
fn group<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    preceded("group", rest)
        .map(SequenceLine::Group)
        .parse_next(input)
}

/// `alt ` followed by the condition.
fn alt_branch<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    preceded("alt ", rest)
        .map(SequenceLine::Alt)
        .parse_next(input)
}

/// `else`, optionally followed by a label.
fn else_branch<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    preceded("else", rest)
        .map(SequenceLine::Else)
        .parse_next(input)
}

/// `loop` followed by one separator character, then the label.
fn loop_block<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    preceded(("loop", opt(any)), rest)
        .map(SequenceLine::Loop)
        .parse_next(input)
}

/// Exactly `end`.
fn end<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    terminated("end", eof)
        .value(SequenceLine::End)
        .parse_next(input)
}

/// An arrow line carrying a `:`-delimited label.
fn message<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    rest.verify_map(|line: &'src str| {
        if !line.contains(ARROW) {
            return None;
        }
        line.split_once(':')
            .map(|(_, label)| SequenceLine::Message(label))
    })
    .parse_next(input)
}

fn sequence_line<'src>(input: &mut &'src str) -> IResult<SequenceLine<'src>> {
    alt((
        structural,
        group,
        alt_branch,
        else_branch,
        loop_block,
        end,
        message,
    ))
    .parse_next(input)
}

/// Classify a single line.
///
/// Surrounding whitespace is ignored. Lines outside the recognized
/// vocabulary classify as [`SequenceLine::Other`].
pub fn parse_line(line: &str) -> SequenceLine<'_> {
    let mut input = line.trim();
    sequence_line
        .parse_next(&mut input)
        .unwrap_or(SequenceLine::Other)
}

/// Returns `true` for characters that end a line.
///
/// Besides `\n` this covers a lone `\r`, vertical tab, form feed, the
/// information separators and the Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}'..='\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `source` into lines. `\r\n` counts as one break and a trailing
/// break does not start an extra empty line.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut remaining = source;
    std::iter::from_fn(move || {
        if remaining.is_empty() {
            return None;
        }
        let Some(at) = remaining.find(is_line_break) else {
            let line = remaining;
            remaining = "";
            return Some(line);
        };
        let line = &remaining[..at];
        let tail = &remaining[at..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        remaining = &tail[skip..];
        Some(line)
    })
}

/// Classify every line of a sequence-diagram document.
///
/// Lines end at `\n`, `\r\n`, a lone `\r`, or any other line separator
/// listed in [`is_line_break`].
pub fn parse(source: &str) -> Vec<SequenceLine<'_>> {
    split_lines(source)
        .enumerate()
        .map(|(index, line)| {
            let classified = parse_line(line);
            if classified == SequenceLine::Other {
                trace!(line_number = index + 1, line = line; "Unrecognized sequence line");
            }
            classified
        })
        .collect()
}
