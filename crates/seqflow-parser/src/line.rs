//! Classified sequence-diagram lines.

/// One line of a sequence diagram, classified by its leading token.
///
/// Payloads borrow the raw text following the keyword or the message colon.
/// They are not cleaned; see `seqflow_core::label::clean_label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceLine<'src> {
    /// Blank lines, `@startuml`, participant declarations, activation
    /// markers and `hide` directives.
    Structural,
    /// `group <label>` opens a grouped region.
    Group(&'src str),
    /// `alt <condition>` opens an alternative branch.
    Alt(&'src str),
    /// `else` with an optional label.
    Else(&'src str),
    /// `loop <label>` opens a loop.
    Loop(&'src str),
    /// The `end` terminator.
    End,
    /// An arrow line; the payload is the text after the first colon.
    Message(&'src str),
    /// Anything else.
    Other,
}
