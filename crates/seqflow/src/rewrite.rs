//! Verbatim translation of a sequence diagram into an activity diagram.
//!
//! Every message becomes an action, `alt`/`group` become decisions and
//! `loop` becomes a repeat block. Nesting is tracked with a [`BlockStack`]
//! that is always drained by the end of the pass, so the output is well
//! formed even when the input is truncated.

use log::{debug, trace};

use seqflow_core::{
    activity::{ActivityDiagram, ActivityStep},
    label::clean_label,
};
use seqflow_parser::SequenceLine;

/// Label used when a `group` line carries no text.
const DEFAULT_GROUP_LABEL: &str = "group";
/// Condition used when an `alt` line carries no text.
const DEFAULT_CONDITION: &str = "condition";
/// Repeat condition used when a `loop` line carries no text.
const DEFAULT_LOOP_LABEL: &str = "loop";

/// An open control-flow block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Opened by `group` or `alt`; closes with `endif`.
    Conditional,
    /// Opened by `loop`; closes with `repeat while (<label>)`.
    Loop(String),
}

impl Block {
    /// The step that closes this block.
    fn close(self) -> ActivityStep {
        match self {
            Block::Conditional => ActivityStep::EndIf,
            Block::Loop(label) => ActivityStep::RepeatWhile(label),
        }
    }
}

/// Stack of blocks opened but not yet closed during a single pass.
#[derive(Debug, Default)]
pub struct BlockStack {
    blocks: Vec<Block>,
}

impl BlockStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly opened block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Close the innermost block, if any.
    pub fn close_innermost(&mut self) -> Option<ActivityStep> {
        self.blocks.pop().map(Block::close)
    }

    /// Close every open block, innermost first.
    pub fn drain(&mut self) -> Vec<ActivityStep> {
        self.blocks.drain(..).rev().map(Block::close).collect()
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` when no block is open.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Clean `raw`, falling back to `default` when nothing is left.
fn label_or(raw: &str, default: &str) -> String {
    let label = clean_label(raw);
    if label.is_empty() {
        default.to_string()
    } else {
        label
    }
}

/// Translate classified sequence lines into an activity diagram.
///
/// The function is total: unrecognized lines are skipped, stray `end` lines
/// are dropped and blocks left open at the end are closed innermost first.
///
/// # Examples
///
/// ```
/// use seqflow::rewrite::sequence_to_activity;
/// use seqflow_parser::parse;
///
/// let lines = parse("alt check\na->b: do_something\nend");
/// let diagram = sequence_to_activity(&lines, "Demo");
/// assert_eq!(
///     diagram.lines()[3..6],
///     ["if (check) then (yes)", ":do_something;", "endif"]
/// );
/// ```
pub fn sequence_to_activity(lines: &[SequenceLine<'_>], title: &str) -> ActivityDiagram {
    let mut steps = Vec::new();
    let mut stack = BlockStack::new();

    for line in lines {
        match *line {
            SequenceLine::Structural | SequenceLine::Other => {}
            SequenceLine::Group(raw) => {
                steps.push(ActivityStep::If(label_or(raw, DEFAULT_GROUP_LABEL)));
                stack.push(Block::Conditional);
            }
            SequenceLine::Alt(raw) => {
                steps.push(ActivityStep::If(label_or(raw, DEFAULT_CONDITION)));
                stack.push(Block::Conditional);
            }
            SequenceLine::Else(raw) => {
                let label = clean_label(raw);
                if label.is_empty() {
                    steps.push(ActivityStep::Else);
                } else {
                    steps.push(ActivityStep::ElseIf(label));
                }
            }
            SequenceLine::Loop(raw) => {
                steps.push(ActivityStep::Repeat);
                stack.push(Block::Loop(label_or(raw, DEFAULT_LOOP_LABEL)));
            }
            SequenceLine::End => match stack.close_innermost() {
                Some(close) => steps.push(close),
                None => trace!("Dropping `end` with no open block"),
            },
            SequenceLine::Message(raw) => {
                let label = clean_label(raw);
                if !label.is_empty() {
                    steps.push(ActivityStep::Action(label));
                }
            }
        }
    }

    if !stack.is_empty() {
        debug!(open_blocks = stack.depth(); "Closing unterminated blocks");
        steps.extend(stack.drain());
    }

    ActivityDiagram::new(title, steps)
}
