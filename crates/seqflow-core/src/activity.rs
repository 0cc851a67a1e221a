//! Activity-diagram output model.
//!
//! An [`ActivityDiagram`] is a title plus an ordered list of
//! [`ActivityStep`]s. Rendering produces PlantUML activity syntax, framed by
//! the fixed `@startuml`/`start` header and `stop`/`@enduml` footer.

use std::fmt;

/// Marker opening a PlantUML document.
pub const START_UML: &str = "@startuml";
/// Marker closing a PlantUML document.
pub const END_UML: &str = "@enduml";
/// Initial node of an activity diagram.
pub const START_NODE: &str = "start";
/// Final node of an activity diagram.
pub const STOP_NODE: &str = "stop";

/// A single step in an activity diagram body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActivityStep {
    /// An action box: `:label;`
    Action(String),
    /// Opens a decision diamond: `if (cond) then (yes)`
    If(String),
    /// Another guarded branch of the open decision: `elseif (cond)`
    ElseIf(String),
    /// Fallback branch of the open decision.
    Else,
    /// Closes a decision.
    EndIf,
    /// Opens a repeat loop.
    Repeat,
    /// Closes a repeat loop: `repeat while (cond)`
    RepeatWhile(String),
}

impl ActivityStep {
    /// Returns `true` if this step opens a block that needs a matching close.
    pub fn opens_block(&self) -> bool {
        matches!(self, ActivityStep::If(_) | ActivityStep::Repeat)
    }

    /// Returns `true` if this step closes a block.
    pub fn closes_block(&self) -> bool {
        matches!(self, ActivityStep::EndIf | ActivityStep::RepeatWhile(_))
    }
}

impl fmt::Display for ActivityStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityStep::Action(label) => write!(f, ":{label};"),
            ActivityStep::If(cond) => write!(f, "if ({cond}) then (yes)"),
            ActivityStep::ElseIf(cond) => write!(f, "elseif ({cond})"),
            ActivityStep::Else => write!(f, "else"),
            ActivityStep::EndIf => write!(f, "endif"),
            ActivityStep::Repeat => write!(f, "repeat"),
            ActivityStep::RepeatWhile(cond) => write!(f, "repeat while ({cond})"),
        }
    }
}

/// A complete activity diagram ready to be written out.
///
/// # Examples
///
/// ```
/// use seqflow_core::activity::{ActivityDiagram, ActivityStep};
///
/// let diagram = ActivityDiagram::new(
///     "Demo",
///     vec![ActivityStep::Action("tick".to_string())],
/// );
/// assert_eq!(
///     diagram.to_string(),
///     "@startuml\ntitle Demo\nstart\n:tick;\nstop\n@enduml\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDiagram {
    title: String,
    steps: Vec<ActivityStep>,
}

impl ActivityDiagram {
    /// Create a diagram from a title and body steps.
    pub fn new(title: impl Into<String>, steps: Vec<ActivityStep>) -> Self {
        Self {
            title: title.into(),
            steps,
        }
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body steps, without the surrounding frame.
    pub fn steps(&self) -> &[ActivityStep] {
        &self.steps
    }

    /// Returns every output line, frame included.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.steps.len() + 5);
        lines.push(START_UML.to_string());
        lines.push(format!("title {}", self.title));
        lines.push(START_NODE.to_string());
        lines.extend(self.steps.iter().map(ToString::to_string));
        lines.push(STOP_NODE.to_string());
        lines.push(END_UML.to_string());
        lines
    }
}

impl fmt::Display for ActivityDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
