//! Coarse overview of a sequence diagram.
//!
//! Instead of translating every message, the overview maps message labels
//! onto a small closed set of [`Category`] values and emits each category
//! present at most once. Initialization categories come first; repeating
//! categories are wrapped in a single repeat block. Output order is fixed by
//! [`INIT_ORDER`] and [`LOOP_ORDER`], never by discovery order.

use std::{collections::HashSet, fmt};

use log::{debug, trace};

use seqflow_core::{
    activity::{ActivityDiagram, ActivityStep},
    label::clean_label,
};
use seqflow_parser::SequenceLine;

/// Condition closing the main-loop repeat block.
pub const REPEAT_CONDITION: &str = "window.isOpen()";

/// Lower-cased prefixes of labels that carry no useful information.
const NOISE_PREFIXES: [&str; 6] = [
    "get_",
    "is_",
    "world_id",
    "operator",
    "activate",
    "deactivate",
];

/// Lower-cased substring marking const accessors.
const NOISE_CONST: &str = " const";

/// A coarse step of the overview diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    InitializeCoreSystems,
    PrepareInitialSpawns,
    InitializeUi,
    SyncTime,
    ProcessSimulationStep,
    UpdateSelection,
    ApplyUiControls,
    UpdatePopulationManager,
    RenderFrame,
}

/// Emission order of initialization steps.
pub const INIT_ORDER: [Category; 3] = [
    Category::InitializeCoreSystems,
    Category::PrepareInitialSpawns,
    Category::InitializeUi,
];

/// Emission order of steps inside the main loop.
pub const LOOP_ORDER: [Category; 6] = [
    Category::SyncTime,
    Category::ApplyUiControls,
    Category::ProcessSimulationStep,
    Category::UpdateSelection,
    Category::UpdatePopulationManager,
    Category::RenderFrame,
];

/// Keyword rules tried in order; the first rule with any matching keyword wins.
const RULES: [(&[&str], Category); 9] = [
    (
        &["game(", "selectionmanager", "spawner("],
        Category::InitializeCoreSystems,
    ),
    (
        &[
            "spawn",
            "pellet",
            "create_creature",
            "random_point",
            "spawn_once",
        ],
        Category::PrepareInitialSpawns,
    ),
    (&["imgui::sfml::init"], Category::InitializeUi),
    (
        &["accumulate", "real time", "actual sim speed", "time scale"],
        Category::SyncTime,
    ),
    (
        &["process_game_logic", "sim("],
        Category::ProcessSimulationStep,
    ),
    (
        &["selection", "follow view", "cursor"],
        Category::UpdateSelection,
    ),
    (
        &["add_type", "controls", "selection mode", "ui"],
        Category::ApplyUiControls,
    ),
    (
        &["population manager", "population_mgr"],
        Category::UpdatePopulationManager,
    ),
    (&["draw", "render", "window"], Category::RenderFrame),
];

impl Category {
    /// The action label emitted for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::InitializeCoreSystems => "Initialize core systems",
            Category::PrepareInitialSpawns => "Prepare initial spawns",
            Category::InitializeUi => "Initialize UI",
            Category::SyncTime => "Sync time + sim speed",
            Category::ProcessSimulationStep => "Process simulation step",
            Category::UpdateSelection => "Update selection / camera",
            Category::ApplyUiControls => "Apply UI controls",
            Category::UpdatePopulationManager => "Update population manager",
            Category::RenderFrame => "Render frame",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns `true` if a cleaned label should be ignored by the overview.
pub fn is_noise(label: &str) -> bool {
    if label.trim().is_empty() {
        return true;
    }
    let lower = label.to_lowercase();
    NOISE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        || lower.contains(NOISE_CONST)
}

/// Map a cleaned label to its category using the first matching rule.
pub fn categorize(label: &str) -> Option<Category> {
    let lower = label.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, category)| *category)
}

/// Summarize classified sequence lines into a coarse overview diagram.
///
/// # Examples
///
/// ```
/// use seqflow::overview::sequence_to_overview;
/// use seqflow_parser::parse;
///
/// let lines = parse("a->b: draw the window\na->b: process_game_logic tick");
/// let diagram = sequence_to_overview(&lines, "Overview");
/// assert_eq!(
///     diagram.lines()[3..7],
///     [
///         "repeat",
///         ":Process simulation step;",
///         ":Render frame;",
///         "repeat while (window.isOpen())",
///     ]
/// );
/// ```
pub fn sequence_to_overview(lines: &[SequenceLine<'_>], title: &str) -> ActivityDiagram {
    let mut seen: HashSet<Category> = HashSet::new();

    for line in lines {
        let SequenceLine::Message(raw) = *line else {
            continue;
        };

        let label = clean_label(raw);
        if is_noise(&label) {
            trace!(label = label.as_str(); "Skipping noise label");
            continue;
        }

        match categorize(&label) {
            Some(category) => {
                seen.insert(category);
            }
            None => debug!(label = label.as_str(); "No category for label"),
        }
    }

    debug!(categories = seen.len(); "Collected overview categories");

    let mut steps: Vec<ActivityStep> = INIT_ORDER
        .iter()
        .filter(|category| seen.contains(*category))
        .map(|category| ActivityStep::Action(category.label().to_string()))
        .collect();

    let loop_steps: Vec<ActivityStep> = LOOP_ORDER
        .iter()
        .filter(|category| seen.contains(*category))
        .map(|category| ActivityStep::Action(category.label().to_string()))
        .collect();

    if !loop_steps.is_empty() {
        steps.push(ActivityStep::Repeat);
        steps.extend(loop_steps);
        steps.push(ActivityStep::RepeatWhile(REPEAT_CONDITION.to_string()));
    }

    ActivityDiagram::new(title, steps)
}

#[cfg(test)]
mod tests {
    use seqflow_parser::parse;

    use super::*;

    fn body(source: &str) -> Vec<String> {
        let lines = parse(source);
        sequence_to_overview(&lines, "Test")
            .steps()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_accessor_label_yields_empty_frame() {
        let lines = parse("a->b: get_value");
        let diagram = sequence_to_overview(&lines, "Overview");
        assert_eq!(
            diagram.lines(),
            vec!["@startuml", "title Overview", "start", "stop", "@enduml"]
        );
    }

    #[test]
    fn test_fixed_order_not_input_order() {
        assert_eq!(
            body("a->b: draw the window\na->b: process_game_logic tick"),
            [
                "repeat",
                ":Process simulation step;",
                ":Render frame;",
                "repeat while (window.isOpen())",
            ]
        );
    }

    #[test]
    fn test_first_rule_wins() {
        // "spawner(" (core systems) also contains "spawn" (initial spawns).
        assert_eq!(
            categorize("Spawner(Game &)"),
            Some(Category::InitializeCoreSystems)
        );
        // "draw_selection" hits "selection" before "draw".
        assert_eq!(
            categorize("draw_selection()"),
            Some(Category::UpdateSelection)
        );
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(
            categorize("ImGui::SFML::Init(window)"),
            Some(Category::InitializeUi)
        );
        assert_eq!(categorize("ACCUMULATE(dt)"), Some(Category::SyncTime));
    }

    #[test]
    fn test_unmapped_label() {
        assert_eq!(categorize("compute_fitness()"), None);
        assert!(body("a -> b : compute_fitness()").is_empty());
    }

    #[test]
    fn test_noise_filter() {
        assert!(is_noise(""));
        assert!(is_noise("   "));
        assert!(is_noise("get_position()"));
        assert!(is_noise("IS_alive()"));
        assert!(is_noise("world_id()"));
        assert!(is_noise("operator=(const Circle &)"));
        assert!(is_noise("deactivate_all()"));
        assert!(is_noise("radius() const"));
        assert!(!is_noise("draw()"));
        assert!(!is_noise("target_spawn()"));
    }

    #[test]
    fn test_noise_wins_over_category() {
        assert!(body("a -> b : get_window_size()").is_empty());
        assert!(body("a -> b : draw() const").is_empty());
    }

    #[test]
    fn test_init_only_omits_repeat_block() {
        assert_eq!(
            body("a -> b : Game(unsigned int)\na -> b : spawn_pellets()"),
            [":Initialize core systems;", ":Prepare initial spawns;"]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(
            body("a -> b : draw()\nloop\na -> b : render()\nend\na -> b : draw()"),
            ["repeat", ":Render frame;", "repeat while (window.isOpen())"]
        );
    }

    #[test]
    fn test_control_flow_is_ignored() {
        assert_eq!(
            body("alt [window open]\ngroup render\nelse [x]\nend\nloop [draw]\nend"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_full_overview() {
        let source = "\
a -> b : **Game(unsigned int,unsigned int)**
a -> b : ImGui::SFML::Init(sf::RenderWindow &)
a -> b : spawn_initial_creatures()
loop [while window open]
a -> b : update_population_mgr()
a -> b : accumulate_real_time(float)
a -> b : draw(sf::RenderWindow &)
a -> b : sim(float)
a -> b : apply_controls()
a -> b : update_cursor()
end";
        assert_eq!(
            body(source),
            [
                ":Initialize core systems;",
                ":Prepare initial spawns;",
                ":Initialize UI;",
                "repeat",
                ":Sync time + sim speed;",
                ":Apply UI controls;",
                ":Process simulation step;",
                ":Update selection / camera;",
                ":Update population manager;",
                ":Render frame;",
                "repeat while (window.isOpen())",
            ]
        );
    }

    #[test]
    fn test_category_partition() {
        for category in INIT_ORDER {
            assert!(!LOOP_ORDER.contains(&category));
        }
        for (_, category) in RULES {
            assert!(INIT_ORDER.contains(&category) || LOOP_ORDER.contains(&category));
        }
        assert_eq!(RULES.len(), INIT_ORDER.len() + LOOP_ORDER.len());
    }
}
