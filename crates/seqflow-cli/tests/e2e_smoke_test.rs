use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::{TempDir, tempdir};

use seqflow::{EXIT_TOOL_NOT_FOUND, SeqflowError};
use seqflow_cli::{Args, Command, run};

/// Sample clang-uml output checked in at the workspace root.
fn sample_sequence() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
        .join("petri_flow_simple.puml")
}

/// Lay out a project with the sample sequence diagram and a config file.
fn project(extra_config: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp directory");
    let uml = dir.path().join("uml");
    fs::create_dir_all(&uml).unwrap();
    fs::copy(sample_sequence(), uml.join("petri_flow_simple.puml")).unwrap();

    let config_path = dir.path().join("seqflow.toml");
    let config = format!(
        "[project]\nroot = {:?}\n\n{extra_config}",
        dir.path().display().to_string()
    );
    fs::write(&config_path, config).unwrap();

    (dir, config_path)
}

fn args(command: Command, config: &Path, skip_generate: bool, skip_render: bool) -> Args {
    Args {
        command,
        config: Some(config.to_string_lossy().to_string()),
        skip_generate,
        skip_render,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_flow_from_sample() {
    let (dir, config) = project("");

    let report = run(&args(Command::Flow, &config, true, true)).expect("flow succeeds");

    let activity = dir.path().join("uml").join("petri_flow_activity.puml");
    assert_eq!(report.activity(), activity);
    assert!(report.rendered().is_empty());

    let expected = "\
@startuml
title Petri Dish Simulation - Auto Activity (from petri_flow_simple)
start
:Game(unsigned int,unsigned int,const std::string &);
:Spawner(Game &);
:SelectionManager(sf::RenderWindow &,Camera &);
:run();
:spawn_initial_pellets();
repeat
:random_point(float);
repeat while (while window.isOpen())
:ImGui::SFML::Init(sf::RenderWindow &);
repeat
:accumulate_real_time(float);
:get_time_scale() const;
if (!paused) then (yes)
:process_game_logic();
:sim(float);
elseif (step_once)
:process_game_logic();
endif
:update_selection(sf::Vector2f);
:render_ui_controls();
:update_population_mgr();
:draw(sf::RenderWindow &);
repeat while (window.isOpen())
stop
@enduml
";
    assert_eq!(fs::read_to_string(&activity).unwrap(), expected);
}

#[test]
fn e2e_overview_from_sample() {
    let (dir, config) = project("[overview]\ntitle = \"Sample overview\"\n");

    run(&args(Command::Overview, &config, true, true)).expect("overview succeeds");

    let expected = "\
@startuml
title Sample overview
start
:Initialize core systems;
:Prepare initial spawns;
:Initialize UI;
repeat
:Sync time + sim speed;
:Apply UI controls;
:Process simulation step;
:Update selection / camera;
:Update population manager;
:Render frame;
repeat while (window.isOpen())
stop
@enduml
";
    let written = fs::read_to_string(
        dir.path()
            .join("uml")
            .join("petri_flow_activity_overview.puml"),
    )
    .unwrap();
    assert_eq!(written, expected);
}

#[test]
fn e2e_missing_generator() {
    let (dir, config) = project("[generator]\nprogram = \"seqflow-missing-generator-7d2e\"\n");

    let err = run(&args(Command::Flow, &config, false, true)).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_TOOL_NOT_FOUND);
    assert!(
        !dir.path()
            .join("uml")
            .join("petri_flow_activity.puml")
            .exists()
    );
}

#[test]
fn e2e_missing_renderer_keeps_activity() {
    let (dir, config) = project("[renderer]\nprogram = \"seqflow-missing-renderer-7d2e\"\n");

    let err = run(&args(Command::Overview, &config, true, false)).unwrap_err();

    assert!(matches!(err, SeqflowError::Tool { .. }));
    assert_eq!(err.exit_code(), EXIT_TOOL_NOT_FOUND);
    assert!(
        dir.path()
            .join("uml")
            .join("petri_flow_activity_overview.puml")
            .exists()
    );
}

#[cfg(unix)]
#[test]
fn e2e_failing_generator_propagates_status() {
    let (_dir, config) = project("[generator]\nprogram = \"sh\"\nargs = [\"-c\", \"exit 3\"]\n");

    let err = run(&args(Command::Flow, &config, false, true)).unwrap_err();

    assert_eq!(err.exit_code(), 3);
}

#[test]
fn e2e_missing_config_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = run(&args(Command::Flow, &missing, true, true)).unwrap_err();

    assert!(matches!(err, SeqflowError::Config(_)));
}
