//! Integration tests exercising the swiperate library API from an external crate.

use swiperate::errors::Error;
use swiperate::gesture::replay::{parse_events, replay};
use swiperate::preferences::{
    PreferenceHistory, QualityRules, load_summary, normalize, render_block,
};
use swiperate::{
    Config, Displacement, GestureOutcome, GestureTracker, Point, PreferenceSummary, SwipeAction,
    Thresholds, assess_prompt, augment, classify, hint,
};

fn d(dx: f64, dy: f64) -> Displacement {
    Displacement::new(dx, dy).expect("finite displacement")
}

/// A clear horizontal drag past the commit threshold is a right swipe.
#[test]
fn test_classify_right_scenario() {
    assert_eq!(classify(d(150.0, 10.0), 100.0), SwipeAction::Right);
}

/// A clear upward drag past the commit threshold is an up swipe.
#[test]
fn test_classify_up_scenario() {
    assert_eq!(classify(d(10.0, -150.0), 100.0), SwipeAction::Up);
}

/// A short drag in any direction does not commit.
#[test]
fn test_classify_short_drag_scenario() {
    assert_eq!(classify(d(30.0, 40.0), 100.0), SwipeAction::None);
}

/// The hint shows up at half the distance of the commit.
#[test]
fn test_hint_precedes_commit() {
    let displacement = d(-70.0, 12.0);
    assert_eq!(hint(displacement, 50.0), SwipeAction::Left);
    assert_eq!(classify(displacement, 100.0), SwipeAction::None);
}

/// Non-finite input is reported, not swallowed.
#[test]
fn test_non_finite_displacement_rejected() {
    let result = Displacement::new(f64::NAN, 1.0);
    assert!(matches!(result, Err(Error::NonFiniteCoordinate { .. })));
}

/// Thresholds must keep hint below commit.
#[test]
fn test_inverted_thresholds_rejected() {
    assert!(matches!(
        Thresholds::new(100.0, 50.0),
        Err(Error::InvalidThreshold { .. })
    ));
}

/// The tracker calls back once per committed swipe and never for resets.
#[test]
fn test_tracker_rates_a_deck() {
    let mut tracker = GestureTracker::new(Thresholds::default());
    let mut rated: Vec<SwipeAction> = Vec::new();

    let drags = [(160.0, 5.0), (20.0, 30.0), (-5.0, 180.0), (-220.0, 40.0)];
    let mut outcomes = Vec::new();
    for (dx, dy) in drags {
        tracker.start(0, Point::new(400.0, 300.0).unwrap()).unwrap();
        tracker.update(0, Point::new(400.0 + dx, 300.0 + dy).unwrap()).unwrap();
        let outcome = tracker
            .end(0, &mut |action: SwipeAction| rated.push(action))
            .unwrap();
        outcomes.push(outcome);
    }

    assert_eq!(
        rated,
        vec![SwipeAction::Right, SwipeAction::Down, SwipeAction::Left]
    );
    assert_eq!(outcomes[1], GestureOutcome::Reset);
    assert_eq!(tracker.active_pointers(), 0);
}

/// Recorded event streams replay into the same actions.
#[test]
fn test_replay_event_stream() {
    let events = parse_events(
        r#"[
            {"type": "start", "pointer": 0, "x": 10, "y": 10},
            {"type": "move", "pointer": 0, "x": 40, "y": -60},
            {"type": "move", "pointer": 0, "x": 20, "y": -140},
            {"type": "end", "pointer": 0}
        ]"#,
    )
    .unwrap();

    let report = replay(&events, Thresholds::default()).unwrap();
    assert_eq!(report.actions(), vec![SwipeAction::Up]);
    assert_eq!(report.resets, 0);
}

/// Absent preferences leave the prompt untouched.
#[test]
fn test_augment_identity_without_summary() {
    for prompt in ["", "Base.", "A red bicycle\nleaning on a wall"] {
        assert_eq!(augment(prompt, None), prompt);
    }
}

/// Full scenario from a summary with one entry per list.
#[test]
fn test_augment_scenario() {
    let summary = PreferenceSummary::new(
        2,
        vec!["X".to_string()],
        vec!["Y".to_string()],
        vec!["Z".to_string()],
    );
    let prompt = augment("Base.", Some(&summary));

    assert!(prompt.starts_with("Base."));
    assert!(prompt.contains("1. X"));
    assert!(prompt.contains("1. Y"));
    assert!(prompt.contains("1. Z"));
    assert!(prompt.contains("from 2 rated items"));
    assert!(prompt.ends_with(&render_block(&summary)));
}

/// Empty lists still render the headings.
#[test]
fn test_augment_empty_summary() {
    let summary = PreferenceSummary::default();
    let prompt = augment("p", Some(&summary));
    assert!(prompt.contains("USER LOVES"));
    assert!(prompt.contains("from 0 rated items"));
}

/// All the "no history" shapes collapse to the identity.
#[test]
fn test_missing_history_shapes_are_identity() {
    let shapes = [
        None,
        Some(PreferenceHistory::default()),
        Some(PreferenceHistory {
            has_history: true,
            preferences: None,
        }),
        Some(PreferenceHistory {
            has_history: false,
            preferences: Some(PreferenceSummary::new(9, vec!["x".into()], vec![], vec![])),
        }),
    ];

    for shape in shapes {
        let summary = normalize(shape);
        assert_eq!(augment("Base.", summary.as_ref()), "Base.");
    }
}

/// Summary file on disk feeds the injector and passes the prompt check.
#[test]
fn test_summary_file_to_checked_prompt() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(
        &path,
        r#"{
            "hasHistory": true,
            "preferences": {
                "itemsAnalyzed": 7,
                "loves": ["soft light", "muted palette"],
                "hates": ["busy backgrounds"],
                "suggestions": ["more close-ups"]
            }
        }"#,
    )
    .unwrap();

    let summary = load_summary(&path).unwrap();
    let prompt = augment("Portrait of an old fisherman", summary.as_ref());

    let rules = QualityRules {
        expect_preferences: true,
        ..QualityRules::default()
    };
    let report = assess_prompt(&prompt, &rules);
    assert!(report.is_acceptable(), "issues: {:?}", report.issues);
    assert!(prompt.contains("2. muted palette"));
}

/// A config file layer produces usable thresholds.
#[test]
fn test_config_file_thresholds() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "commit_threshold = 80.0\nhint_threshold = 30.0\n").unwrap();

    // Only reads env vars this test does not set.
    let config = Config::load_from(&path).unwrap();
    let thresholds = config.thresholds().unwrap();

    assert_eq!(thresholds.commit(), 80.0);
    assert_eq!(thresholds.preview(d(35.0, 0.0)), SwipeAction::Right);
    assert_eq!(thresholds.classify(d(35.0, 0.0)), SwipeAction::None);
}
