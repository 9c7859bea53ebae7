//! Command handlers for swiperate CLI.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use swiperate::errors::Error;
use swiperate::gesture::{Displacement, replay};
use swiperate::preferences::{self, PreferenceSummary, PromptIssue};
use swiperate::{Config, Thresholds};

use crate::output::*;

/// Exit code when `check` finds issues.
const CHECK_FAILED: u8 = 2;

/// Commands supported by swiperate CLI.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Classify a drag displacement against the commit threshold
    Classify {
        /// Horizontal displacement (positive is right)
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,

        /// Vertical displacement (positive is down)
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,

        /// Commit threshold (default: from config)
        #[arg(short = 't', long)]
        threshold: Option<f64>,
    },
    /// Preview the action a drag is heading toward
    Hint {
        /// Horizontal displacement (positive is right)
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,

        /// Vertical displacement (positive is down)
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,

        /// Hint threshold (default: from config)
        #[arg(short = 't', long)]
        threshold: Option<f64>,
    },
    /// Replay a JSON file of recorded pointer events
    Replay {
        /// Path to the events file
        events: PathBuf,
    },
    /// Append learned preferences to a prompt
    Augment {
        /// Base prompt text
        prompt: String,

        /// Preference history JSON (default: configured preferences path)
        #[arg(short = 's', long)]
        summary: Option<PathBuf>,
    },
    /// Run the prompt quality heuristics
    Check {
        /// Prompt text
        prompt: String,

        /// Require a learned preference block
        #[arg(long)]
        expect_preferences: bool,
    },
    /// Print the effective configuration
    Config,
    Version,
}

/// Execute a CLI command.
pub fn execute(command: &Commands, config: &Config, json: bool) -> Result<ExitCode, Error> {
    match command {
        Commands::Classify { dx, dy, threshold } => {
            let thresholds = Thresholds::new(
                config.hint_threshold,
                threshold.unwrap_or(config.commit_threshold),
            )?;
            handle_direction(*dx, *dy, &thresholds, Stage::Commit, json)
        }
        Commands::Hint { dx, dy, threshold } => {
            let thresholds = Thresholds::new(
                threshold.unwrap_or(config.hint_threshold),
                config.commit_threshold,
            )?;
            handle_direction(*dx, *dy, &thresholds, Stage::Hint, json)
        }
        Commands::Replay { events } => handle_replay(events, config.thresholds()?, json),
        Commands::Augment { prompt, summary } => {
            let path = summary.as_deref().unwrap_or(&config.preferences_path);
            handle_augment(prompt, path, summary.is_some(), json)
        }
        Commands::Check {
            prompt,
            expect_preferences,
        } => handle_check(prompt, config, *expect_preferences, json),
        Commands::Config => handle_config(config, json),
        Commands::Version => handle_version(json),
    }
}

/// Which threshold of the pair a direction command reports against.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Commit,
    Hint,
}

fn handle_direction(
    dx: f64,
    dy: f64,
    thresholds: &Thresholds,
    stage: Stage,
    json: bool,
) -> Result<ExitCode, Error> {
    let displacement = Displacement::new(dx, dy)?;
    let (action, threshold) = match stage {
        Stage::Commit => (thresholds.classify(displacement), thresholds.commit()),
        Stage::Hint => (thresholds.preview(displacement), thresholds.hint()),
    };

    if json {
        print_json(&ClassifyResponse {
            action,
            displacement,
            threshold,
        });
    } else {
        println!("{}", action);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_replay(events_path: &Path, thresholds: Thresholds, json: bool) -> Result<ExitCode, Error> {
    let events = replay::load_events(events_path)?;
    let report = replay::replay(&events, thresholds)?;

    if json {
        print_json(&ReplayResponse {
            events: events.len(),
            report,
        });
    } else {
        for gesture in &report.committed {
            println!("pointer {}: {}", gesture.pointer, gesture.action);
        }
        let tally: Vec<String> = report
            .tally()
            .into_iter()
            .map(|(action, count)| format!("{action} {count}"))
            .collect();
        println!("{}", tally.join(", "));
        println!(
            "{} committed, {} reset, {} cancelled, {} unfinished",
            report.committed.len(),
            report.resets,
            report.cancelled,
            report.unfinished
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_augment(
    prompt: &str,
    summary_path: &Path,
    explicit: bool,
    json: bool,
) -> Result<ExitCode, Error> {
    // An explicitly named file must exist; the configured default may not yet.
    if explicit {
        if let Err(e) = std::fs::metadata(summary_path) {
            if e.kind() == io::ErrorKind::NotFound {
                return Err(Error::FileNotFound(summary_path.to_path_buf()));
            }
        }
    }

    let summary: Option<PreferenceSummary> = preferences::load_summary(summary_path)?;
    let augmented = preferences::augment(prompt, summary.as_ref());

    if json {
        print_json(&AugmentResponse {
            prompt: augmented,
            preferences_applied: summary.is_some(),
            items_analyzed: summary.map(|s| s.items_analyzed),
        });
    } else {
        println!("{}", augmented);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_check(
    prompt: &str,
    config: &Config,
    expect_preferences: bool,
    json: bool,
) -> Result<ExitCode, Error> {
    let rules = config.quality_rules(expect_preferences);
    let report = preferences::assess_prompt(prompt, &rules);
    let acceptable = report.is_acceptable();

    if json {
        print_json(&CheckResponse { acceptable, report });
    } else if acceptable {
        println!(
            "OK ({} words, {} chars)",
            report.word_count, report.char_count
        );
    } else {
        for issue in &report.issues {
            println!("{}", describe_issue(issue));
        }
    }

    if acceptable {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(CHECK_FAILED))
    }
}

fn describe_issue(issue: &PromptIssue) -> String {
    match issue {
        PromptIssue::Empty => "prompt is empty".to_string(),
        PromptIssue::TooShort { words, min } => {
            format!("prompt too short: {words} words (minimum {min})")
        }
        PromptIssue::TooLong { chars, max } => {
            format!("prompt too long: {chars} chars (maximum {max})")
        }
        PromptIssue::MissingPreferenceBlock => "learned preference block is missing".to_string(),
        PromptIssue::UnbalancedPreferenceBlock { missing } => {
            format!("preference block is missing: {}", missing.join(", "))
        }
    }
}

fn handle_config(config: &Config, json: bool) -> Result<ExitCode, Error> {
    if json {
        print_json(config);
    } else {
        println!("commit_threshold = {}", config.commit_threshold);
        println!("hint_threshold = {}", config.hint_threshold);
        println!("preferences_path = {}", config.preferences_path.display());
        println!("min_prompt_words = {}", config.min_prompt_words);
        println!("max_prompt_chars = {}", config.max_prompt_chars);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn handle_version(json: bool) -> Result<ExitCode, Error> {
    if json {
        print_json(&serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "name": env!("CARGO_PKG_NAME")
        }));
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_issue() {
        assert_eq!(
            describe_issue(&PromptIssue::TooShort { words: 1, min: 3 }),
            "prompt too short: 1 words (minimum 3)"
        );
        assert_eq!(
            describe_issue(&PromptIssue::UnbalancedPreferenceBlock {
                missing: vec!["USER HATES:", "SUGGESTIONS:"],
            }),
            "preference block is missing: USER HATES:, SUGGESTIONS:"
        );
    }

    fn classify_cmd(dx: f64, threshold: Option<f64>) -> Commands {
        Commands::Classify {
            dx,
            dy: 0.0,
            threshold,
        }
    }

    fn hint_cmd(dx: f64, threshold: Option<f64>) -> Commands {
        Commands::Hint {
            dx,
            dy: 0.0,
            threshold,
        }
    }

    #[test]
    fn test_direction_rejects_bad_threshold() {
        let config = Config::default();
        let result = execute(&classify_cmd(10.0, Some(-1.0)), &config, true);
        assert!(matches!(result, Err(Error::InvalidThreshold { .. })));
    }

    #[test]
    fn test_direction_rejects_nan_displacement() {
        let thresholds = Thresholds::default();
        let result = handle_direction(f64::NAN, 0.0, &thresholds, Stage::Commit, true);
        assert!(matches!(result, Err(Error::NonFiniteCoordinate { .. })));
    }

    #[test]
    fn test_hint_override_above_commit_rejected() {
        // Default config: hint 50, commit 100.
        let config = Config::default();
        let result = execute(&hint_cmd(120.0, Some(150.0)), &config, true);
        assert!(matches!(
            result,
            Err(Error::InvalidThreshold { hint, commit }) if hint == 150.0 && commit == 100.0
        ));
    }

    #[test]
    fn test_commit_override_below_hint_rejected() {
        let config = Config::default();
        let result = execute(&classify_cmd(45.0, Some(10.0)), &config, true);
        assert!(matches!(
            result,
            Err(Error::InvalidThreshold { hint, commit }) if hint == 50.0 && commit == 10.0
        ));
    }

    #[test]
    fn test_overrides_that_keep_order_accepted() {
        let config = Config::default();
        assert!(execute(&classify_cmd(130.0, Some(120.0)), &config, true).is_ok());
        assert!(execute(&hint_cmd(40.0, Some(30.0)), &config, true).is_ok());
    }

    #[test]
    fn test_augment_explicit_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = handle_augment("Base.", &dir.path().join("nope.json"), true, true);
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_augment_default_missing_file_passes_through() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = handle_augment("Base.", &dir.path().join("nope.json"), false, true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_exit_codes() {
        let config = Config::default();
        let ok = handle_check("A calm ocean at sunrise", &config, false, true).unwrap();
        assert_eq!(ok, ExitCode::SUCCESS);

        let failed = handle_check("", &config, false, true).unwrap();
        assert_eq!(failed, ExitCode::from(CHECK_FAILED));
    }
}
