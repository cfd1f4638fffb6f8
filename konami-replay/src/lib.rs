pub mod error;
pub mod lexer;
pub mod parser;

pub use error::ReplayError;
pub use parser::{ReplayEvent, ScriptStep, parse_script};

use std::fs::read_to_string;
use std::path::Path;

use konami_core::{ListenerConfig, MatchState, SequenceListener};
use log::{debug, info};

/// What happened at one step of a replay
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub line: usize,
    pub event: ReplayEvent,
    /// Matcher state, or `None` if the event never reached the matcher
    pub state: Option<MatchState>,
    /// Prefix length after the step
    pub progress: usize,
}

/// Result of replaying a whole script
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReplayReport {
    pub steps: Vec<StepOutcome>,
    pub matches: usize,
    pub activated: bool,
}

/// Drives a listener built from `config` through the given steps
pub fn replay(steps: &[ScriptStep], config: &ListenerConfig) -> Result<ReplayReport, ReplayError> {
    let mut listener = SequenceListener::with_config(config, || info!("Key sequence completed"))?;
    let mut report = ReplayReport::default();

    for step in steps {
        let state = match &step.event {
            ReplayEvent::Key(event) => listener.handle_key_event(event),
            ReplayEvent::Reset => {
                listener.reset_sequence();
                None
            }
            ReplayEvent::Attach => {
                listener.attach();
                None
            }
            ReplayEvent::Detach => {
                listener.detach();
                None
            }
        };
        debug!("line {}: {:?} -> {:?}", step.line, step.event, state);

        report.steps.push(StepOutcome {
            line: step.line,
            event: step.event.clone(),
            state,
            progress: listener.progress(),
        });
    }

    report.matches = listener.match_count();
    report.activated = listener.is_activated();
    Ok(report)
}

/// Parses and replays a script held in memory
pub fn replay_script(script: &str, config: &ListenerConfig) -> Result<ReplayReport, ReplayError> {
    let steps = parse_script(script)?;
    replay(&steps, config)
}

/// Reads, parses and replays a script file
pub fn replay_file(path: &Path, config: &ListenerConfig) -> Result<ReplayReport, ReplayError> {
    let script = read_to_string(path)?;
    replay_script(&script, config)
}
