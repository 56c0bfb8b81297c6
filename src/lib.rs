//! Core type aliases, constants, and runtime utilities for nashduel.
//!
//! A human steers a pointer, a machine answers with its own action, and a
//! fixed pair of quadratic costs scores every frame. The machine adapts
//! with one of three rules while rounds are recorded to disk for offline
//! analysis.
//!
//! # Module Structure
//!
//! - `cost`: Quadratic cost model shared by every consumer
//! - `stats`: Averages, medians, smoothing, and the denominator guard
//! - `record`: Per-round frame capture and archive persistence
//! - `adapt`: Machine adaptation rules
//! - `human`: Human input channel and simulated participants
//! - `round`: Frame loop, pacing, and cooperative exit
//! - `analysis`: Offline reports over persisted rounds

pub mod adapt;
pub mod analysis;
pub mod cost;
pub mod human;
pub mod record;
pub mod round;
pub mod stats;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A player's control value for one frame, semantically in [-1, 1].
pub type Action = f64;
/// Per-frame cost assigned to one player by the cost model.
pub type Cost = f64;
/// Linear response coefficient relating machine action to human action.
pub type Slope = f64;

/// Lower bound of the action range.
pub const ACTION_MIN: Action = -1.0;
/// Upper bound of the action range.
pub const ACTION_MAX: Action = 1.0;

// ============================================================================
// NUMERICAL STABILITY
// ============================================================================
/// Denominators smaller than this in magnitude are replaced by it (signed).
pub const EPSILON: f64 = 1e-9;

// ============================================================================
// ADAPTATION DEFAULTS
// Step sizes and perturbations for the three machine rules.
// ============================================================================
/// Learning rate for gradient descent in action space.
pub const GRADIENT_ALPHA: f64 = 0.1;
/// Additive action perturbation for the conjectural-variation rule.
pub const CONJECTURAL_DELTA: Action = 0.05;
/// Initial policy slope for the conjectural-variation rule.
pub const CONJECTURAL_SLOPE: Slope = 1.0;
/// Slope perturbation for the policy-gradient rule.
pub const POLICY_DELTA: Slope = 0.05;
/// Step size for the policy-gradient rule.
pub const POLICY_GAMMA: f64 = 2.0;
/// Initial policy slope for the policy-gradient rule.
pub const POLICY_SLOPE: Slope = 0.0;
/// Frames averaged per trial (one half of a nominal/perturbed pair).
pub const MINI_ROUND_FRAMES: usize = 300;

// ============================================================================
// ROUND TIMING
// ============================================================================
/// Target frame rate of the round driver.
pub const FRAMES_PER_SECOND: usize = 60;
/// Default round duration.
pub const ROUND_DURATION: std::time::Duration = std::time::Duration::from_secs(120);

// ============================================================================
// PERSISTENCE
// ============================================================================
/// Root directory for round archives.
pub const DATA_DIRECTORY: &str = "data";
/// Length of the random archive identifier.
pub const FILE_HASH_LENGTH: usize = 10;

// ============================================================================
// OFFLINE ANALYSIS
// ============================================================================
/// Moving-average window applied to median cost series.
pub const SMOOTHING_WINDOW: usize = 100;
/// Sample count for best-response reference curves.
pub const REACTION_POINTS: usize = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Global quit flag, the headless stand-in for window-close and escape.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional session deadline from ROUND_DEADLINE env var.
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Check if a quit was requested or the session deadline passed.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}
/// Request a quit. The current round stops at its next frame and flushes.
pub fn interrupt() {
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}

/// Register the quit handler. Type "Q" (or ESC) + Enter to end the current round.
/// Optionally set ROUND_DEADLINE env var (e.g., "90s", "5m") to bound the session.
#[cfg(feature = "server")]
pub fn brb() {
    if let Ok(duration) = std::env::var("ROUND_DEADLINE") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("session will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) => break,
                Ok(_) => match buffer.trim().to_uppercase().as_str() {
                    "Q" | "\u{1b}" => {
                        log::warn!("quit requested, flushing current round...");
                        interrupt();
                        break;
                    }
                    _ => continue,
                },
                Err(_) => break,
            }
        }
    });
}

/// Parse duration string like "30s", "5m", "2h" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (split, unit) = s.char_indices().last()?;
    let value = s[..split].parse::<u64>().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("90s"), Some(std::time::Duration::from_secs(90)));
        assert_eq!(parse_duration(" 5m "), Some(std::time::Duration::from_secs(300)));
        assert_eq!(parse_duration("2h"), Some(std::time::Duration::from_secs(7200)));
        assert_eq!(parse_duration("2d"), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn durations_reject_odd_units_without_panicking() {
        assert_eq!(parse_duration("5é"), None);
        assert_eq!(parse_duration("5µ"), None);
        assert_eq!(parse_duration("é"), None);
        assert_eq!(parse_duration(&format!("{}h", u64::MAX)), None);
        let max = std::time::Duration::from_secs(u64::MAX);
        assert_eq!(parse_duration(&format!("{}s", u64::MAX)), Some(max));
    }
}
