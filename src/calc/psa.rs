//! PSA: progressive sensitivity adjustment
//!
//! A fixed 7-step binary search. Each step offers a lower and a higher
//! candidate around the current sensitivity; the user's pick moves the
//! sensitivity halfway towards it, and the window narrows as steps go on.
//!
//! The session is an explicit state machine. The host asks for the pending
//! [`ChoiceRequest`], shows it however it likes, and feeds the answer back
//! through [`PsaSession::resolve`].

use super::{Field, InputError, parse_sensitivity, round2};
use tracing::{debug, info};

pub const FIRST_STEP: u8 = 1;
pub const FINAL_STEP: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Lower,
    Higher,
}

/// Candidate values offered at one step, already rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBounds {
    pub low: f64,
    pub high: f64,
}

impl StepBounds {
    pub fn pick(&self, choice: Choice) -> f64 {
        match choice {
            Choice::Lower => self.low,
            Choice::Higher => self.high,
        }
    }
}

/// Raw (low, high) multipliers applied to the sensitivity at `step`
pub fn multipliers(step: u8) -> Option<(f64, f64)> {
    match step {
        1 | 2 => Some((0.5, 1.5)),
        3..=6 => {
            let mul = f64::from(step + 3) * 0.1;
            Some((mul, 2.0 - mul))
        }
        7 => Some((0.95, 1.05)),
        _ => None,
    }
}

/// Bounds for `step`, or `None` outside 1..=7
pub fn compute_bounds(sensitivity: f64, step: u8) -> Option<StepBounds> {
    let (low_mul, high_mul) = multipliers(step)?;
    Some(StepBounds {
        low: round2(sensitivity * low_mul),
        high: round2(sensitivity * high_mul),
    })
}

/// Sensitivity after picking `choice` at `step`: the rounded midpoint between
/// the current value and the chosen bound
pub fn advance(sensitivity: f64, step: u8, choice: Choice) -> Option<f64> {
    let bounds = compute_bounds(sensitivity, step)?;
    Some(round2((sensitivity + bounds.pick(choice)) / 2.0))
}

/// Parse the PSA input field and check it can start a session
pub fn parse_initial(text: &str) -> Result<f64, InputError> {
    let value = parse_sensitivity(text)?;
    validate_initial(value)
}

fn validate_initial(value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::invalid(Field::Sensitivity, value.to_string()))
    }
}

/// "Choice needed" event emitted once per step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceRequest {
    pub step: u8,
    pub sensitivity: f64,
    pub bounds: StepBounds,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PsaOutcome {
    Next(PsaSession),
    Finished { recommended: f64 },
}

/// In-flight PSA run. Dropping it abandons the run.
#[derive(Debug, Clone, PartialEq)]
pub struct PsaSession {
    sensitivity: f64,
    step: u8,
    bounds: StepBounds,
}

impl PsaSession {
    pub fn start(initial: f64) -> Result<Self, InputError> {
        let sensitivity = validate_initial(initial)?;
        info!("Starting PSA session at sensitivity {}", sensitivity);
        Ok(Self::at(sensitivity, FIRST_STEP))
    }

    fn at(sensitivity: f64, step: u8) -> Self {
        // Only constructed with FIRST_STEP..=FINAL_STEP
        let bounds = compute_bounds(sensitivity, step).unwrap_or(StepBounds {
            low: sensitivity,
            high: sensitivity,
        });
        debug!(
            "PSA step {}: sensitivity {:.2}, low {}, high {}",
            step, sensitivity, bounds.low, bounds.high
        );
        Self {
            sensitivity,
            step,
            bounds,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn request(&self) -> ChoiceRequest {
        ChoiceRequest {
            step: self.step,
            sensitivity: self.sensitivity,
            bounds: self.bounds,
        }
    }

    pub fn resolve(self, choice: Choice) -> PsaOutcome {
        let next = round2((self.sensitivity + self.bounds.pick(choice)) / 2.0);
        debug!("PSA step {}: chose {:?} -> {}", self.step, choice, next);

        if self.step >= FINAL_STEP {
            info!("PSA session finished, recommended sensitivity {}", next);
            PsaOutcome::Finished { recommended: next }
        } else {
            PsaOutcome::Next(Self::at(next, self.step + 1))
        }
    }
}

/// Drive a whole session, asking `choose` at every step
pub fn run<F>(initial: f64, mut choose: F) -> Result<f64, InputError>
where
    F: FnMut(&ChoiceRequest) -> Choice,
{
    let mut session = PsaSession::start(initial)?;
    loop {
        let choice = choose(&session.request());
        match session.resolve(choice) {
            PsaOutcome::Next(next) => session = next,
            PsaOutcome::Finished { recommended } => return Ok(recommended),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 6] = [1.0, 3.2, 7.3, 50.0, 123.45, 1000.0];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_multiplier_pairs() {
        let expected = [
            (1, 0.5, 1.5),
            (2, 0.5, 1.5),
            (3, 0.6, 1.4),
            (4, 0.7, 1.3),
            (5, 0.8, 1.2),
            (6, 0.9, 1.1),
            (7, 0.95, 1.05),
        ];
        for (step, low, high) in expected {
            let (l, h) = multipliers(step).unwrap();
            assert!(close(l, low) && close(h, high), "step {}: {} {}", step, l, h);
        }
    }

    #[test]
    fn test_out_of_range_step_is_noop() {
        assert_eq!(compute_bounds(50.0, 0), None);
        assert_eq!(compute_bounds(50.0, 8), None);
        assert_eq!(advance(50.0, 8, Choice::Lower), None);
    }

    #[test]
    fn test_bounds_straddle_sensitivity() {
        for s in SAMPLES {
            for step in FIRST_STEP..=FINAL_STEP {
                let b = compute_bounds(s, step).unwrap();
                assert!(b.low < s && s < b.high, "s {} step {}: {:?}", s, step, b);
            }
        }
    }

    #[test]
    fn test_bounds_are_rounded() {
        let b = compute_bounds(3.338, 1).unwrap();
        assert_eq!(b.low, 1.67);
        assert_eq!(b.high, 5.01);
    }

    #[test]
    fn test_advance_is_rounded_midpoint() {
        for s in SAMPLES {
            for step in FIRST_STEP..=FINAL_STEP {
                let b = compute_bounds(s, step).unwrap();
                for choice in [Choice::Lower, Choice::Higher] {
                    let next = advance(s, step, choice).unwrap();
                    assert_eq!(next, round2((s + b.pick(choice)) / 2.0));
                }
            }
        }
    }

    #[test]
    fn test_advance_moves_towards_bound() {
        for step in FIRST_STEP..=FINAL_STEP {
            let b = compute_bounds(50.0, step).unwrap();
            let low = advance(50.0, step, Choice::Lower).unwrap();
            let high = advance(50.0, step, Choice::Higher).unwrap();
            assert!(b.low < low && low < 50.0);
            assert!(50.0 < high && high < b.high);
        }
    }

    #[test]
    fn test_first_step_from_fifty() {
        let session = PsaSession::start(50.0).unwrap();
        let request = session.request();
        assert_eq!(request.step, 1);
        assert_eq!(request.bounds, StepBounds { low: 25.0, high: 75.0 });

        match session.resolve(Choice::Lower) {
            PsaOutcome::Next(next) => {
                assert_eq!(next.step(), 2);
                assert_eq!(next.sensitivity(), 37.5);
            }
            other => panic!("expected next step, got {:?}", other),
        }
    }

    #[test]
    fn test_session_runs_exactly_seven_steps() {
        let mut seen = Vec::new();
        let result = run(50.0, |req| {
            seen.push(req.step);
            Choice::Higher
        })
        .unwrap();

        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(result > 50.0);
    }

    #[test]
    fn test_run_matches_manual_advance() {
        let picks = [
            Choice::Lower,
            Choice::Higher,
            Choice::Higher,
            Choice::Lower,
            Choice::Lower,
            Choice::Higher,
            Choice::Lower,
        ];

        let mut expected = 50.0;
        for (i, choice) in picks.iter().enumerate() {
            expected = advance(expected, i as u8 + 1, *choice).unwrap();
        }

        let mut iter = picks.iter();
        let result = run(50.0, |_| *iter.next().unwrap()).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_all_lower_from_fifty() {
        let mut trace = Vec::new();
        let result = run(50.0, |req| {
            trace.push(req.sensitivity);
            Choice::Lower
        })
        .unwrap();

        assert_eq!(trace, vec![50.0, 37.5, 28.12, 22.5, 19.12, 17.21, 16.35]);
        assert_eq!(result, 15.94);
    }

    #[test]
    fn test_higher_then_lower_from_fifty() {
        let mut first = true;
        let result = run(50.0, |_| {
            if std::mem::take(&mut first) {
                Choice::Higher
            } else {
                Choice::Lower
            }
        })
        .unwrap();
        assert_eq!(result, 26.58);
    }

    #[test]
    fn test_all_higher_from_fifty() {
        assert_eq!(run(50.0, |_| Choice::Higher).unwrap(), 127.63);
    }

    #[test]
    fn test_all_lower_stays_positive() {
        let result = run(0.5, |_| Choice::Lower).unwrap();
        assert!(result > 0.0);
    }

    #[test]
    fn test_start_rejects_non_positive() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = PsaSession::start(bad).unwrap_err();
            assert_eq!(err.field(), Field::Sensitivity);
        }
    }

    #[test]
    fn test_run_rejects_before_asking() {
        let mut asked = false;
        let result = run(-5.0, |_| {
            asked = true;
            Choice::Lower
        });
        assert!(result.is_err());
        assert!(!asked);
    }

    #[test]
    fn test_parse_initial() {
        assert_eq!(parse_initial(" 50.0 "), Ok(50.0));
        assert!(parse_initial("abc").is_err());
        assert!(parse_initial("0").is_err());
        assert!(parse_initial("-5").is_err());
    }
}
