//! Cardio-test derived values.

/// Bruce treadmill protocol: estimated VO2 max (ml/kg/min) from total
/// walking time in minutes.
pub fn bruce_treadmill_vo2_max(total_minutes: f64) -> f64 {
    let t = total_minutes;
    14.8 - 1.379 * t + 0.451 * t * t - 0.012 * t * t * t
}

/// Queens College step test: estimated VO2 max (ml/kg/min) from the
/// recovery heart rate in beats per minute.
pub fn step_test_vo2_max(recovery_hr_bpm: f64, female: bool) -> f64 {
    if female {
        65.81 - 0.1847 * recovery_hr_bpm
    } else {
        111.33 - 0.42 * recovery_hr_bpm
    }
}

/// Which cardio computation a test name calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardioProtocol {
    Treadmill,
    StepTest,
}

pub fn cardio_protocol(test_name: &str) -> Option<CardioProtocol> {
    let name = test_name.to_lowercase();
    if name.contains("treadmill") || name.contains("bruce") {
        Some(CardioProtocol::Treadmill)
    } else if name.contains("step") {
        Some(CardioProtocol::StepTest)
    } else {
        None
    }
}
