//! Consistency-check policy constants.
//!
//! These thresholds are clinic policy, not derived values. They are kept
//! here, named, so a deployment can be audited against its protocol
//! manual in one place.

/// Rapid-exchange grip must not exceed this fraction of standard grip.
pub const RAPID_EXCHANGE_MAX_RATIO: f64 = 0.85;

/// Maximum acceptable bilateral deficiency on the maximal-grip position.
pub const GRIP_MVE_MAX_DEFICIENCY: u32 = 20;

/// Coefficient-of-variation ceiling treated as a consistent effort.
pub const CV_MAX_PERCENT: u32 = 15;

/// Window for three consecutive range-of-motion trials: absolute spread.
pub const ROM_WINDOW_DEGREES: f64 = 5.0;

/// Window for three consecutive range-of-motion trials: spread relative
/// to the window mean.
pub const ROM_WINDOW_PERCENT: f64 = 10.0;

/// Minimum CV pass rate across repeated tests for test/retest reliability.
pub const RETEST_CV_PASS_RATE: f64 = 80.0;

/// Minimum overall CV pass rate across the whole battery.
pub const CV_PASS_RATE_MIN: f64 = 70.0;

/// Dominant-hand grip may exceed the non-dominant side by at most this
/// ratio.
pub const DOMINANT_MAX_RATIO: f64 = 1.10;
