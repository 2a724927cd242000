//! Regression test parameters and operations

use glyphfeat_core::{FeatureMatrix, FeatureVector};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results against expected values (default)
    #[default]
    Compare,
    /// Display mode - run and report without failing the test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current
/// comparison index, mode, and accumulated failures.
///
/// # Examples
///
/// ```
/// use glyphfeat_test::RegParams;
///
/// let mut rp = RegParams::new("projections");
/// rp.compare_values(2.0, 2.0, 0.0);
/// assert!(rp.cleanup());
/// ```
pub struct RegParams {
    /// Name of the test (e.g., "projections")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare a feature vector against expected values, exactly.
    pub fn compare_vector(&mut self, expected: &[f32], actual: &FeatureVector) -> bool {
        self.index += 1;

        if actual.as_slice() != expected {
            let msg = format!(
                "Failure in {}_reg: vector comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name,
                self.index,
                expected,
                actual.as_slice()
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two feature matrices for bit-exact equality.
    pub fn compare_matrices(&mut self, first: &FeatureMatrix, second: &FeatureMatrix) -> bool {
        self.index += 1;

        if first != second {
            let msg = format!(
                "Failure in {}_reg: matrix comparison for index {} - \
                 {} vs {} rows, lengths {:?} vs {:?}",
                self.test_name,
                self.index,
                first.len(),
                second.len(),
                first.uniform_len(),
                second.uniform_len()
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Finish the test, reporting accumulated failures.
    ///
    /// Returns the overall success status; in display mode failures are
    /// reported but the test is not considered failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success || self.mode == RegTestMode::Display
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params_selftest");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert_eq!(rp.index(), 3);
    }

    #[test]
    fn test_compare_vector() {
        let mut rp = RegParams::new("params_selftest");
        let fv = FeatureVector::from_slice(&[1.0, 2.0]);
        assert!(rp.compare_vector(&[1.0, 2.0], &fv));
        assert!(!rp.compare_vector(&[1.0, 2.5], &fv));
        // with a failure recorded, cleanup passes only in display mode
        assert_eq!(rp.cleanup(), RegTestMode::from_env() == RegTestMode::Display);
    }
}
