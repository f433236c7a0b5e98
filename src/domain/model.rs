/// Response headers every checked endpoint must advertise, with the exact
/// values expected.
pub const EXPECTED_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Methods", "GET"),
    ("Access-Control-Allow-Origin", "*"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMismatch {
    pub header: String,
    pub expected: String,
    /// Empty when the header was absent from the response.
    pub got: String,
}

/// Result of one URL check. `TransportError` also covers requests that could
/// not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Success,
    HeaderMismatch,
    TransportError,
}

impl CheckOutcome {
    pub fn is_failure(self) -> bool {
        self != CheckOutcome::Success
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub dispatched: usize,
    pub passed: usize,
    pub mismatched: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: CheckOutcome) {
        match outcome {
            CheckOutcome::Success => self.passed += 1,
            CheckOutcome::HeaderMismatch => self.mismatched += 1,
            CheckOutcome::TransportError => self.errored += 1,
        }
    }

    pub fn failed(&self) -> usize {
        self.mismatched + self.errored
    }
}
