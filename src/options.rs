use std::time::Duration;

/// Runtime settings of the postal code lookup. `Default` waits five seconds.
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// How long a lookup may take before the postal code is reported as
    /// [`Reason::PostalCodeLookupTimeout`](crate::Reason::PostalCodeLookupTimeout).
    pub timeout: Duration,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}
