//! Authentication service configuration

/// Configuration for the authentication service
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Echo the generated OTP code back to the API caller.
    ///
    /// Defeats the purpose of an OTP if the response is observable by
    /// anyone but the delivery channel; exists solely so end-to-end
    /// tests can complete the flow without an SMS gateway. Off unless
    /// explicitly enabled.
    pub expose_code_for_testing: bool,
}

impl AuthConfig {
    pub fn new(expose_code_for_testing: bool) -> Self {
        Self {
            expose_code_for_testing,
        }
    }
}
