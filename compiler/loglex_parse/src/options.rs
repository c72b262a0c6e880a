//! Run options.

/// What the assembler does with an illegal token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IllegalPolicy {
    /// Stop the run with [`ParseError::IllegalInput`](crate::ParseError::IllegalInput).
    #[default]
    Abort,
    /// Drop the token, log a warning and keep going.
    Skip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub on_illegal: IllegalPolicy,
}

impl ParseOptions {
    #[must_use]
    pub fn on_illegal(mut self, policy: IllegalPolicy) -> Self {
        self.on_illegal = policy;
        self
    }
}
