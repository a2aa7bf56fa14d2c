//! Parse configuration shared by the `Scanner` and the `Parser`.

/// The default maximum nesting depth (e.g., `[[[]]]`) to prevent stack overflows.
pub const DEFAULT_MAX_DEPTH: usize = 20;
/// The default maximum size of an input JSON (10MB) to prevent DoS attacks.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Limits and leniencies applied to a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of nested arrays and objects.
    pub max_depth: usize,
    /// Inputs longer than this many bytes are rejected before scanning.
    pub max_input_bytes: usize,
    /// Accept numbers written with a leading `+`, e.g. `+1`.
    /// RFC 8259 does not allow this.
    pub allow_leading_plus: bool,
}

impl Options {
    /// Sets the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the largest accepted input, in bytes.
    pub fn max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Enables or disables accepting a leading `+` on numbers.
    pub fn allow_leading_plus(mut self, allow: bool) -> Self {
        self.allow_leading_plus = allow;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            allow_leading_plus: false,
        }
    }
}
