/// Default cap applied by the feature truncator.
pub const DEFAULT_FEATURE_LIMIT: usize = 70_000;

#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Single-pass scanner that recognizes bare constructor tokens and
    /// adjacent object boundaries directly.
    #[default]
    Scanner,
    /// Ordered literal substitutions, byte-compatible with the legacy scripts.
    TextPatch,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Repair strategy used by arc repair and feature joining.
    pub engine: Engine,
    /// Maximum number of features kept by the truncator.
    pub feature_limit: usize,
    /// When true, escape non-ASCII characters in strings as \uXXXX.
    pub ensure_ascii: bool,
    /// Indent the serialized output.
    pub pretty: bool,
    /// Enable repair logging. Use the `*_with_log` functions to retrieve logs.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many characters are captured on both sides of the position.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            engine: Engine::Scanner,
            feature_limit: DEFAULT_FEATURE_LIMIT,
            ensure_ascii: false,
            pretty: false,
            logging: false,
            log_context_window: 10,
        }
    }
}
