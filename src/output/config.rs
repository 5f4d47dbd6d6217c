//! Configuration for event presentation.

/// How much detail to print for a single event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One-line summaries with truncated payloads (default).
    #[default]
    Terse,
    /// Full payloads: tool inputs/results and complete text blocks.
    Verbose,
}

impl Verbosity {
    /// Resolve verbosity from the `DEBUG_VERBOSE` environment variable.
    ///
    /// Only the literal string `"true"` enables verbose mode; anything else,
    /// including an unset variable, is terse.
    pub fn from_env() -> Self {
        match std::env::var("DEBUG_VERBOSE").as_deref() {
            Ok("true") => Verbosity::Verbose,
            _ => Verbosity::Terse,
        }
    }

    /// Check if this is verbose mode.
    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }
}

/// Where the presenter gets its verbosity from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerbositySource {
    /// Re-read `DEBUG_VERBOSE` on every event (default). The flag can flip
    /// mid-run and the next event picks it up.
    #[default]
    Env,
    /// Use an explicit verbosity, ignoring the environment.
    Fixed(Verbosity),
}

impl VerbositySource {
    /// Resolve the effective verbosity for one presentation call.
    pub fn resolve(self) -> Verbosity {
        match self {
            VerbositySource::Env => Verbosity::from_env(),
            VerbositySource::Fixed(v) => v,
        }
    }
}

/// Configuration for the event presenter.
///
/// Use the builder pattern to adjust preview lengths or pin verbosity:
///
/// ```rust,ignore
/// use agentlog::output::{PresenterConfig, Verbosity};
///
/// let config = PresenterConfig::new()
///     .verbosity(Verbosity::Verbose)
///     .command_preview(120);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PresenterConfig {
    /// Where verbosity comes from for each call.
    pub verbosity: VerbositySource,
    /// Maximum characters of a tool command shown in terse mode.
    pub command_preview: usize,
    /// Maximum characters of assistant text shown in terse mode.
    pub text_preview: usize,
    /// Maximum characters of a tool result shown in verbose mode.
    pub result_preview: usize,
    /// Width of the rule above and below bordered blocks.
    pub rule_width: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            verbosity: VerbositySource::Env,
            command_preview: 70,
            text_preview: 100,
            result_preview: 300,
            rule_width: 70,
        }
    }
}

impl PresenterConfig {
    /// Create a configuration with defaults: env-backed verbosity, 70-char
    /// command previews, 100-char text previews, 300-char result previews.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin verbosity to an explicit value instead of consulting the
    /// environment.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = VerbositySource::Fixed(verbosity);
        self
    }

    /// Set the terse-mode command preview length.
    pub fn command_preview(mut self, chars: usize) -> Self {
        self.command_preview = chars;
        self
    }

    /// Set the terse-mode text preview length.
    pub fn text_preview(mut self, chars: usize) -> Self {
        self.text_preview = chars;
        self
    }

    /// Set the verbose-mode result preview length.
    pub fn result_preview(mut self, chars: usize) -> Self {
        self.result_preview = chars;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PresenterConfig::new();
        assert_eq!(config.verbosity, VerbositySource::Env);
        assert_eq!(config.command_preview, 70);
        assert_eq!(config.text_preview, 100);
        assert_eq!(config.result_preview, 300);
    }

    #[test]
    fn test_builder_chain() {
        let config = PresenterConfig::new()
            .verbosity(Verbosity::Verbose)
            .command_preview(40)
            .text_preview(80)
            .result_preview(200);

        assert_eq!(config.verbosity, VerbositySource::Fixed(Verbosity::Verbose));
        assert_eq!(config.command_preview, 40);
        assert_eq!(config.text_preview, 80);
        assert_eq!(config.result_preview, 200);
    }

    #[test]
    fn test_fixed_source_resolves_without_env() {
        assert_eq!(
            VerbositySource::Fixed(Verbosity::Verbose).resolve(),
            Verbosity::Verbose
        );
        assert_eq!(
            VerbositySource::Fixed(Verbosity::Terse).resolve(),
            Verbosity::Terse
        );
    }
}
