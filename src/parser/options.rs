//! Parsing options and configuration.

/// Options for parsing documents and loading collections.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether to apply the inline markup transform to resume text fields
    pub inline_markup: bool,

    /// Whether to parse collection entries in parallel
    pub parallel: bool,

    /// Whether to sanitize content folder names into slugs
    pub normalize_slugs: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep resume text fields as raw strings (no inline span transform).
    pub fn raw_text(mut self) -> Self {
        self.inline_markup = false;
        self
    }

    /// Enable or disable the inline markup transform.
    pub fn with_inline_markup(mut self, enabled: bool) -> Self {
        self.inline_markup = enabled;
        self
    }

    /// Enable or disable parallel collection loading.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel collection loading.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Use content folder names verbatim as slugs.
    pub fn keep_folder_names(mut self) -> Self {
        self.normalize_slugs = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            inline_markup: true,
            parallel: true,
            normalize_slugs: true,
        }
    }
}
