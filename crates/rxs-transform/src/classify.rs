use regex::{Regex, RegexBuilder};

/// Flags display names that belong to the GLP-1 drug class.
#[derive(Debug, Clone)]
pub struct Glp1Classifier {
    pattern: Regex,
}

impl Glp1Classifier {
    /// Compiles `pattern` case-insensitively.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    pub fn is_glp1(&self, display_name: &str) -> bool {
        self.pattern.is_match(display_name)
    }
}
