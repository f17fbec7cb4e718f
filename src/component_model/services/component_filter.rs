use crate::component_model::domain::DevelopmentComponent;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ComponentFilter - Filters component records by `vendor/name` patterns
///
/// A pattern containing a `/` is matched against the qualified name
/// (`sap.com/tc/bl/*`); a pattern without one is matched against the
/// component name alone. `*` matches zero or more characters.
#[derive(Debug)]
pub struct ComponentFilter {
    patterns: Vec<ExcludePattern>,
}

impl ComponentFilter {
    /// Creates a new ComponentFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, too long, bad characters, only wildcards)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Keeps only the components no pattern matches
    pub fn filter_components(
        &self,
        components: Vec<DevelopmentComponent>,
    ) -> Vec<DevelopmentComponent> {
        components
            .into_iter()
            .filter(|component| !self.matches(component))
            .collect()
    }

    fn matches(&self, component: &DevelopmentComponent) -> bool {
        let qualified = format!("{}/{}", component.vendor(), component.name());
        // every pattern is evaluated so unmatched ones can be reported
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(&qualified, component.name()) || hit)
    }

    /// Patterns that did not match any component seen so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    /// Literal fragments between the wildcards
    parts: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
    qualified: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let parts = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
            qualified: pattern.contains('/'),
            parts,
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, qualified_name: &str, name: &str) -> bool {
        let subject = if self.qualified { qualified_name } else { name };
        let is_match = self.matches_subject(subject);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    fn matches_subject(&self, subject: &str) -> bool {
        let mut rest = subject;

        for (index, part) in self.parts.iter().enumerate() {
            let is_first = index == 0;
            let is_last = index + 1 == self.parts.len();

            if is_first && self.anchored_start {
                match rest.strip_prefix(part.as_str()) {
                    Some(stripped) => rest = stripped,
                    None => return false,
                }
                if is_last && self.anchored_end {
                    return rest.is_empty();
                }
                continue;
            }

            if is_last && self.anchored_end {
                return rest.ends_with(part.as_str());
            }

            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }

        !self.anchored_end || rest.is_empty()
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: {} chars. Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, slashes, tildes, and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '~' | '*')
}
