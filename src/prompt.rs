use std::path::Path;

use crate::error::PromptError;

pub const PLACEHOLDER: &str = "{complaint}";

/// Starting point for the exercise; students replace it with `--prompt`.
pub const DEFAULT_TEMPLATE: &str = "
HI THIS IS A COMPLAINT: {complaint}

Tell me which department should handle this complaint, return one word answer: fire, police, buildings, finance, or parks.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, PromptError> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(PromptError::MissingPlaceholder(PLACEHOLDER));
        }
        Ok(PromptTemplate { template })
    }

    pub fn from_file(path: &Path) -> Result<Self, PromptError> {
        let template = std::fs::read_to_string(path).map_err(|source| PromptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        PromptTemplate::new(template)
    }

    pub fn render(&self, complaint: &str) -> String {
        self.template.replace(PLACEHOLDER, complaint)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        PromptTemplate {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_template_embeds_complaint() {
        let prompt = PromptTemplate::default().render("Sparks in the basement");
        assert!(prompt.contains("HI THIS IS A COMPLAINT: Sparks in the basement"));
        assert!(!prompt.contains(PLACEHOLDER));
    }

    #[test]
    fn replaces_every_placeholder() {
        let template = PromptTemplate::new("{complaint} / {complaint}").unwrap();
        assert_eq!(template.render("x"), "x / x");
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = PromptTemplate::new("Classify this.").unwrap_err();
        assert!(matches!(err, PromptError::MissingPlaceholder("{complaint}")));
    }

    #[test]
    fn reads_template_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Department for: {{complaint}}").unwrap();
        let template = PromptTemplate::from_file(file.path()).unwrap();
        assert_eq!(template.render("rats"), "Department for: rats");
    }
}
