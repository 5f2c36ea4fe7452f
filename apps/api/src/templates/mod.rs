//! Prompt templates: named text files on disk with `{{ name }}` markers.
//!
//! Templates are read fresh on every call. Nothing is cached, so an edited
//! file takes effect on the next request.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("invalid template name: {0}")]
    InvalidName(String),

    #[error("failed to read template {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// The templates the advisory endpoints are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    CareerRecommendation,
    ResumeFeedback,
    MockQuestion,
    MockCritique,
}

impl PromptTemplate {
    pub fn file_name(self) -> &'static str {
        match self {
            PromptTemplate::CareerRecommendation => "career_recommendation.md",
            PromptTemplate::ResumeFeedback => "resume_feedback.md",
            PromptTemplate::MockQuestion => "mock_question.md",
            PromptTemplate::MockCritique => "mock_critique.md",
        }
    }
}

/// Reads templates from a single directory.
#[derive(Debug, Clone)]
pub struct PromptLoader {
    dir: PathBuf,
}

impl PromptLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn load(&self, template: PromptTemplate) -> Result<String, TemplateError> {
        self.load_file(template.file_name()).await
    }

    /// Returns the raw contents of `name` inside the template directory.
    pub async fn load_file(&self, name: &str) -> Result<String, TemplateError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(TemplateError::InvalidName(name.to_string()));
        }

        match tokio::fs::read_to_string(self.dir.join(name)).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(TemplateError::NotFound(name.to_string()))
            }
            Err(source) => Err(TemplateError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }
}

const MARKER_OPEN: &str = "{{ ";
const MARKER_CLOSE: &str = " }}";

/// Replaces every literal `{{ key }}` marker with its value.
///
/// The template is scanned once, so substituted values are never searched
/// for markers themselves. No escaping. Markers with no matching pair are
/// left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(MARKER_OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + MARKER_OPEN.len()..];

        let hit = after.find(MARKER_CLOSE).and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end))
        });

        match hit {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + MARKER_CLOSE.len()..];
            }
            None => {
                out.push_str(MARKER_OPEN);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
