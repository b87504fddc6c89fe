//! Entity types for the metadata tables.

/// The fields of a Hub model that snippet templates dispatch on.
#[derive(Debug, Clone, Default)]
pub struct ModelInfo {
    /// Repository id, e.g. `openai-community/gpt2`.
    pub id: String,
    /// The model's primary task, when known.
    pub pipeline_tag: Option<String>,
    /// Free-form Hub tags.
    pub tags: Vec<String>,
}

impl ModelInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pipeline_tag(mut self, tag: impl Into<String>) -> Self {
        self.pipeline_tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A downstream library the Hub integrates with.
///
/// `snippet` produces an example code block for loading a given model with
/// this library.
pub struct Library {
    /// Stable identifier used as the lookup key.
    pub id: &'static str,
    /// Display label for documentation.
    pub label: &'static str,
    /// Source repository of the library.
    pub repo_url: &'static str,
    /// Snippet template over a model's id and tags.
    pub snippet: fn(&ModelInfo) -> String,
}

/// A documented Hub task.
pub struct Task {
    /// Stable identifier, e.g. `text-classification`.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// One-line description.
    pub summary: &'static str,
    /// Example datasets on the Hub.
    pub datasets: &'static [&'static str],
    /// Commonly used metrics.
    pub metrics: &'static [&'static str],
    /// Representative models.
    pub models: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_info_builder_and_tags() {
        let model = ModelInfo::new("org/model")
            .with_pipeline_tag("text-generation")
            .with_tags(["pytorch", "conversational"]);

        assert_eq!(model.id, "org/model");
        assert_eq!(model.pipeline_tag.as_deref(), Some("text-generation"));
        assert!(model.has_tag("conversational"));
        assert!(!model.has_tag("tensorflow"));
    }
}
