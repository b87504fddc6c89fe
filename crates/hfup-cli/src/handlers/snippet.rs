//! Snippet command handler.

use anyhow::{Result, bail};
use hfup_core::metadata::{ModelInfo, find_library, libraries};

/// Execute the snippet command.
pub fn execute(
    model_id: &str,
    library_id: &str,
    pipeline_tag: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let Some(library) = find_library(library_id) else {
        let known: Vec<&str> = libraries().iter().map(|l| l.id).collect();
        bail!(
            "Unknown library '{library_id}'. Known libraries: {}",
            known.join(", ")
        );
    };

    let mut model = ModelInfo::new(model_id).with_tags(tags);
    if let Some(tag) = pipeline_tag {
        model = model.with_pipeline_tag(tag);
    }

    println!("# {} ({})", library.label, library.repo_url);
    println!();
    println!("{}", (library.snippet)(&model));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_library_is_an_error() {
        let err = execute("org/model", "not-a-library", None, vec![]).unwrap_err();
        assert!(err.to_string().contains("Known libraries"));
    }

    #[test]
    fn known_library_renders() {
        execute(
            "org/model",
            "timm",
            None,
            vec!["image-classification".to_string()],
        )
        .unwrap();
    }
}
