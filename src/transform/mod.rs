pub mod inject;
pub mod markup;
pub mod strip;
pub mod widgets;

use std::borrow::Cow;
use tracing::debug;

use crate::config::AssetConfig;

/// A single pure rewrite rule applied to the full page content.
///
/// Returning `Cow::Borrowed` means the step left the content alone.
pub trait Step {
    fn name(&self) -> &'static str;
    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str>;
}

/// Result of running the pipeline over one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Names of the steps that changed the content, in pipeline order.
    pub applied: Vec<&'static str>,
}

impl Rewrite {
    pub fn is_changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// The ordered set of steps every page goes through.
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new(assets: &AssetConfig) -> Self {
        Self {
            steps: vec![
                Box::new(strip::StripStyleBlocks),
                Box::new(inject::LinkStylesheet::new(&assets.stylesheet)),
                Box::new(strip::StripTrailingScript),
                Box::new(widgets::WordCounter),
                Box::new(widgets::EssayEditor),
                Box::new(widgets::SaveAndReturn),
                Box::new(inject::NotificationArea::new(&assets.script)),
            ],
        }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub fn run(&self, content: &str) -> Rewrite {
        let mut current = content.to_string();
        let mut applied = Vec::new();

        for step in &self.steps {
            let next = match step.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };

            if next != current {
                debug!(step = step.name(), "step rewrote content");
                applied.push(step.name());
                current = next;
            }
        }

        Rewrite {
            content: current,
            applied,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&AssetConfig::default())
    }
}

/// Runs the default pipeline over `content`.
pub fn rewrite(content: &str, assets: &AssetConfig) -> Rewrite {
    Pipeline::new(assets).run(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEGACY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <title>Schreiben 4 - B2</title>
    <style>
        body { background: #1e1e1e; }
    </style>
</head>
<body>
    <div class="word-counter">Wörter: <span id="count">0</span> / 150</div>
    <textarea id="essay" placeholder="Schreiben..."></textarea>
    <a class='btn-blue' href='indexb2.html'>SPEICHERN &amp; ZURÜCK</a>
    <script>
        let timeInSeconds = 30 * 60;
    </script>
</body>
</html>
"#;

    #[test]
    fn test_step_order() {
        let pipeline = Pipeline::default();
        assert_eq!(
            pipeline.step_names(),
            vec![
                "strip-style",
                "link-stylesheet",
                "strip-trailing-script",
                "word-counter",
                "essay-editor",
                "save-and-return",
                "notification-area",
            ]
        );
    }

    #[test]
    fn test_full_page() {
        let rewrite = Pipeline::default().run(LEGACY_PAGE);
        let page = &rewrite.content;

        assert_eq!(rewrite.applied, Pipeline::default().step_names());
        assert!(!page.contains("<style>"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("    <link rel=\"stylesheet\" href=\"exam-styles.css\">\n</head>"));
        assert!(page.contains("Zeichen: <span id=\"char-count\">0</span>"));
        assert!(page.contains("<div id=\"correction-panel\" class=\"correction-panel\">"));
        assert!(page.contains("<a class='btn-blue' href='#' onclick=\"saveAndReturn()\">"));
        assert!(page.contains("<script src=\"exam-script.js\"></script>\n</body>"));
    }

    #[test]
    fn test_idempotent() {
        let pipeline = Pipeline::default();
        let once = pipeline.run(LEGACY_PAGE);
        let twice = pipeline.run(&once.content);

        assert_eq!(twice.content, once.content);
        assert!(!twice.is_changed());
    }

    #[test]
    fn test_custom_assets() {
        let assets = AssetConfig {
            stylesheet: "css/b2.css".to_string(),
            script: "js/b2.js".to_string(),
        };
        let page = rewrite(LEGACY_PAGE, &assets).content;

        assert!(page.contains("<link rel=\"stylesheet\" href=\"css/b2.css\">"));
        assert!(page.contains("<script src=\"js/b2.js\"></script>"));
        assert!(!page.contains("exam-script.js"));
    }

    #[test]
    fn test_unrelated_content_passes_through() {
        let content = "plain text without markup";
        let rewrite = Pipeline::default().run(content);

        assert_eq!(rewrite.content, content);
        assert!(rewrite.applied.is_empty());
    }
}
