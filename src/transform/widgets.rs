use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

use super::markup::{COUNTER_WIDGET, CORRECTION_PANEL_MARKER, ESSAY_EDITOR, SAVE_AND_RETURN_LINK};
use super::Step;

// Some pages were saved with `ö` decoded as Latin-1, which reads `Ã¶`.
static LEGACY_COUNTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div class="word-counter">W(?:ö|Ã¶)rter: <span id="count">0</span> / 150</div>"#)
        .expect("Failed to compile word counter pattern")
});

// A textarea already in its wrapper is matched together with the wrapper so
// the replacement does not nest a second one.
static ESSAY_TEXTAREA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?s)<div class="textarea-container">\s*<textarea id="essay"[^>]*></textarea>\s*</div>"#,
        r#"|<textarea id="essay"[^>]*></textarea>"#,
    ))
    .expect("Failed to compile essay textarea pattern")
});

static SAVE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a class=['"]btn-blue['"] href=['"][^"']+["']>"#)
        .expect("Failed to compile save link pattern")
});

/// Swaps the one-line word counter for the counter widget.
pub struct WordCounter;

impl Step for WordCounter {
    fn name(&self) -> &'static str {
        "word-counter"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        LEGACY_COUNTER.replace_all(content, NoExpand(COUNTER_WIDGET))
    }
}

/// Wraps the essay textarea and adds the correction panel next to it.
///
/// Pages that already carry the correction panel are left alone.
pub struct EssayEditor;

impl Step for EssayEditor {
    fn name(&self) -> &'static str {
        "essay-editor"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if content.contains(CORRECTION_PANEL_MARKER) {
            return Cow::Borrowed(content);
        }
        ESSAY_TEXTAREA.replace_all(content, NoExpand(ESSAY_EDITOR))
    }
}

/// Points the "save and return" link at `saveAndReturn()`.
pub struct SaveAndReturn;

impl Step for SaveAndReturn {
    fn name(&self) -> &'static str {
        "save-and-return"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        SAVE_LINK.replace_all(content, NoExpand(SAVE_AND_RETURN_LINK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let content = r#"<div class="word-counter">Wörter: <span id="count">0</span> / 150</div>"#;
        let result = WordCounter.apply(content);

        assert!(result.contains(r#"<span id="char-count">0</span>"#));
        assert!(result.contains(r#"onclick="checkText()""#));
        assert!(!result.contains(content));
    }

    #[test]
    fn test_word_counter_mojibake() {
        let content = r#"<div class="word-counter">WÃ¶rter: <span id="count">0</span> / 150</div>"#;
        let result = WordCounter.apply(content);

        assert_eq!(result, COUNTER_WIDGET);
        assert!(!result.contains("Ã¶"));
    }

    #[test]
    fn test_word_counter_widget_untouched() {
        assert!(matches!(WordCounter.apply(COUNTER_WIDGET), Cow::Borrowed(_)));
    }

    #[test]
    fn test_essay_textarea_with_attributes() {
        let content = "<div>\n<textarea id=\"essay\"\n  rows=\"20\" placeholder=\"...\"></textarea>\n</div>";
        let result = EssayEditor.apply(content);

        assert_eq!(result, format!("<div>\n{}\n</div>", ESSAY_EDITOR));
    }

    #[test]
    fn test_essay_editor_is_stable() {
        let once = EssayEditor.apply("<textarea id=\"essay\"></textarea>").into_owned();
        assert!(matches!(EssayEditor.apply(&once), Cow::Borrowed(_)));
        assert_eq!(once.matches("correction-panel").count(), 2);
    }

    #[test]
    fn test_wrapper_without_panel_gets_panel() {
        let content = "<div class=\"textarea-container\">\n<textarea id=\"essay\"></textarea>\n</div>";
        let result = EssayEditor.apply(content);

        assert_eq!(result, ESSAY_EDITOR);
        assert_eq!(result.matches("textarea-container").count(), 1);
        assert!(result.contains(r#"<div id="correction-content"></div>"#));
    }

    #[test]
    fn test_save_link_single_quotes() {
        let result = SaveAndReturn.apply("<a class='btn-blue' href='somepage.html'>Zurück</a>");
        assert_eq!(result, format!("{}Zurück</a>", SAVE_AND_RETURN_LINK));
    }

    #[test]
    fn test_save_link_double_quotes() {
        let result = SaveAndReturn.apply(r#"<a class="btn-blue" href="indexb2.html">"#);
        assert_eq!(result, SAVE_AND_RETURN_LINK);
    }

    #[test]
    fn test_other_links_untouched() {
        let content = "<a class='btn-green' href='next.html'>";
        assert!(matches!(SaveAndReturn.apply(content), Cow::Borrowed(_)));
    }
}
