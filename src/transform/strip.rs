use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use super::Step;

// Lazy so adjacent blocks are removed one by one.
static STYLE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<style>.*?</style>").expect("Failed to compile style block pattern")
});

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<script>.*?</script>").expect("Failed to compile script block pattern")
});

static BODY_CLOSE_AHEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*</body>").expect("Failed to compile body close pattern")
});

/// Removes every inline `<style>` block.
pub struct StripStyleBlocks;

impl Step for StripStyleBlocks {
    fn name(&self) -> &'static str {
        "strip-style"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        STYLE_BLOCK.replace_all(content, "")
    }
}

/// Removes inline `<script>` blocks that directly precede `</body>`.
///
/// Only bare `<script>` tags are considered, so the external
/// `<script src=...>` reference added later in the pipeline survives.
/// Removal repeats until no bare block ends right before `</body>`, which
/// takes out a run of adjacent trailing blocks in one go.
pub struct StripTrailingScript;

impl StripTrailingScript {
    fn strip_once(content: &str) -> Option<String> {
        let mut result = String::new();
        let mut last = 0;

        for block in SCRIPT_BLOCK.find_iter(content) {
            if BODY_CLOSE_AHEAD.is_match(&content[block.end()..]) {
                result.push_str(&content[last..block.start()]);
                last = block.end();
            }
        }

        if last == 0 {
            return None;
        }

        result.push_str(&content[last..]);
        Some(result)
    }
}

impl Step for StripTrailingScript {
    fn name(&self) -> &'static str {
        "strip-trailing-script"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let mut stripped: Option<String> = None;

        loop {
            let next = match Self::strip_once(stripped.as_deref().unwrap_or(content)) {
                Some(next) => next,
                None => break,
            };
            stripped = Some(next);
        }

        match stripped {
            Some(result) => Cow::Owned(result),
            None => Cow::Borrowed(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_style_block() {
        let content = "<head>\n<style>\n  body { color: red; }\n</style>\n</head>";
        let result = StripStyleBlocks.apply(content);
        assert_eq!(result, "<head>\n\n</head>");
    }

    #[test]
    fn test_strip_style_blocks_lazily() {
        let content = "<style>a{}</style>\n<p>keep</p>\n<style>\nb{}\n</style>";
        let result = StripStyleBlocks.apply(content);
        assert_eq!(result, "\n<p>keep</p>\n");
    }

    #[test]
    fn test_no_style_borrows() {
        let content = "<head></head>";
        assert!(matches!(StripStyleBlocks.apply(content), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_trailing_script() {
        let content = "<p>x</p>\n<script>\nlet a = 1;\n</script>\n  </body>";
        let result = StripTrailingScript.apply(content);
        assert_eq!(result, "<p>x</p>\n\n  </body>");
    }

    #[test]
    fn test_keeps_script_not_before_body_close() {
        let content = "<script>early()</script>\n<p>x</p>\n</body>";
        assert!(matches!(StripTrailingScript.apply(content), Cow::Borrowed(_)));
    }

    #[test]
    fn test_only_trailing_block_removed() {
        let content = "<script>early()</script>\n<p>x</p>\n<script>late()</script>\n</body>";
        let result = StripTrailingScript.apply(content);
        assert_eq!(result, "<script>early()</script>\n<p>x</p>\n\n</body>");
    }

    #[test]
    fn test_adjacent_trailing_blocks_removed_together() {
        let content = "<p>x</p>\n<script>a()</script>\n<script>b()</script>\n</body>";
        let result = StripTrailingScript.apply(content);
        assert_eq!(result, "<p>x</p>\n\n\n</body>");
        assert!(matches!(StripTrailingScript.apply(&result), Cow::Borrowed(_)));
    }

    #[test]
    fn test_adjacent_run_keeps_earlier_script() {
        let content = "<script>early()</script>\n<p>x</p>\n<script>a()</script><script>b()</script>\n</body>";
        let result = StripTrailingScript.apply(content);
        assert_eq!(result, "<script>early()</script>\n<p>x</p>\n\n</body>");
    }

    #[test]
    fn test_keeps_external_script() {
        let content = "<script src=\"exam-script.js\"></script>\n</body>";
        assert!(matches!(StripTrailingScript.apply(content), Cow::Borrowed(_)));
    }
}
