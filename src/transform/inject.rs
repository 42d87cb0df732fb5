use std::borrow::Cow;

use super::markup::{self, BODY_CLOSE, HEAD_CLOSE, NOTIFICATION_AREA, NOTIFICATION_MARKER};
use super::Step;

/// Inserts `snippet` right before the first occurrence of `anchor`.
fn insert_before<'a>(content: &'a str, anchor: &str, snippet: &str) -> Cow<'a, str> {
    match content.find(anchor) {
        Some(at) => {
            let mut result = String::with_capacity(content.len() + snippet.len());
            result.push_str(&content[..at]);
            result.push_str(snippet);
            result.push_str(&content[at..]);
            Cow::Owned(result)
        }
        None => Cow::Borrowed(content),
    }
}

/// Links the shared stylesheet in `<head>` unless it is already linked.
pub struct LinkStylesheet {
    link: String,
}

impl LinkStylesheet {
    pub fn new(href: &str) -> Self {
        Self {
            link: markup::stylesheet_link(href),
        }
    }
}

impl Step for LinkStylesheet {
    fn name(&self) -> &'static str {
        "link-stylesheet"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if content.contains(&self.link) {
            return Cow::Borrowed(content);
        }
        insert_before(content, HEAD_CLOSE, &format!("    {}\n", self.link))
    }
}

/// Ensures the notification area and the shared script sit before `</body>`.
pub struct NotificationArea {
    script_marker: String,
    script_tag: String,
}

impl NotificationArea {
    pub fn new(src: &str) -> Self {
        Self {
            script_marker: markup::script_open(src),
            script_tag: markup::script_tag(src),
        }
    }
}

impl Step for NotificationArea {
    fn name(&self) -> &'static str {
        "notification-area"
    }

    fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let has_notification = content.contains(NOTIFICATION_MARKER);
        let has_script = content.contains(&self.script_marker);

        let snippet = match (has_notification, has_script) {
            (true, true) => return Cow::Borrowed(content),
            (true, false) => format!("\n{}\n", self.script_tag),
            (false, true) => format!("\n{}\n", NOTIFICATION_AREA),
            (false, false) => format!("\n{}\n\n{}\n", NOTIFICATION_AREA, self.script_tag),
        };

        insert_before(content, BODY_CLOSE, &snippet)
    }
}
