//! Markup fragments written into the exam pages.

pub const HEAD_CLOSE: &str = "</head>";
pub const BODY_CLOSE: &str = "</body>";

/// Presence marker for the notification area.
pub const NOTIFICATION_MARKER: &str = r#"<div id="notification""#;
pub const NOTIFICATION_AREA: &str = r#"<div id="notification" class="notification"></div>"#;

/// Word counter with character count and the `checkText()` action.
pub const COUNTER_WIDGET: &str = r#"<div class="word-counter">
            <div class="counter-left">
                <span>Wörter: <span id="count">0</span> / 150</span>
                <span>Zeichen: <span id="char-count">0</span></span>
            </div>
            <button class="btn-green" id="check-btn" onclick="checkText()">
                🔍 Text überprüfen
            </button>
        </div>"#;

/// Presence marker for the correction results panel.
pub const CORRECTION_PANEL_MARKER: &str = r#"id="correction-panel""#;

/// Essay textarea in its wrapper, followed by the correction results panel.
pub const ESSAY_EDITOR: &str = r#"<div class="textarea-container">
            <textarea id="essay" placeholder="Fangen Sie hier an zu schreiben..."></textarea>
        </div>

        <div id="correction-panel" class="correction-panel">
            <div class="correction-header">
                <div class="correction-title">📝 Korrektur-Ergebnisse</div>
                <button class="close-btn" onclick="closeCorrection()">✕ Schließen</button>
            </div>
            <div id="correction-content"></div>
        </div>"#;

pub const SAVE_AND_RETURN_LINK: &str = r#"<a class='btn-blue' href='#' onclick="saveAndReturn()">"#;

pub fn stylesheet_link(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, href)
}

/// Opening script tag, used as the presence marker for the external script.
pub fn script_open(src: &str) -> String {
    format!(r#"<script src="{}">"#, src)
}

pub fn script_tag(src: &str) -> String {
    format!("{}</script>", script_open(src))
}
