//! Shared HTML components for the notes page.
//!
//! Contains the navigation bar, the base HTML template and the index page.

use crate::dialog::DialogController;
use crate::dom::{html_escape, Element};
use crate::feed::FEED_PATH;

use super::dialog_js::dialog_script;
use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(dialog: &DialogController) -> String {
    format!(
        r#"<nav class="nav-bar">
            <a href="/">Notes</a>
            <a href="{feed}">Feed</a>
            <span class="spacer"></span>
            {show}
        </nav>"#,
        feed = FEED_PATH,
        show = dialog.render_show_button(),
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, nav: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {nav}
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

// ============================================================================
// Index Page
// ============================================================================

/// The cards inside `main`, or a placeholder when there are none.
pub fn notes_fragment(main: &Element) -> String {
    if main.children.is_empty() {
        return r#"<p class="empty">No notes yet.</p>"#.to_string();
    }
    main.inner_html()
}

/// Full page: the populated `main` container followed by the dialog demo.
pub fn index_page(main: &Element, dialog: &DialogController) -> String {
    let empty = if main.children.is_empty() {
        notes_fragment(main)
    } else {
        String::new()
    };

    let content = format!(
        "{main}\n{empty}\n{dialog}\n{output}\n{script}",
        main = main.render(),
        dialog = dialog.render(),
        output = dialog.render_output(),
        script = dialog_script(dialog.elements()),
    );

    base_html("Notes", &nav_bar(dialog), &content)
}
