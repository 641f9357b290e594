//! The "favorite animal" modal dialog.
//!
//! Two states, Closed and Open. Opening is unconditional. Closing happens
//! either through the cancel button (a dialog-method form submission that
//! returns the default value) or through the confirm button, whose default
//! submission is suppressed and which closes with the selected option. Every
//! close writes a status line into the output element.
//!
//! The element ids are passed in explicitly; the controller never looks
//! anything up by name on its own.

use crate::dom::{Element, Node};
use crate::error::DialogError;

/// Return value of a dialog closed without an explicit value.
pub const DEFAULT_RETURN_VALUE: &str = "default";

pub const NO_RETURN_VALUE: &str = "No return value.";

/// Ids of the elements the controller drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogElements {
    pub dialog: String,
    pub select: String,
    pub confirm: String,
    pub output: String,
    pub show: String,
}

/// The page has a single dialog, so the show button and the form handlers
/// share one id (`favDialog`) instead of separate `dialog`/`favDialog` bindings.
impl Default for DialogElements {
    fn default() -> Self {
        Self {
            dialog: "favDialog".into(),
            select: "favAnimal".into(),
            confirm: "confirmBtn".into(),
            output: "output".into(),
            show: "showDialog".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Fired on every transition into Closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEvent {
    pub return_value: String,
}

/// Status line written to the output on close.
pub fn close_status(return_value: &str) -> String {
    // An empty return value is legitimate, so the sentinel is compared instead.
    if return_value == DEFAULT_RETURN_VALUE {
        NO_RETURN_VALUE.to_string()
    } else {
        format!("ReturnValue: {}.", return_value)
    }
}

#[derive(Debug, Clone)]
pub struct DialogController {
    elements: DialogElements,
    options: Vec<SelectOption>,
    state: DialogState,
    selected: String,
    confirm_value: String,
    return_value: String,
    output: String,
}

impl DialogController {
    /// The select starts on its first option.
    pub fn new(
        elements: DialogElements,
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
    ) -> Result<Self, DialogError> {
        let options: Vec<SelectOption> = options.into_iter().map(Into::into).collect();
        let selected = options
            .first()
            .map(|o| o.value.clone())
            .ok_or(DialogError::NoOptions)?;

        Ok(Self {
            elements,
            options,
            state: DialogState::Closed,
            selected,
            confirm_value: DEFAULT_RETURN_VALUE.to_string(),
            return_value: String::new(),
            output: String::new(),
        })
    }

    /// The page's stock dialog.
    pub fn favorite_animal() -> Self {
        Self {
            elements: DialogElements::default(),
            options: vec![
                SelectOption::new(DEFAULT_RETURN_VALUE, "Choose…"),
                SelectOption::from("brine shrimp"),
                SelectOption::from("red panda"),
                SelectOption::from("spider monkey"),
            ],
            state: DialogState::Closed,
            selected: DEFAULT_RETURN_VALUE.to_string(),
            confirm_value: DEFAULT_RETURN_VALUE.to_string(),
            return_value: String::new(),
            output: String::new(),
        }
    }

    pub fn elements(&self) -> &DialogElements {
        &self.elements
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn confirm_value(&self) -> &str {
        &self.confirm_value
    }

    pub fn return_value(&self) -> &str {
        &self.return_value
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn show_modal(&mut self) {
        self.state = DialogState::Open;
    }

    /// Change on the select. The confirm button follows the selection.
    pub fn select_option(&mut self, value: &str) -> Result<(), DialogError> {
        if !self.options.iter().any(|o| o.value == value) {
            return Err(DialogError::UnknownOption(value.to_string()));
        }
        self.selected = value.to_string();
        self.confirm_value = self.selected.clone();
        Ok(())
    }

    /// Click on confirm: closes with the current selection.
    pub fn confirm(&mut self) -> Option<CloseEvent> {
        let value = self.selected.clone();
        self.close(&value)
    }

    /// Cancel button submission: closes with the default return value.
    pub fn cancel(&mut self) -> Option<CloseEvent> {
        self.close(DEFAULT_RETURN_VALUE)
    }

    /// Closes an open dialog with `return_value`. Closing a closed dialog
    /// does nothing and fires no event.
    pub fn close(&mut self, return_value: &str) -> Option<CloseEvent> {
        if self.state == DialogState::Closed {
            return None;
        }
        self.state = DialogState::Closed;
        self.return_value = return_value.to_string();

        let event = CloseEvent {
            return_value: self.return_value.clone(),
        };
        self.on_close(&event);
        Some(event)
    }

    fn on_close(&mut self, event: &CloseEvent) {
        self.output = close_status(&event.return_value);
        tracing::debug!(return_value = %event.return_value, "dialog closed");
    }

    // ========================================================================
    // Markup
    // ========================================================================

    pub fn render_show_button(&self) -> Element {
        Element::new("button")
            .with_id(&self.elements.show)
            .with_attr("type", "button")
            .with_text("Show the dialog")
    }

    pub fn render(&self) -> Element {
        let mut select = Element::new("select").with_id(&self.elements.select);
        for option in &self.options {
            let mut e = Element::new("option")
                .with_attr("value", &option.value)
                .with_text(&option.label);
            if option.value == self.selected {
                e.set_attr("selected", "");
            }
            select.append_child(e);
        }

        let mut label = Element::new("label");
        label.append_child(Node::Text("Favorite animal: ".into()));
        label.append_child(select);
        let mut field = Element::new("p");
        field.append_child(label);

        let mut buttons = Element::new("div");
        buttons.append_child(
            Element::new("button")
                .with_attr("value", DEFAULT_RETURN_VALUE)
                .with_attr("formmethod", "dialog")
                .with_text("Cancel"),
        );
        buttons.append_child(
            Element::new("button")
                .with_id(&self.elements.confirm)
                .with_attr("value", &self.confirm_value)
                .with_text("Confirm"),
        );

        let mut form = Element::new("form");
        form.append_child(field);
        form.append_child(buttons);

        let mut dialog = Element::new("dialog").with_id(&self.elements.dialog);
        if self.is_open() {
            dialog.set_attr("open", "");
        }
        dialog.append_child(form);
        dialog
    }

    pub fn render_output(&self) -> Element {
        Element::new("output")
            .with_id(&self.elements.output)
            .with_text(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> DialogController {
        DialogController::new(DialogElements::default(), ["cat", "dog"]).unwrap()
    }

    #[test]
    fn test_confirm_closes_with_selection() {
        let mut dialog = pets();
        dialog.show_modal();
        dialog.select_option("dog").unwrap();
        let event = dialog.confirm().unwrap();
        assert_eq!(event.return_value, "dog");
        assert_eq!(dialog.return_value(), "dog");
        assert_eq!(dialog.output(), "ReturnValue: dog.");
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_cancel_reports_no_return_value() {
        let mut dialog = pets();
        dialog.show_modal();
        dialog.cancel().unwrap();
        assert_eq!(dialog.return_value(), DEFAULT_RETURN_VALUE);
        assert_eq!(dialog.output(), "No return value.");
    }

    #[test]
    fn test_confirm_uses_latest_selection() {
        let mut dialog = pets();
        dialog.show_modal();
        dialog.select_option("dog").unwrap();
        dialog.select_option("cat").unwrap();
        assert_eq!(dialog.confirm_value(), "cat");
        assert_eq!(dialog.confirm().unwrap().return_value, "cat");
    }

    #[test]
    fn test_confirm_without_change_uses_first_option() {
        let mut dialog = pets();
        dialog.show_modal();
        assert_eq!(dialog.confirm().unwrap().return_value, "cat");
    }

    #[test]
    fn test_closing_closed_dialog_fires_nothing() {
        let mut dialog = pets();
        assert!(dialog.confirm().is_none());
        assert!(dialog.cancel().is_none());
        assert_eq!(dialog.output(), "");
    }

    #[test]
    fn test_reopen_after_close() {
        let mut dialog = pets();
        dialog.show_modal();
        dialog.cancel();
        dialog.show_modal();
        assert!(dialog.is_open());
        dialog.select_option("dog").unwrap();
        dialog.confirm();
        assert_eq!(dialog.output(), "ReturnValue: dog.");
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut dialog = pets();
        assert_eq!(
            dialog.select_option("horse"),
            Err(DialogError::UnknownOption("horse".into()))
        );
        assert_eq!(dialog.selected(), "cat");
    }

    #[test]
    fn test_no_options_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            DialogController::new(DialogElements::default(), empty).unwrap_err(),
            DialogError::NoOptions
        );
    }

    #[test]
    fn test_close_status() {
        assert_eq!(close_status("default"), "No return value.");
        assert_eq!(close_status(""), "ReturnValue: .");
        assert_eq!(close_status("red panda"), "ReturnValue: red panda.");
    }

    #[test]
    fn test_render_tracks_state() {
        let mut dialog = DialogController::favorite_animal();
        let closed = dialog.render().render();
        assert!(closed.starts_with(r#"<dialog id="favDialog">"#));
        assert!(closed.contains(r#"<button id="confirmBtn" value="default">Confirm</button>"#));
        assert!(closed.contains(r#"formmethod="dialog""#));

        dialog.show_modal();
        dialog.select_option("red panda").unwrap();
        let open = dialog.render().render();
        assert!(open.starts_with(r#"<dialog id="favDialog" open="">"#));
        assert!(open.contains(r#"<option value="red panda" selected="">red panda</option>"#));
        assert!(open.contains(r#"value="red panda">Confirm"#));
    }

    #[test]
    fn test_rendered_buttons_carry_return_values() {
        let mut dialog = pets();
        let buttons = |d: &DialogController| -> Vec<Element> {
            let markup = d.render();
            let form = markup.child_elements().next().unwrap().clone();
            let children: Vec<Element> = form.child_elements().nth(1).unwrap().child_elements().cloned().collect();
            children
        };

        let before = buttons(&dialog);
        assert_eq!(before[0].attr("value"), Some(DEFAULT_RETURN_VALUE));
        assert_eq!(before[0].attr("formmethod"), Some("dialog"));
        assert_eq!(before[1].id.as_deref(), Some("confirmBtn"));
        assert_eq!(before[1].attr("value"), Some(DEFAULT_RETURN_VALUE));

        dialog.select_option("dog").unwrap();
        let after = buttons(&dialog);
        assert_eq!(after[1].attr("value"), Some("dog"));
        assert_eq!(after[1].attr("formmethod"), None);
    }

    #[test]
    fn test_render_output() {
        let mut dialog = pets();
        dialog.show_modal();
        dialog.cancel();
        assert_eq!(
            dialog.render_output().render(),
            r#"<output id="output">No return value.</output>"#
        );
    }
}
