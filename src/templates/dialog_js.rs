//! Browser wiring for the dialog.
//!
//! Every element is looked up once by the id the [`DialogElements`] carries
//! and then held in a local, so the handlers never depend on ambient globals.

use crate::dialog::{DialogElements, DEFAULT_RETURN_VALUE, NO_RETURN_VALUE};

/// Quotes `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

pub fn dialog_script(elements: &DialogElements) -> String {
    format!(
        r#"<script>
(() => {{
    const dialog = document.getElementById({dialog});
    const showBtn = document.getElementById({show});
    const outputBox = document.getElementById({output});
    const selectEl = document.getElementById({select});
    const confirmBtn = document.getElementById({confirm});

    showBtn.addEventListener("click", () => dialog.showModal());

    selectEl.addEventListener("change", () => {{
        confirmBtn.value = selectEl.value;
    }});

    dialog.addEventListener("close", () => {{
        outputBox.value =
            dialog.returnValue === {default_value}
                ? {no_return}
                : `ReturnValue: ${{dialog.returnValue}}.`;
    }});

    confirmBtn.addEventListener("click", (event) => {{
        event.preventDefault();
        dialog.close(selectEl.value);
    }});
}})();
</script>"#,
        dialog = js_string(&elements.dialog),
        show = js_string(&elements.show),
        output = js_string(&elements.output),
        select = js_string(&elements.select),
        confirm = js_string(&elements.confirm),
        default_value = js_string(DEFAULT_RETURN_VALUE),
        no_return = js_string(NO_RETURN_VALUE),
    )
}
