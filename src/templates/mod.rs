//! HTML templates and styling for the notes page.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants
//! - `components` - Nav bar, base template and the index page
//! - `dialog_js` - Browser wiring for the dialog markup

mod components;
mod dialog_js;
mod styles;

pub use components::{base_html, index_page, nav_bar, notes_fragment};
pub use dialog_js::dialog_script;
pub use styles::STYLE;
