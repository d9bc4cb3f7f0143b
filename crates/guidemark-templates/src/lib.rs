//! Embedded default templates and static assets for guidemark.
//!
//! Every entry can be overridden per-file from a user template directory;
//! these are the fallbacks compiled into the binary.
use std::collections::HashMap;

pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.html");
pub const NAVBAR_TEMPLATE: &str = include_str!("../templates/navbar.html");
pub const FOOTER_TEMPLATE: &str = include_str!("../templates/footer.html");

pub const DEFAULT_CSS: &str = include_str!("../templates/default.css");
pub const MAIN_JS: &str = include_str!("../templates/main.js");

#[must_use]
pub fn all_templates() -> HashMap<&'static str, &'static str> {
  let mut templates = HashMap::new();
  templates.insert("default.html", DEFAULT_TEMPLATE);
  templates.insert("navbar.html", NAVBAR_TEMPLATE);
  templates.insert("footer.html", FOOTER_TEMPLATE);
  templates.insert("default.css", DEFAULT_CSS);
  templates.insert("main.js", MAIN_JS);
  templates
}
