//! Commented starter configuration files written by `guidemark init`.

const TOML_TEMPLATE: &str = r##"# guidemark configuration
# All paths are relative to the directory guidemark runs in.

# Directory containing the Markdown guide documents
input_dir = "docs"

# Output directory for the generated site
output_dir = "build"

# Site title, shown in the top navigation and page titles
title = "A guide"

# Site description, used when a page's frontmatter has none
description = ""

# Text shown on the left side of the footer
footer_text = "Built with guidemark"

# Enable server-side syntax highlighting for code blocks
highlight_code = true

# Syntax highlighting theme
# highlight_theme = "InspiredGitHub"

# Directory with template overrides (see `guidemark export`)
# template_dir = "templates"

# Extra stylesheets (CSS or SCSS) appended after the default one
# stylesheet_paths = ["custom.scss"]

# Extra scripts loaded on every page
# script_paths = ["extra.js"]

# Directory of static assets copied into the site as-is
# assets_dir = "static"

# Links in the top navigation bar
[[topnav]]
text = "GitHub"
href = "https://github.com/example/guide"

# Sidebar sections; a link is { text, href } or a plain path string
[[sidebar]]
title = "Get started"
links = [{ text = "Introduction", href = "index.html" }]
"##;

const JSON_TEMPLATE: &str = r#"{
  "input_dir": "docs",
  "output_dir": "build",
  "title": "A guide",
  "description": "",
  "footer_text": "Built with guidemark",
  "highlight_code": true,
  "topnav": [{ "text": "GitHub", "href": "https://github.com/example/guide" }],
  "sidebar": [
    {
      "title": "Get started",
      "links": [{ "text": "Introduction", "href": "index.html" }]
    }
  ]
}
"#;

/// Get the starter configuration for the requested format.
///
/// # Errors
///
/// Returns an error message for unknown formats.
pub fn get_template(format: &str) -> Result<&'static str, String> {
  match format {
    "toml" => Ok(TOML_TEMPLATE),
    "json" => Ok(JSON_TEMPLATE),
    other => Err(format!("Unsupported configuration format: {other}")),
  }
}
