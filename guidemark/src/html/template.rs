//! Page assembly: wraps rendered document bodies in the site chrome.
use std::{fmt::Write, fs, path::Path};

use guidemark_markup::Heading;
use tera::Tera;

use crate::{
  config::{Config, NavLink},
  error::GuidemarkError,
  html::utils,
};

/// Render a full guide page.
///
/// `rel_path` is the page's output path relative to the site root; it drives
/// sidebar active-link marking and depth-relative asset paths.
///
/// # Errors
///
/// Returns an error when a template cannot be read or rendered.
pub fn render(
  config: &Config,
  content: &str,
  title: &str,
  description: &str,
  toc: &[Heading],
  rel_path: &Path,
) -> Result<String, GuidemarkError> {
  let mut tera = Tera::default();
  let template_content = get_template_content(
    config,
    "default.html",
    guidemark_templates::DEFAULT_TEMPLATE,
  )?;
  tera.add_raw_template("default", &template_content)?;

  let toc_html = generate_toc(toc);
  let topnav = render_navbar(config, rel_path)?;
  let sidebar = generate_sidebar(config, rel_path);
  let footer = render_footer(config)?;
  let custom_scripts = generate_custom_scripts(config, rel_path);
  let asset_paths = utils::generate_asset_paths(rel_path);

  let mut tera_context = tera::Context::new();
  tera_context.insert("content", content);
  tera_context.insert("title", title);
  tera_context.insert("site_title", &config.title);
  tera_context.insert("description", description);
  tera_context.insert("toc", &toc_html);
  tera_context.insert("topnav", &topnav);
  tera_context.insert("sidebar", &sidebar);
  tera_context.insert("footer", &footer);
  tera_context.insert("custom_scripts", &custom_scripts);
  for (key, value) in &asset_paths {
    tera_context.insert(*key, value);
  }

  let html = tera.render("default", &tera_context)?;
  Ok(html)
}

/// Render the top navigation bar for a page.
fn render_navbar(
  config: &Config,
  rel_path: &Path,
) -> Result<String, GuidemarkError> {
  let mut tera = Tera::default();
  let template_content = get_template_content(
    config,
    "navbar.html",
    guidemark_templates::NAVBAR_TEMPLATE,
  )?;
  tera.add_raw_template("navbar", &template_content)?;

  let root_prefix = utils::calculate_root_relative_path(rel_path);
  let links = config
    .topnav
    .iter()
    .map(|link| format_nav_link(link, &root_prefix))
    .collect::<Vec<_>>()
    .join("\n      ");

  let mut tera_context = tera::Context::new();
  tera_context.insert("site_title", &config.title);
  tera_context.insert("index_path", &format!("{root_prefix}index.html"));
  tera_context.insert("links", &links);

  let html = tera.render("navbar", &tera_context)?;
  Ok(html)
}

/// Render the page footer.
fn render_footer(config: &Config) -> Result<String, GuidemarkError> {
  let mut tera = Tera::default();
  let template_content = get_template_content(
    config,
    "footer.html",
    guidemark_templates::FOOTER_TEMPLATE,
  )?;
  tera.add_raw_template("footer", &template_content)?;

  let mut tera_context = tera::Context::new();
  tera_context.insert("footer_text", &config.footer_text);

  let html = tera.render("footer", &tera_context)?;
  Ok(html)
}

/// Get the template content from a file in the template directory, or use
/// the embedded default.
fn get_template_content(
  config: &Config,
  template_name: &str,
  fallback: &str,
) -> Result<String, GuidemarkError> {
  if let Some(template_path) = config.get_template_file(template_name) {
    if template_path.exists() {
      return fs::read_to_string(&template_path).map_err(|e| {
        GuidemarkError::Template(format!(
          "Failed to read custom template file {}: {e}",
          template_path.display()
        ))
      });
    }
  }

  Ok(fallback.to_string())
}

/// Generate the sidebar navigation HTML from the configured link sections.
///
/// The link whose target equals the current page is marked active, the way
/// a router would highlight the current route.
fn generate_sidebar(config: &Config, rel_path: &Path) -> String {
  let root_prefix = utils::calculate_root_relative_path(rel_path);
  let current = rel_path.to_string_lossy().replace('\\', "/");

  let mut sidebar = String::new();
  for section in &config.sidebar {
    sidebar.push_str("<div class=\"section\">\n");
    writeln!(
      sidebar,
      "<span class=\"section-title\">{}</span>",
      html_escape::encode_text(&section.title)
    )
    .expect("Failed to write to sidebar string");

    sidebar.push_str("<ul>\n");
    for link in &section.links {
      let active =
        !link.is_external() && link.href.trim_start_matches("./") == current;
      writeln!(
        sidebar,
        "<li{}>{}</li>",
        if active { " class=\"active\"" } else { "" },
        format_nav_link(link, &root_prefix)
      )
      .expect("Failed to write to sidebar string");
    }
    sidebar.push_str("</ul>\n</div>\n");
  }

  sidebar
}

/// Format a single navigation anchor.
///
/// External links open in a new tab without a referrer; internal links are
/// made relative to the current page's depth.
fn format_nav_link(link: &NavLink, root_prefix: &str) -> String {
  let text = html_escape::encode_text(&link.text);
  if link.is_external() {
    format!(
      "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{text}</a>",
      link.href
    )
  } else {
    format!(
      "<a href=\"{root_prefix}{}\">{text}</a>",
      link.href.trim_start_matches("./")
    )
  }
}

/// Generate script tags for user-configured extra scripts.
fn generate_custom_scripts(config: &Config, rel_path: &Path) -> String {
  let root_prefix = utils::calculate_root_relative_path(rel_path);

  let mut custom_scripts = String::new();
  for script_path in &config.script_paths {
    if let Some(file_name) = script_path.file_name() {
      write!(
        custom_scripts,
        "<script defer src=\"{root_prefix}assets/{}\"></script>",
        file_name.to_string_lossy()
      )
      .expect("Failed to write to custom_scripts string");
    }
  }

  custom_scripts
}

/// Generate the nested table-of-contents list from collected headings.
///
/// Levels 1-3 are included; deeper headings keep their anchors but stay out
/// of the outline.
#[must_use]
pub fn generate_toc(headings: &[Heading]) -> String {
  let mut toc = String::new();
  let mut depth = 0usize;
  let mut open_item = false;

  for heading in headings {
    if heading.level > 3 {
      continue;
    }
    let target = usize::from(heading.level);

    while depth < target {
      toc.push_str("<ul>");
      depth += 1;
      open_item = false;
    }
    while depth > target {
      if open_item {
        toc.push_str("</li>");
      }
      toc.push_str("</ul>");
      depth -= 1;
      open_item = true;
    }
    if open_item {
      toc.push_str("</li>");
    }
    write!(
      toc,
      "<li><a href=\"#{}\">{}</a>",
      heading.id,
      html_escape::encode_text(heading.title.trim())
    )
    .expect("Failed to write to toc string");
    open_item = true;
  }

  while depth > 0 {
    if open_item {
      toc.push_str("</li>");
    }
    toc.push_str("</ul>");
    depth -= 1;
    open_item = true;
  }

  toc
}
