//! Navigation link tables for the top bar and the sidebar.
//!
//! The original theme hard-coded these tables in the components; here they
//! come from the site configuration so a guide can be reorganized without
//! touching templates.
use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  de::{self, MapAccess, Visitor},
};

/// A single navigation link.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
  /// Link text shown to the reader.
  pub text: String,

  /// Target: site-relative path (`the-guide/step-1.html`) or absolute URL.
  pub href: String,
}

impl NavLink {
  /// Whether this link leaves the site. External links open in a new tab
  /// with `rel="noreferrer"`.
  #[must_use]
  pub fn is_external(&self) -> bool {
    self.href.starts_with("http://") || self.href.starts_with("https://")
  }
}

impl<'de> Deserialize<'de> for NavLink {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct NavLinkVisitor;

    impl<'de> Visitor<'de> for NavLinkVisitor {
      type Value = NavLink;

      fn expecting(
        &self,
        formatter: &mut std::fmt::Formatter,
      ) -> std::fmt::Result {
        formatter
          .write_str("a string or a map with 'text' and 'href' fields")
      }

      fn visit_str<E>(self, value: &str) -> Result<NavLink, E>
      where
        E: de::Error,
      {
        // Shorthand: "foo.html" becomes { text = "foo.html", href = "foo.html" }
        Ok(NavLink {
          text: value.to_string(),
          href: value.to_string(),
        })
      }

      fn visit_map<M>(self, mut map: M) -> Result<NavLink, M::Error>
      where
        M: MapAccess<'de>,
      {
        let mut text: Option<String> = None;
        let mut href: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
          match key.as_str() {
            "text" => {
              if text.is_some() {
                return Err(de::Error::duplicate_field("text"));
              }
              text = Some(map.next_value()?);
            },
            "href" => {
              if href.is_some() {
                return Err(de::Error::duplicate_field("href"));
              }
              href = Some(map.next_value()?);
            },
            _ => {
              return Err(de::Error::unknown_field(&key, &["text", "href"]));
            },
          }
        }

        let href = href.ok_or_else(|| de::Error::missing_field("href"))?;
        let text = text.unwrap_or_else(|| href.clone());
        Ok(NavLink { text, href })
      }
    }

    deserializer.deserialize_any(NavLinkVisitor)
  }
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NavSection {
  /// Section title shown above the links.
  pub title: String,

  /// Links in presentation order.
  #[serde(default)]
  pub links: Vec<NavLink>,
}
