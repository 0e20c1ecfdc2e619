//! External link targets

use std::fmt;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// A validated URL that may be handed to the OS handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    url: Url,
}

impl LinkTarget {
    /// Parses a link target.
    ///
    /// Any absolute URL is accepted as-is; whether its scheme can be handled
    /// is up to the host. A bare e-mail address such as `name@example.com`
    /// becomes a `mailto:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] for empty, relative or unparsable
    /// input.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUrl(raw.to_string()));
        }

        let url = if is_bare_email(trimmed) {
            Url::parse(&format!("mailto:{trimmed}"))
        } else {
            Url::parse(trimmed)
        }
        .map_err(|_| DomainError::InvalidUrl(raw.to_string()))?;

        Ok(Self { url })
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Returns true for `mailto:` targets.
    #[must_use]
    pub fn is_email(&self) -> bool {
        self.url.scheme() == "mailto"
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_bare_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !s.contains(':')
        && !s.contains('/')
        && !s.chars().any(char::is_whitespace)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_https() {
        let target = LinkTarget::parse("https://github.com/Sunshine031991").unwrap();
        assert_eq!(target.as_str(), "https://github.com/Sunshine031991");
        assert!(!target.is_email());
    }

    #[test]
    fn test_bare_email_becomes_mailto() {
        let target = LinkTarget::parse("steven.carrilho@fujitsu.com").unwrap();
        assert_eq!(target.as_str(), "mailto:steven.carrilho@fujitsu.com");
        assert!(target.is_email());
    }

    #[test]
    fn test_empty_is_invalid() {
        assert_eq!(
            LinkTarget::parse(""),
            Err(DomainError::InvalidUrl(String::new()))
        );
        assert_eq!(
            LinkTarget::parse("   "),
            Err(DomainError::InvalidUrl("   ".to_string()))
        );
    }

    #[test]
    fn test_relative_is_invalid() {
        assert!(matches!(
            LinkTarget::parse("github.com/profile"),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_any_absolute_scheme_is_accepted() {
        let target = LinkTarget::parse("ftp://ftp.example.com/cv.pdf").unwrap();
        assert_eq!(target.as_str(), "ftp://ftp.example.com/cv.pdf");
        assert!(!target.is_email());
    }
}
