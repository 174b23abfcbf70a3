use std::fmt;

const SCHEME: &str = "Bearer";

/// A bearer token pasted in by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Returns `None` for blank input. A leading `Bearer` scheme is dropped.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let token = match raw.get(..SCHEME.len()) {
            Some(scheme)
                if scheme.eq_ignore_ascii_case(SCHEME)
                    && raw[SCHEME.len()..]
                        .chars()
                        .next()
                        .map_or(true, char::is_whitespace) =>
            {
                raw[SCHEME.len()..].trim()
            }
            _ => raw,
        };
        if token.is_empty() {
            None
        } else {
            Some(BearerToken(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keeps tokens out of logs.
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_none() {
        assert_eq!(BearerToken::parse(""), None);
        assert_eq!(BearerToken::parse("   "), None);
        assert_eq!(BearerToken::parse("Bearer "), None);
        assert_eq!(BearerToken::parse("Bearer"), None);
        assert_eq!(BearerToken::parse("bearer  "), None);
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let token = BearerToken::parse("BEARER xyz").unwrap();
        assert_eq!(token.as_str(), "xyz");
    }

    #[test]
    fn scheme_needs_separator() {
        let token = BearerToken::parse("Bearerabc").unwrap();
        assert_eq!(token.as_str(), "Bearerabc");
    }

    #[test]
    fn header_value() {
        let token = BearerToken::parse(" abc123 ").unwrap();
        assert_eq!(token.as_str(), "abc123");
        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn pasted_header_is_accepted() {
        let token = BearerToken::parse("Bearer abc123").unwrap();
        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn debug_hides_secret() {
        let token = BearerToken::parse("secret").unwrap();
        assert!(!format!("{:?}", token).contains("secret"));
    }
}
