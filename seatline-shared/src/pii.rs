use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for email addresses that masks the local part in Debug and Display output.
///
/// Serialization passes the real value through; the wrapper exists so that
/// `tracing::info!(email = %Masked(&email))` never leaks an address into logs.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn write_masked(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.as_ref();
        match value.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => write!(f, "{first}***@{domain}"),
                None => write!(f, "***@{domain}"),
            },
            None if value.is_empty() => write!(f, "<empty>"),
            None => write!(f, "********"),
        }
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_local_part() {
        assert_eq!(Masked("john.doe@example.com").to_string(), "j***@example.com");
        assert_eq!(format!("{:?}", Masked("@example.com")), "***@example.com");
    }

    #[test]
    fn test_masks_values_without_domain() {
        assert_eq!(Masked("not-an-email").to_string(), "********");
        assert_eq!(Masked("").to_string(), "<empty>");
    }

    #[test]
    fn test_serializes_real_value() {
        let json = serde_json::to_string(&Masked("jane@example.com".to_string())).unwrap();
        assert_eq!(json, "\"jane@example.com\"");
    }
}
