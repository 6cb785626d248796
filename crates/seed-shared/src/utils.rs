//! Utility functions

/// Masks a principal for log output. Email principals keep their domain.
pub fn mask_principal(principal: &str) -> String {
    match principal.find('@') {
        Some(at_pos) => {
            let (local, domain) = principal.split_at(at_pos);
            format!("{}***{}", visible_prefix(local), domain)
        }
        None => format!("{}***", visible_prefix(principal)),
    }
}

fn visible_prefix(s: &str) -> String {
    let keep = if s.chars().count() <= 2 { 1 } else { 2 };
    s.chars().take(keep).collect()
}

/// Returns `None` when the value is absent or blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_principal() {
        assert_eq!(mask_principal("alice@example.com"), "al***@example.com");
        assert_eq!(mask_principal("al@example.com"), "a***@example.com");
    }

    #[test]
    fn test_mask_login_principal() {
        assert_eq!(mask_principal("root"), "ro***");
        assert_eq!(mask_principal(""), "***");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  SP ")), Some("SP".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
