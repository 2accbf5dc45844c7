//! Channel name normalization

/// Normalize a raw channel name.
///
/// Trims whitespace, strips the platform display prefix (case-insensitive,
/// e.g. `r/`) and lower-cases the rest. Returns `None` when nothing usable
/// remains or the name contains whitespace or a path separator.
pub fn normalize_channel(raw: &str, display_prefix: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = if !display_prefix.is_empty()
        && trimmed.len() >= display_prefix.len()
        && trimmed.is_char_boundary(display_prefix.len())
        && trimmed[..display_prefix.len()].eq_ignore_ascii_case(display_prefix)
    {
        &trimmed[display_prefix.len()..]
    } else {
        trimmed
    };

    let name = stripped.trim().to_lowercase();
    if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == '/') {
        return None;
    }
    Some(name)
}

/// Normalize and dedupe a channel list, keeping the first occurrence of each.
///
/// Returns the rejected raw names alongside the accepted ones.
pub fn normalize_channels(raw: &[String], display_prefix: &str) -> (Vec<String>, Vec<String>) {
    let mut accepted: Vec<String> = Vec::new();
    let mut rejected = Vec::new();

    for name in raw {
        match normalize_channel(name, display_prefix) {
            Some(clean) => {
                if !accepted.contains(&clean) {
                    accepted.push(clean);
                }
            }
            None => rejected.push(name.clone()),
        }
    }

    (accepted, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prefix_and_lowercases() {
        assert_eq!(normalize_channel("r/SideProject", "r/"), Some("sideproject".to_string()));
        assert_eq!(normalize_channel("R/Rust", "r/"), Some("rust".to_string()));
        assert_eq!(normalize_channel("  learnprogramming ", "r/"), Some("learnprogramming".to_string()));
    }

    #[test]
    fn test_prefix_only_stripped_at_start() {
        assert_eq!(normalize_channel("barr/", "r/"), None);
        assert_eq!(normalize_channel("webdev", "r/"), Some("webdev".to_string()));
    }

    #[test]
    fn test_rejects_empty_and_spaced() {
        assert_eq!(normalize_channel("r/", "r/"), None);
        assert_eq!(normalize_channel("   ", "r/"), None);
        assert_eq!(normalize_channel("two words", "r/"), None);
    }

    #[test]
    fn test_empty_prefix_keeps_name() {
        assert_eq!(normalize_channel("Startups", ""), Some("startups".to_string()));
    }

    #[test]
    fn test_dedupe_preserves_order() {
        let raw = vec![
            "r/Rust".to_string(),
            "golang".to_string(),
            "rust".to_string(),
            "".to_string(),
            "r/golang".to_string(),
        ];
        let (accepted, rejected) = normalize_channels(&raw, "r/");
        assert_eq!(accepted, vec!["rust".to_string(), "golang".to_string()]);
        assert_eq!(rejected, vec!["".to_string()]);
    }
}
