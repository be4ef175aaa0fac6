use serde::de::DeserializeOwned;

use crate::ui::Theme;

/// Read and parse a RON file. Logs a warning and returns None on failure.
fn parse_ron_file<T: DeserializeOwned>(path: &str) -> Option<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("failed to read {}: {}", path, e);
            return None;
        }
    };
    match ron::from_str::<T>(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("failed to parse RON {}: {}", path, e);
            None
        }
    }
}

/// Load the theme from a RON file. Fields missing from the file keep their
/// defaults; an unreadable file yields the default theme.
pub fn load_theme(path: &str) -> Theme {
    parse_ron_file(path).unwrap_or_else(|| {
        log::info!("using default theme");
        Theme::default()
    })
}

/// Load list entries (a RON list of strings). Empty on failure.
pub fn load_entries(path: &str) -> Vec<String> {
    let entries: Vec<String> = parse_ron_file(path).unwrap_or_default();
    log::debug!("loaded {} entries from {}", entries.len(), path);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("parchment-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).expect("write temp file");
        path
    }

    #[test]
    fn test_load_theme_from_file() {
        let theme = load_theme("data/theme.ron");
        assert!((theme.font_body_size - 14.0).abs() < 0.01);
        // Fields not in the file keep their defaults.
        assert!((theme.slider_min_handle - 16.0).abs() < 0.01);
    }

    #[test]
    fn test_load_entries_from_file() {
        let entries = load_entries("data/entries.ron");
        assert!(!entries.is_empty());
        assert_eq!(entries[0], "Abbey of Saint-Germain");
    }

    #[test]
    fn test_load_missing_file_no_panic() {
        let theme = load_theme("nonexistent.ron");
        assert!((theme.font_body_size - Theme::default().font_body_size).abs() < 0.01);
        assert!(load_entries("nonexistent.ron").is_empty());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = temp_file("bad.ron", "(font_body_size: \"big\")");
        let p = path.to_str().expect("temp path UTF-8");
        let theme = load_theme(p);
        assert!((theme.font_body_size - 12.0).abs() < 0.01);
        assert!(load_entries(p).is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_entries_keep_duplicates_and_order() {
        let path = temp_file("entries.ron", "[\"b\", \"a\", \"b\"]");
        let entries = load_entries(path.to_str().expect("temp path UTF-8"));
        assert_eq!(entries, vec!["b", "a", "b"]);
        let _ = std::fs::remove_file(path);
    }
}
