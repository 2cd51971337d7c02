//! Landing artwork with a built-in fallback.
//!
//! A configured banner file is used when it can be read and is not empty.
//! Any failure falls back silently to [`DEFAULT_BANNER`].

use std::path::Path;

pub const DEFAULT_BANNER: [&str; 5] = [
    r"    _              _    _   ___ ",
    r"   /_\  __ _ _ _ (_)  /_\ |_ _|",
    r"  / _ \/ _` | '_|| | / _ \ | | ",
    r" /_/ \_\__, |_|  |_|/_/ \_\___|",
    r"       |___/                   ",
];

pub fn load(path: Option<&Path>) -> Vec<String> {
    if let Some(path) = path {
        match std::fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => {
                return text.lines().map(str::to_string).collect();
            }
            Ok(_) => tracing::debug!(path = %path.display(), "banner file empty, using fallback"),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "banner unavailable, using fallback")
            }
        }
    }
    DEFAULT_BANNER.iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> Vec<String> {
        DEFAULT_BANNER.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_no_path_uses_fallback() {
        assert_eq!(load(None), fallback());
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let path = std::env::temp_dir().join("agriai-no-banner.txt");
        assert_eq!(load(Some(&path)), fallback());
    }

    #[test]
    fn test_reads_banner_file() {
        let path = std::env::temp_dir().join(format!("agriai-banner-{}.txt", std::process::id()));
        std::fs::write(&path, "~~ fields ~~\n~~ rows ~~\n").unwrap();
        assert_eq!(load(Some(&path)), vec!["~~ fields ~~", "~~ rows ~~"]);
        let _ = std::fs::remove_file(&path);
    }
}
