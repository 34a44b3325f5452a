/// Base used when `CLASSHUB_API_BASE` is not set at build time.
pub const DEFAULT_BASE: &str = "http://localhost:8000";

/// The resolved API base, always ending in `/api` with no trailing slash.
pub fn api_base() -> String {
    normalize_base(option_env!("CLASSHUB_API_BASE").unwrap_or(DEFAULT_BASE))
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn appends_api_suffix() {
        assert_eq!(normalize_base("http://localhost:8000"), "http://localhost:8000/api");
    }

    #[test]
    fn keeps_existing_api_suffix() {
        assert_eq!(normalize_base("https://classhub.example/api"), "https://classhub.example/api");
    }

    #[test]
    fn strips_trailing_slashes_first() {
        assert_eq!(normalize_base("https://classhub.example/"), "https://classhub.example/api");
        assert_eq!(normalize_base("https://classhub.example/api/"), "https://classhub.example/api");
    }

    #[test]
    fn default_base_resolves_under_api() {
        assert!(api_base().ends_with("/api"));
    }
}
