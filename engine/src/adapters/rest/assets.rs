//! Static assets bundled into the binary

const STYLE_CSS: &str = include_str!("static/style.css");
const DASHBOARD_JS: &str = include_str!("static/dashboard.js");

/// An embedded file served under `/static/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub content_type: &'static str,
    pub body: &'static str,
}

const ASSETS: &[(&str, Asset)] = &[
    (
        "style.css",
        Asset {
            content_type: "text/css; charset=utf-8",
            body: STYLE_CSS,
        },
    ),
    (
        "dashboard.js",
        Asset {
            content_type: "text/javascript; charset=utf-8",
            body: DASHBOARD_JS,
        },
    ),
];

/// Look up an asset by its path relative to `/static/`
pub fn lookup(path: &str) -> Option<Asset> {
    let path = path.trim_start_matches('/');
    ASSETS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, asset)| *asset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_assets() {
        let css = lookup("style.css").unwrap();
        assert!(css.content_type.starts_with("text/css"));
        assert!(css.body.contains("#log"));

        assert!(lookup("/dashboard.js").is_some());
    }

    #[test]
    fn test_lookup_unknown_asset() {
        assert!(lookup("missing.png").is_none());
        assert!(lookup("../Cargo.toml").is_none());
        assert!(lookup("").is_none());
    }
}
