//! Icon names to single-cell glyphs. Purely decorative.

pub fn glyph(name: &str) -> &'static str {
    match name {
        "sparkles" => "✦",
        "arrow-right" => "→",
        "arrow-left" => "←",
        "play" => "▶",
        "check" => "✔",
        "bar-chart" => "▇",
        "trending-up" => "↗",
        "database" => "⛁",
        "droplet" | "droplets" => "💧",
        "shield" => "⛨",
        "sprout" => "🌱",
        "calendar" => "📅",
        "sun" => "☀",
        "wind" => "≋",
        "map-pin" => "⌖",
        "scale" => "⚖",
        "send" => "➤",
        "dot" => "●",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_has_fallback() {
        assert_eq!(glyph("no-such-icon"), "•");
        assert_eq!(glyph("check"), "✔");
    }
}
