use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").unwrap());
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)").unwrap());
static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());

static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"youtube\.com/watch\?v=([\w-]+)",
        r"youtu\.be/([\w-]+)",
        r"youtube\.com/embed/([\w-]+)",
        r"youtube\.com/v/([\w-]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

pub struct TitleNormalizer;

impl TitleNormalizer {
    /// Slug for a game name: `"Marvelous Playground"` → `"marvelous-playground"`.
    pub fn slug(name: &str) -> String {
        let lowered = name.to_lowercase();
        let dashed = NON_ALNUM.replace_all(&lowered, "-");
        let collapsed = DASH_RUN.replace_all(&dashed, "-");
        collapsed.trim_matches('-').to_string()
    }

    /// Slug for a developer handle; the first `@` is dropped before slugging.
    pub fn developer_slug(name: &str) -> String {
        Self::slug(&name.replacen('@', "", 1))
    }

    /// Key given to a developer card found in a page: lower-cased, leading `@`
    /// removed, whitespace runs turned into `-`.
    pub fn developer_key(name: &str) -> String {
        let lowered = name.trim().to_lowercase();
        let handle = lowered.strip_prefix('@').unwrap_or(&lowered);
        WHITESPACE_RUN.replace_all(handle, "-").to_string()
    }

    /// First `base`, then `base-1`, `base-2`, ... until `taken` says no.
    pub fn unique_id(base: &str, taken: impl Fn(&str) -> bool) -> String {
        if !taken(base) {
            return base.to_string();
        }
        let mut counter = 1;
        loop {
            let candidate = format!("{}-{}", base, counter);
            if !taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    pub fn collapse_whitespace(text: &str) -> String {
        WHITESPACE_RUN.replace_all(text.trim(), " ").to_string()
    }

    /// Cuts `text` to `limit` characters, appending `...` only when something was cut.
    pub fn truncate(text: &str, limit: usize) -> String {
        match text.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }
}

/// `"1.2K views"` → 1200, `"3M views"` → 3_000_000, anything unreadable → 0.
pub fn parse_view_count(views: &str) -> u64 {
    let cleaned = views.replacen(" views", "", 1).replace(',', "");
    let cleaned = cleaned.trim();

    let scaled = |suffix: char, factor: f64| -> u64 {
        let number = cleaned.replace(suffix, "");
        LEADING_FLOAT
            .find(number.trim())
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .map(|value| (value * factor).round())
            .filter(|value| *value > 0.0)
            .map(|value| value as u64)
            .unwrap_or(0)
    };

    if cleaned.contains('K') {
        scaled('K', 1e3)
    } else if cleaned.contains('M') {
        scaled('M', 1e6)
    } else if cleaned.contains('B') {
        scaled('B', 1e9)
    } else {
        LEADING_INT
            .find(cleaned)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .filter(|value| *value > 0)
            .map(|value| value as u64)
            .unwrap_or(0)
    }
}

/// YouTube id from a watch, short, embed or `/v/` link.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// `"2024-03-05T10:00:00Z"` → `"Mar 5, 2024"`.
pub fn format_date_display(published_at: &str) -> String {
    let trimmed = published_at.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    match date {
        Ok(date) => display_date(date),
        Err(_) => "Unknown Date".to_string(),
    }
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_display_name() {
        assert_eq!(
            TitleNormalizer::slug("Marvelous Playground"),
            "marvelous-playground"
        );
        assert_eq!(TitleNormalizer::slug("  99 Nights: Forest!! "), "99-nights-forest");
        assert_eq!(TitleNormalizer::developer_slug("@Ghost Dev"), "ghost-dev");
    }

    #[test]
    fn collisions_get_numeric_suffixes_in_order() {
        let taken = ["demo", "demo-1"];
        let id = TitleNormalizer::unique_id("demo", |candidate| taken.contains(&candidate));
        assert_eq!(id, "demo-2");
        assert_eq!(TitleNormalizer::unique_id("fresh", |_| false), "fresh");
    }

    #[test]
    fn developer_key_from_card_name() {
        assert_eq!(TitleNormalizer::developer_key(" @Loaf  Master "), "loaf-master");
        assert_eq!(TitleNormalizer::developer_key("Ace"), "ace");
    }

    #[test]
    fn view_counts() {
        assert_eq!(parse_view_count("1.2K views"), 1200);
        assert_eq!(parse_view_count("3M views"), 3_000_000);
        assert_eq!(parse_view_count("45 views"), 45);
        assert_eq!(parse_view_count("1,234 views"), 1234);
        assert_eq!(parse_view_count("2.5B views"), 2_500_000_000);
        assert_eq!(parse_view_count("2.3M views"), 2_300_000);
        assert_eq!(parse_view_count("4.1K views"), 4100);
        assert_eq!(parse_view_count("garbage"), 0);
        assert_eq!(parse_view_count("N/A"), 0);
    }

    #[test]
    fn video_ids_from_known_url_shapes() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/abc-123"),
            Some("abc-123".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/xyz_9"),
            Some("xyz_9".to_string())
        );
        assert_eq!(extract_video_id("https://vimeo.com/1234"), None);
    }

    #[test]
    fn date_display() {
        assert_eq!(format_date_display("2024-03-05T10:00:00Z"), "Mar 5, 2024");
        assert_eq!(format_date_display("2023-12-25"), "Dec 25, 2023");
        assert_eq!(format_date_display("someday"), "Unknown Date");
    }

    #[test]
    fn truncation_marks_only_when_cut() {
        assert_eq!(TitleNormalizer::truncate("short", 40), "short");
        assert_eq!(TitleNormalizer::truncate("abcdef", 3), "abc...");
        assert_eq!(TitleNormalizer::truncate("abc", 3), "abc");
    }
}
