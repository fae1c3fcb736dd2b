//! Display helpers that turn raw gateway entities into view-friendly strings.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Characters kept in card excerpts.
pub const EXCERPT_CHARS: usize = 150;
/// Characters kept when a body stands in for a missing title.
pub const TITLE_CHARS: usize = 50;

/// Keywords recognised in descriptions when an agent carries no explicit tags.
const KNOWN_TAGS: &[(&str, &str)] = &[
    ("gpt", "GPT"),
    ("llm", "LLM"),
    ("python", "Python"),
    ("rust", "Rust"),
    ("javascript", "JavaScript"),
    ("analytic", "Analytics"),
    ("chatbot", "Chatbot"),
    ("automat", "Automation"),
    ("marketing", "Marketing"),
    ("design", "Design"),
    ("education", "Education"),
    ("finance", "Finance"),
    ("code", "Code"),
    ("image", "Images"),
    ("translat", "Translation"),
];

/// Avatar initials: first letters of the first two words, or the first two
/// letters of a single word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let raw: String = match words.as_slice() {
        [] => return "?".to_string(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    raw.to_uppercase()
}

/// First `max_chars` characters followed by `...` when the text is longer.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

/// Title when present, else the opening of the body.
pub fn title_or_excerpt(title: Option<&str>, content: &str) -> String {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => title.to_string(),
        None if content.trim().is_empty() => "Untitled".to_string(),
        None => excerpt(content, TITLE_CHARS),
    }
}

/// Guess tags from free text: `#hashtags` win, otherwise known keywords.
pub fn extract_tags(description: &str, limit: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for word in description.split_whitespace() {
        let Some(tag) = word.strip_prefix('#') else { continue };
        let tag: String = tag
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '+')
            .collect::<String>()
            .to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    if tags.is_empty() {
        let lower = description.to_lowercase();
        tags = KNOWN_TAGS
            .iter()
            .filter(|(needle, _)| lower.contains(needle))
            .map(|(_, label)| (*label).to_string())
            .collect();
    }

    tags.truncate(limit);
    tags
}

/// Split a comma-separated tag field.
pub fn split_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// URL slug: lowercase latin letters, digits and single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Price badge; a missing or zero price means the agent is free.
pub fn price_label(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 && p.fract() == 0.0 => format!("₽{:.0}", p),
        Some(p) if p > 0.0 => format!("₽{:.2}", p),
        _ => "Free".to_string(),
    }
}

/// Rating badge.
pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r > 0.0 => format!("{:.1}", r),
        _ => "No rating".to_string(),
    }
}

/// Review counter.
pub fn reviews_label(count: Option<u32>) -> String {
    match count {
        None | Some(0) => "No reviews".to_string(),
        Some(1) => "1 review".to_string(),
        Some(n) => format!("{} reviews", n),
    }
}

/// Label for a user known only by id.
pub fn user_label(user_id: &str) -> String {
    let id = user_id.trim();
    if id.is_empty() {
        return "Unknown user".to_string();
    }
    let short: String = id.chars().take(8).collect();
    format!("User {}...", short)
}

/// Parse the timestamps the gateway emits: RFC 3339, or naive ISO 8601 in UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// "5 November 2025, 09:00".
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%-d %B %Y, %H:%M").to_string())
        .unwrap_or_else(|| "Unknown date".to_string())
}

/// "5 Nov 2025".
pub fn format_date_short(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%-d %b %Y").to_string())
        .unwrap_or_else(|| "Unknown date".to_string())
}

/// "just now", "5 minutes ago", "3 days ago"; older than a week falls back
/// to [`format_date_short`].
pub fn relative_date(value: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(value) else {
        return "Unknown date".to_string();
    };
    let elapsed = now.signed_duration_since(then);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };
    match elapsed.num_seconds() {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => plural(s / 60, "minute"),
        s if s < 86_400 => plural(s / 3_600, "hour"),
        s if s < 7 * 86_400 => plural(s / 86_400, "day"),
        _ => format_date_short(value),
    }
}

/// Tabs on the discussions list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiscussionTab {
    #[default]
    All,
    /// More than five replies
    Active,
    Unanswered,
    /// Started by the signed-in user
    Mine,
}

impl DiscussionTab {
    pub const ALL: [DiscussionTab; 4] = [Self::All, Self::Active, Self::Unanswered, Self::Mine];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Unanswered => "Unanswered",
            Self::Mine => "My discussions",
        }
    }

    pub fn matches(self, replies: usize, author_id: &str, current_user: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Active => replies > 5,
            Self::Unanswered => replies == 0,
            Self::Mine => current_user.is_some_and(|id| !id.is_empty() && id == author_id),
        }
    }
}

/// Slide position for a media carousel; moves wrap around both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("code master"), "CM");
        assert_eq!(initials("neo"), "NE");
        assert_eq!(initials("  "), "?");
        assert_eq!(initials("ёжик в тумане"), "ЁВ");
    }

    #[test]
    fn test_excerpt_is_char_aware() {
        assert_eq!(excerpt("short", 150), "short");
        assert_eq!(excerpt("привет мир", 6), "привет...");
    }

    #[test]
    fn test_extract_tags() {
        assert_eq!(extract_tags("Bot for #Python, #data-science and #python", 5), vec!["python", "data-science"]);
        assert_eq!(extract_tags("A GPT chatbot for marketing teams", 2), vec!["GPT", "Chatbot"]);
        assert!(extract_tags("nothing to see", 5).is_empty());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("AI Copywriter"), "ai-copywriter");
        assert_eq!(slugify("  Code -- Master!! Pro  "), "code-master-pro");
        assert_eq!(slugify("Агент 007"), "007");
        assert_eq!(slugify("Агент"), "");
    }

    #[test]
    fn test_split_tags_dedups() {
        assert_eq!(split_tags("ai, NLP, ,nlp, bots"), vec!["ai", "NLP", "bots"]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(price_label(None), "Free");
        assert_eq!(price_label(Some(0.0)), "Free");
        assert_eq!(price_label(Some(990.0)), "₽990");
        assert_eq!(price_label(Some(9.5)), "₽9.50");
        assert_eq!(rating_label(Some(4.26)), "4.3");
        assert_eq!(rating_label(None), "No rating");
        assert_eq!(reviews_label(Some(1)), "1 review");
        assert_eq!(user_label("5f0c2a9e-1111"), "User 5f0c2a9e...");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-11-05T09:30:00.123456"), "5 November 2025, 09:30");
        assert_eq!(format_date("2025-11-05T09:30:00+00:00"), "5 November 2025, 09:30");
        assert_eq!(format_date_short("2025-11-05T09:30:00Z"), "5 Nov 2025");
        assert_eq!(format_date("yesterday"), "Unknown date");
    }

    #[test]
    fn test_relative_date() {
        let now = parse_timestamp("2025-11-05T12:00:00Z").unwrap();
        assert_eq!(relative_date("2025-11-05T11:59:30Z", now), "just now");
        assert_eq!(relative_date("2025-11-05T11:55:00Z", now), "5 minutes ago");
        assert_eq!(relative_date("2025-11-05T11:00:00", now), "1 hour ago");
        assert_eq!(relative_date("2025-11-02T12:00:00Z", now), "3 days ago");
        assert_eq!(relative_date("2025-10-01T12:00:00Z", now), "1 Oct 2025");
        assert_eq!(relative_date("yesterday", now), "Unknown date");
    }

    #[test]
    fn test_discussion_tabs() {
        assert!(DiscussionTab::All.matches(0, "u1", None));
        assert!(DiscussionTab::Active.matches(6, "u1", None));
        assert!(!DiscussionTab::Active.matches(5, "u1", None));
        assert!(DiscussionTab::Unanswered.matches(0, "u1", None));
        assert!(DiscussionTab::Mine.matches(3, "u1", Some("u1")));
        assert!(!DiscussionTab::Mine.matches(3, "u1", Some("u2")));
        assert!(!DiscussionTab::Mine.matches(3, "u1", None));
    }

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.go_to(1);
        assert_eq!(carousel.index(), 1);
        carousel.go_to(7);
        assert_eq!(carousel.index(), 1);

        let mut empty = Carousel::new(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.index(), 0);
    }
}
