//! Shared configuration types for the Trinity School site
//!
//! This crate contains serializable content types shared between the
//! platform-agnostic core (trinity-core) and the WASM frontend (trinity-web).
//! All page copy lives in a TOML document that deserializes into [`SiteConfig`].

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Default count-up duration in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 2000.0;

/// Visible fraction at which a stat counter starts counting.
pub const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;

/// Visible fraction at which a page section fades in.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

fn default_counter_duration_ms() -> f64 {
    DEFAULT_COUNTER_DURATION_MS
}

fn default_counter_threshold() -> f64 {
    DEFAULT_COUNTER_THRESHOLD
}

fn default_reveal_threshold() -> f64 {
    DEFAULT_REVEAL_THRESHOLD
}

fn default_school_name() -> String {
    "Trinity School".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Page color scheme. Serialized as `"light"` / `"dark"`, the same strings
/// stored in the browser and written to the `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored theme value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Icon for the toggle button (shows what clicking switches to)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Admissions
// ─────────────────────────────────────────────────────────────────────────────

/// Grade band a parent can enquire about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeLevel {
    Nursery,
    Primary,
    Middle,
    Secondary,
}

impl GradeLevel {
    pub fn all() -> &'static [GradeLevel] {
        &[
            GradeLevel::Nursery,
            GradeLevel::Primary,
            GradeLevel::Middle,
            GradeLevel::Secondary,
        ]
    }

    /// Form value for the `<option>` element
    pub fn value(&self) -> &'static str {
        match self {
            GradeLevel::Nursery => "nursery",
            GradeLevel::Primary => "primary",
            GradeLevel::Middle => "middle",
            GradeLevel::Secondary => "secondary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Nursery => "Nursery / LKG / UKG",
            GradeLevel::Primary => "Grade 1 - 5",
            GradeLevel::Middle => "Grade 6 - 8",
            GradeLevel::Secondary => "Grade 9 - 10",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|g| g.value() == value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Content Building Blocks
// ─────────────────────────────────────────────────────────────────────────────

/// Count-up statistic shown in the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Value the counter ends on
    pub end: u64,
    /// Animation length; non-positive values are clamped at runtime
    #[serde(default = "default_counter_duration_ms")]
    pub duration_ms: f64,
    /// Literal text rendered after the number (e.g. `+`, `%`)
    #[serde(default)]
    pub suffix: String,
}

impl CounterConfig {
    pub fn new(end: u64) -> Self {
        Self {
            end,
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
            suffix: String::new(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// A hero statistic: either an animated counter or fixed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeroStat {
    Counter {
        label: String,
        end: u64,
        #[serde(default = "default_counter_duration_ms")]
        duration_ms: f64,
        #[serde(default)]
        suffix: String,
    },
    Text {
        label: String,
        value: String,
    },
}

impl HeroStat {
    pub fn label(&self) -> &str {
        match self {
            HeroStat::Counter { label, .. } | HeroStat::Text { label, .. } => label,
        }
    }

    /// Counter settings, if this stat animates
    pub fn counter(&self) -> Option<CounterConfig> {
        match self {
            HeroStat::Counter {
                end,
                duration_ms,
                suffix,
                ..
            } => Some(CounterConfig {
                end: *end,
                duration_ms: *duration_ms,
                suffix: suffix.clone(),
            }),
            HeroStat::Text { .. } => None,
        }
    }
}

/// Visual weight of a link rendered as a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonStyle {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Secondary => "btn btn-secondary",
            ButtonStyle::Outline => "btn btn-outline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub style: ButtonStyle,
    /// Open in a new tab
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightCard {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub icon: String,
    pub title: String,
    pub text: String,
    pub badge: String,
    /// Collage sprite sheet class (`source-collage-1`, ...)
    pub source: String,
    /// Slice class selecting the region of the collage
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderCard {
    pub image: String,
    pub role: String,
    pub organisation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

/// A titled page section holding a list of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSection<T> {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for CardSection<T> {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub motto: String,
    /// Breadcrumb trail; the last crumb is highlighted
    #[serde(default)]
    pub breadcrumb: Vec<String>,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub stats: Vec<HeroStat>,
    #[serde(default)]
    pub actions: Vec<LinkConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CtaBanner {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub link: LinkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    /// Link opened by the "Open in Google Maps" button
    #[serde(default)]
    pub maps_link: String,
    /// URL of the embedded map iframe
    #[serde(default)]
    pub map_embed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub address_lines: Vec<String>,
    #[serde(default)]
    pub quick_links: Vec<NavLink>,
}

/// Visibility thresholds for the page animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    #[serde(default = "default_counter_threshold")]
    pub counter_threshold: f64,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            counter_threshold: DEFAULT_COUNTER_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Site Config
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_school_name")]
    pub school_name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub enquire_href: String,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub highlights: CardSection<HighlightCard>,
    #[serde(default)]
    pub facilities: CardSection<Facility>,
    #[serde(default)]
    pub gallery: CardSection<GalleryImage>,
    #[serde(default)]
    pub leadership: CardSection<LeaderCard>,
    #[serde(default)]
    pub cta: CtaBanner,
    #[serde(default)]
    pub faq: CardSection<FaqEntry>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            school_name: default_school_name(),
            logo: String::new(),
            nav: Vec::new(),
            enquire_href: String::new(),
            animation: AnimationSettings::default(),
            hero: HeroConfig::default(),
            highlights: CardSection::default(),
            facilities: CardSection::default(),
            gallery: CardSection::default(),
            leadership: CardSection::default(),
            cta: CtaBanner::default(),
            faq: CardSection::default(),
            contact: ContactInfo::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Animated counters in hero order
    pub fn counters(&self) -> impl Iterator<Item = CounterConfig> + '_ {
        self.hero.stats.iter().filter_map(HeroStat::counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_and_parse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn grade_level_values_round_trip() {
        for grade in GradeLevel::all() {
            assert_eq!(GradeLevel::from_value(grade.value()), Some(*grade));
        }
        assert_eq!(GradeLevel::from_value(""), None);
    }

    #[test]
    fn hero_stats_parse_with_defaults() {
        let toml_str = r#"
            school_name = "Trinity School"

            [[hero.stats]]
            kind = "counter"
            label = "Years of Excellence"
            end = 20
            suffix = "+"

            [[hero.stats]]
            kind = "text"
            label = "Affiliated School"
            value = "CBSE"

            [[hero.stats]]
            kind = "counter"
            label = "Result Track"
            end = 100
            duration_ms = 1500
            suffix = "%"
        "#;

        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.hero.stats.len(), 3);
        assert_eq!(config.hero.stats[1].label(), "Affiliated School");

        let counters: Vec<_> = config.counters().collect();
        assert_eq!(
            counters,
            vec![
                CounterConfig::new(20).with_suffix("+"),
                CounterConfig::new(100)
                    .with_suffix("%")
                    .with_duration_ms(1500.0),
            ]
        );
        assert_eq!(config.animation, AnimationSettings::default());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.school_name, "Trinity School");
        assert_eq!(config.animation.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn card_sections_parse() {
        let toml_str = r##"
            [faq]
            title = "Common Questions"

            [[faq.items]]
            question = "Is transport facility available?"
            answer = "Yes."

            [cta]
            heading = "Ready to Shape Your Future?"
            link = { label = "Enquire Now", href = "#admissions", style = "secondary" }
        "##;

        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.faq.title, "Common Questions");
        assert_eq!(config.faq.subtitle, None);
        assert_eq!(config.faq.items.len(), 1);
        assert_eq!(config.cta.link.href, "#admissions");
        assert_eq!(config.cta.link.style, ButtonStyle::Secondary);
        assert!(!config.cta.link.external);
    }
}
