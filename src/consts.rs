//! Shared constants for the page behavior crate.

// ── Element ids ─────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const YEAR_ID: &str = "year";
pub const TYPEWRITER_ID: &str = "typewriter";
pub const CHAT_FORM_ID: &str = "chatForm";
pub const CHAT_INPUT_ID: &str = "chatInput";
pub const CHAT_LOG_ID: &str = "chatLog";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_STATUS_ID: &str = "formStatus";

// ── Selectors ───────────────────────────────────────────────────

pub const SKILL_BAR_SELECTOR: &str = ".skill-list .bar";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const HERO_AVATAR_SELECTOR: &str = ".hero .avatar-frame";
pub const AVATAR_SELECTOR: &str = ".avatar-frame";
pub const CARD_SELECTOR: &str = ".card";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "gd-theme";

/// Attribute set on `<body>` while the light theme is active.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Skill bars ──────────────────────────────────────────────────

pub const SKILL_LEVEL_ATTRIBUTE: &str = "data-level";
pub const SKILL_BAR_TRANSITION: &str = "width 900ms ease-out";

// ── Typewriter ──────────────────────────────────────────────────

/// Delay between typed characters, in milliseconds.
pub const TYPE_INTERVAL_MS: u32 = 45;

/// Pause after a phrase is fully typed, in milliseconds.
pub const TYPE_PAUSE_MS: u32 = 900;

/// Delay between deleted characters, in milliseconds.
pub const DELETE_INTERVAL_MS: u32 = 28;

/// Full type+delete cycles before the typewriter settles.
pub const TYPEWRITER_MAX_LOOPS: u32 = 6;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";

// ── Parallax / bob ──────────────────────────────────────────────

pub const PRIMARY_PARALLAX_DEPTH: f64 = 8.0;
pub const SECONDARY_PARALLAX_DEPTH: f64 = 2.0;

/// Phase advance per animation frame.
pub const BOB_STEP: f64 = 0.02;

/// Peak vertical offset in pixels.
pub const BOB_AMPLITUDE_PX: f64 = 2.0;

// ── Mock dialogs ────────────────────────────────────────────────

pub const CHAT_REPLY_DELAY_MS: u32 = 350;
pub const CONTACT_SEND_DELAY_MS: u32 = 600;
