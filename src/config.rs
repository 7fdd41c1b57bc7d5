//! Site configuration: storage keys, animation timings, and fallback strings.
//!
//! Keys and timings are fixed by the page contract and live as constants.
//! The choices a site owner may reasonably change sit on [`SiteConfig`], which
//! the app shell provides as context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key for the persisted theme (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "theme";
/// Storage key for the persisted profile record.
pub const PROFILE_KEY: &str = "profileData";
/// Storage key for the append-only sent-message log.
pub const SENT_MESSAGES_KEY: &str = "sentMessages";

/// Period of the hero role rotation.
pub const ROLE_ROTATE_INTERVAL_MS: u64 = 2700;
/// Fade-out time before the role text is swapped.
pub const ROLE_FADE_MS: u64 = 260;
/// How long the copy button reads "Copied ✓".
pub const COPY_LABEL_RESET_MS: u64 = 1800;
/// How long the CV download button reads "Downloading...".
pub const DOWNLOAD_LABEL_RESET_MS: u64 = 1500;
/// How long the resume nav link reads "Downloading...".
pub const RESUME_LABEL_RESET_MS: u64 = 1400;

pub const DEFAULT_MAIL_SUBJECT: &str = "Contact from portfolio";
pub const FALLBACK_COPY_EMAIL: &str = "your-email@example.com";
pub const DEFAULT_AVATAR_BASE: &str = "assets/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Subject used for mailto links when the visitor leaves it blank.
    pub default_mail_subject: String,
    /// Address copied when the profile has no email.
    pub fallback_copy_email: String,
    /// Directory prepended to bare avatar filenames. `None` uses them verbatim.
    pub avatar_base: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_mail_subject: DEFAULT_MAIL_SUBJECT.to_owned(),
            fallback_copy_email: FALLBACK_COPY_EMAIL.to_owned(),
            avatar_base: Some(DEFAULT_AVATAR_BASE.to_owned()),
        }
    }
}

impl SiteConfig {
    /// Resolve a stored avatar value into an `img` source.
    ///
    /// Paths, absolute URLs and data URIs pass through unchanged. A bare
    /// filename is joined onto `avatar_base` when one is configured.
    #[must_use]
    pub fn resolve_avatar(&self, avatar: &str) -> String {
        let avatar = avatar.trim();
        if avatar.is_empty() || avatar.contains('/') || avatar.contains(':') {
            return avatar.to_owned();
        }
        match self.avatar_base.as_deref() {
            Some(base) if !base.is_empty() => {
                format!("{}/{avatar}", base.trim_end_matches('/'))
            }
            _ => avatar.to_owned(),
        }
    }

    /// Subject line for a mailto link, falling back to the configured default.
    #[must_use]
    pub fn mail_subject<'a>(&'a self, subject: &'a str) -> &'a str {
        if subject.trim().is_empty() { &self.default_mail_subject } else { subject }
    }
}
