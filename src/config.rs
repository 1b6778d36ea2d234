//! Site identity and the tunables used by the interactive controllers.

pub const SITE_OWNER: &str = "Maya Okafor";
pub const SITE_TAGLINE: &str = "Cloud & Systems Engineer";
pub const CONTACT_EMAIL: &str = "hello@mayaokafor.dev";
pub const GITHUB_URL: &str = "https://github.com/mayaokafor";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/mayaokafor";

/// Sections of the home page, in document order. Ids double as nav fragments.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("certificates", "Certificates"),
    ("contact", "Contact"),
];

/// Quiet period before the active nav entry is recomputed.
pub const SCROLL_DEBOUNCE_MS: f64 = 100.0;
/// Fraction of the viewport height added to the scroll offset to get the
/// point a section must contain to count as "in view".
pub const SECTION_REFERENCE_FRACTION: f64 = 1.0 / 3.0;
/// Scroll distance after which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const NOTICE_DISMISS_MS: f64 = 5000.0;

pub const THEME_STORAGE_KEY: &str = "theme";
