//! Environment configuration resolution.
//!
//! Turns a flat mapping of upper-snake-case keys to string values (process
//! environment merged with an optional `.env` file, see [`crate::envfile`])
//! into typed configuration bundles: site identity, social links, Giscus
//! comments, repository coordinates, and build mode.
//!
//! ## Resolution contract
//!
//! Every field is described by an entry in an explicit rule table
//! ([`FieldRule`]): its key, a format rule, and a documented fallback.
//! Resolution is:
//!
//! - **Lenient on presence**: an absent (or empty) value silently resolves
//!   to its fallback. There is no "required and missing" hard failure.
//! - **Strict on format**: a *provided* value that does not match its rule
//!   (malformed URL, unknown enum member, non-boolean string) is an
//!   [`EnvError::InvalidFormat`].
//!
//! Three entry points cover the caller spectrum:
//!
//! - [`resolve`] — strict; the first malformed value fails the whole call.
//! - [`resolve_or_default`] — never fails; malformed values fall back to
//!   their defaults with a logged warning. For callers that must keep going.
//! - [`resolve_with_diagnostics`] — never fails; additionally classifies
//!   findings into error (malformed), warning (placeholder still in effect)
//!   and info (actionable suggestion) for build-time reporting.
//!
//! Configuration is resolved once by the CLI entry point and threaded
//! explicitly to consumers. There is no module-level singleton and no
//! load-order dependency.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// Raw configuration source: upper-snake keys to string values.
pub type RawEnv = BTreeMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("invalid value for {field}: expected {expected}, received {received:?}")]
    InvalidFormat {
        field: &'static str,
        expected: String,
        received: String,
    },
}

// ============================================================================
// Field rules
// ============================================================================

/// Format rule applied to a provided value.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Any non-empty string.
    Any,
    /// An absolute URL.
    Url,
    /// An email address.
    Email,
    /// Membership in a fixed set.
    OneOf(&'static [&'static str]),
    /// Boolean string: `true`/`1` or `false`/`0`.
    Bool,
}

impl Rule {
    fn check(&self, value: &str) -> bool {
        match self {
            Rule::Any => true,
            Rule::Url => Url::parse(value).is_ok(),
            Rule::Email => is_email(value),
            Rule::OneOf(options) => options.contains(&value),
            Rule::Bool => matches!(value, "true" | "1" | "false" | "0"),
        }
    }

    fn expected(&self) -> String {
        match self {
            Rule::Any => "a string".to_string(),
            Rule::Url => "an absolute URL".to_string(),
            Rule::Email => "an email address".to_string(),
            Rule::OneOf(options) => format!("one of {}", options.join(", ")),
            Rule::Bool => "a boolean string (true/1/false/0)".to_string(),
        }
    }
}

/// One named setting: key, format rule, documented fallback.
///
/// A field with a fallback never resolves to "nothing"; a field without one
/// (the optional social links) resolves to `None` when absent.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub key: &'static str,
    pub rule: Rule,
    pub fallback: Option<&'static str>,
}

const fn field(key: &'static str, rule: Rule, fallback: Option<&'static str>) -> FieldRule {
    FieldRule { key, rule, fallback }
}

const ZERO_ONE: &[&str] = &["0", "1"];
const MAPPINGS: &[&str] = &["pathname", "url", "title", "og:title", "specific"];

pub const DEFAULT_SITE_URL: &str = "https://your-site.com";
pub const DEFAULT_SITE_TITLE: &str = "Serial Press";
pub const DEFAULT_SITE_DESCRIPTION: &str =
    "A minimal static site template for serialized web novels";
pub const DEFAULT_SITE_AUTHOR: &str = "Template Author";
pub const DEFAULT_LOCALE: &str = "en-US";
pub const FEATURED_NOVEL_COUNT: usize = 3;
pub const NOVELS_PER_PAGE: usize = 6;

pub const PLACEHOLDER_REPO: &str = "your-username/your-repository";
pub const PLACEHOLDER_REPO_ID: &str = "YOUR_REPO_ID";
pub const PLACEHOLDER_CATEGORY_ID: &str = "YOUR_CATEGORY_ID";

const SITE_URL: FieldRule = field("SITE_URL", Rule::Url, Some(DEFAULT_SITE_URL));
const SITE_TITLE: FieldRule = field("SITE_TITLE", Rule::Any, Some(DEFAULT_SITE_TITLE));
const SITE_DESCRIPTION: FieldRule =
    field("SITE_DESCRIPTION", Rule::Any, Some(DEFAULT_SITE_DESCRIPTION));
const SITE_AUTHOR: FieldRule = field("SITE_AUTHOR", Rule::Any, Some(DEFAULT_SITE_AUTHOR));

const GITHUB_URL: FieldRule = field("GITHUB_URL", Rule::Url, None);
const EMAIL_ADDRESS: FieldRule = field("EMAIL_ADDRESS", Rule::Email, None);
const PATREON_URL: FieldRule = field("PATREON_URL", Rule::Url, None);
const KOFI_URL: FieldRule = field("KOFI_URL", Rule::Url, None);

const GISCUS_REPO: FieldRule = field("GISCUS_REPO", Rule::Any, Some(PLACEHOLDER_REPO));
const GISCUS_REPO_ID: FieldRule = field("GISCUS_REPO_ID", Rule::Any, Some(PLACEHOLDER_REPO_ID));
const GISCUS_CATEGORY: FieldRule = field("GISCUS_CATEGORY", Rule::Any, Some("General"));
const GISCUS_CATEGORY_ID: FieldRule =
    field("GISCUS_CATEGORY_ID", Rule::Any, Some(PLACEHOLDER_CATEGORY_ID));
const GISCUS_MAPPING: FieldRule =
    field("GISCUS_MAPPING", Rule::OneOf(MAPPINGS), Some("pathname"));
const GISCUS_THEME: FieldRule = field("GISCUS_THEME", Rule::Any, Some("light"));
const GISCUS_LANG: FieldRule = field("GISCUS_LANG", Rule::Any, Some("en"));
const GISCUS_REACTIONS_ENABLED: FieldRule =
    field("GISCUS_REACTIONS_ENABLED", Rule::OneOf(ZERO_ONE), Some("1"));
const GISCUS_EMIT_METADATA: FieldRule =
    field("GISCUS_EMIT_METADATA", Rule::OneOf(ZERO_ONE), Some("0"));
const GISCUS_INPUT_POSITION: FieldRule = field(
    "GISCUS_INPUT_POSITION",
    Rule::OneOf(&["top", "bottom"]),
    Some("top"),
);
const GISCUS_LOADING: FieldRule =
    field("GISCUS_LOADING", Rule::OneOf(&["lazy", "eager"]), Some("lazy"));
const GISCUS_STRICT: FieldRule = field("GISCUS_STRICT", Rule::OneOf(ZERO_ONE), Some("0"));
const GISCUS_ENABLED: FieldRule = field("GISCUS_ENABLED", Rule::Bool, Some("false"));

const REPOSITORY_NAME: FieldRule = field("REPOSITORY_NAME", Rule::Any, Some("your-repository"));
const REPOSITORY_OWNER: FieldRule = field("REPOSITORY_OWNER", Rule::Any, Some("your-username"));

const NODE_ENV: FieldRule = field(
    "NODE_ENV",
    Rule::OneOf(&["development", "production"]),
    Some("development"),
);
const ENABLE_ANALYTICS: FieldRule = field("ENABLE_ANALYTICS", Rule::Bool, Some("false"));

/// Resolve a single field against the raw mapping.
///
/// A provided value that fails its rule is an error; an absent or empty
/// value resolves to the documented fallback (or `None` for fields without
/// one) and never errors. Resolution is pure and idempotent.
pub fn resolve_field(raw: &RawEnv, field: &FieldRule) -> Result<Option<String>, EnvError> {
    match raw.get(field.key).map(String::as_str) {
        Some(value) if !value.is_empty() => {
            if field.rule.check(value) {
                Ok(Some(value.to_string()))
            } else {
                Err(EnvError::InvalidFormat {
                    field: field.key,
                    expected: field.rule.expected(),
                    received: value.to_string(),
                })
            }
        }
        _ => Ok(field.fallback.map(String::from)),
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

// ============================================================================
// Typed configuration bundles
// ============================================================================

/// Site identity and listing sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub url: Url,
    pub title: String,
    pub description: String,
    pub author: String,
    pub locale: String,
    pub featured_novel_count: usize,
    pub novels_per_page: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_SITE_URL).expect("default site URL must parse"),
            title: DEFAULT_SITE_TITLE.to_string(),
            description: DEFAULT_SITE_DESCRIPTION.to_string(),
            author: DEFAULT_SITE_AUTHOR.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            featured_novel_count: FEATURED_NOVEL_COUNT,
            novels_per_page: NOVELS_PER_PAGE,
        }
    }
}

/// Optional social links. All absent by default.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SocialConfig {
    pub github_url: Option<Url>,
    pub email_address: Option<String>,
    pub patreon_url: Option<Url>,
    pub kofi_url: Option<Url>,
}

/// A labeled link for the site footer/header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialConfig {
    pub fn is_empty(&self) -> bool {
        self.github_url.is_none()
            && self.email_address.is_none()
            && self.patreon_url.is_none()
            && self.kofi_url.is_none()
    }

    /// Build the ordered link list: only configured entries, email as a
    /// `mailto:`, RSS always last.
    pub fn links(&self) -> Vec<SocialLink> {
        let mut links = Vec::new();
        if let Some(url) = &self.github_url {
            links.push(SocialLink {
                label: "GitHub".to_string(),
                href: url.to_string(),
            });
        }
        if let Some(addr) = &self.email_address {
            links.push(SocialLink {
                label: "Email".to_string(),
                href: format!("mailto:{addr}"),
            });
        }
        if let Some(url) = &self.patreon_url {
            links.push(SocialLink {
                label: "Patreon".to_string(),
                href: url.to_string(),
            });
        }
        if let Some(url) = &self.kofi_url {
            links.push(SocialLink {
                label: "Ko-fi".to_string(),
                href: url.to_string(),
            });
        }
        links.push(SocialLink {
            label: "RSS".to_string(),
            href: "/rss.xml".to_string(),
        });
        links
    }
}

/// How Giscus maps a page to a discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mapping {
    Pathname,
    Url,
    Title,
    #[serde(rename = "og:title")]
    OgTitle,
    Specific,
}

impl Mapping {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "pathname" => Some(Mapping::Pathname),
            "url" => Some(Mapping::Url),
            "title" => Some(Mapping::Title),
            "og:title" => Some(Mapping::OgTitle),
            "specific" => Some(Mapping::Specific),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    Lazy,
    Eager,
}

/// Serialize a widget flag the way the Giscus client script expects it.
fn ser_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "1" } else { "0" })
}

/// Giscus comment-widget configuration.
///
/// Two independent signals matter for diagnostics: the `enabled` flag and
/// whether the repo identifiers are still placeholders. See [`GiscusState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiscusConfig {
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    pub mapping: Mapping,
    pub theme: String,
    pub lang: String,
    #[serde(serialize_with = "ser_flag")]
    pub reactions_enabled: bool,
    #[serde(serialize_with = "ser_flag")]
    pub emit_metadata: bool,
    pub input_position: InputPosition,
    pub loading: Loading,
    #[serde(serialize_with = "ser_flag")]
    pub strict: bool,
    pub enabled: bool,
}

impl Default for GiscusConfig {
    fn default() -> Self {
        Self {
            repo: PLACEHOLDER_REPO.to_string(),
            repo_id: PLACEHOLDER_REPO_ID.to_string(),
            category: "General".to_string(),
            category_id: PLACEHOLDER_CATEGORY_ID.to_string(),
            mapping: Mapping::Pathname,
            theme: "light".to_string(),
            lang: "en".to_string(),
            reactions_enabled: true,
            emit_metadata: false,
            input_position: InputPosition::Top,
            loading: Loading::Lazy,
            strict: false,
            enabled: false,
        }
    }
}

/// Configuration state of the comment system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiscusState {
    /// Disabled, regardless of identifiers.
    Disabled,
    /// Enabled but the repo identifiers are still the shipped placeholders.
    EnabledPlaceholder,
    /// Enabled with real-looking identifiers.
    Configured,
}

impl GiscusConfig {
    /// True while any repo identifier is still a shipped placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.repo == PLACEHOLDER_REPO
            || self.repo_id == PLACEHOLDER_REPO_ID
            || self.category_id == PLACEHOLDER_CATEGORY_ID
    }

    pub fn state(&self) -> GiscusState {
        if !self.enabled {
            GiscusState::Disabled
        } else if self.is_placeholder() {
            GiscusState::EnabledPlaceholder
        } else {
            GiscusState::Configured
        }
    }
}

/// Source repository coordinates (edit links, issue links).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryConfig {
    pub name: String,
    pub owner: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            name: "your-repository".to_string(),
            owner: "your-username".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

/// Build-time toggles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BuildConfig {
    pub mode: BuildMode,
    pub enable_analytics: bool,
}

/// The full resolved configuration, computed once per invocation and shared
/// read-only with all consumers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Configuration {
    pub site: SiteConfig,
    pub social: SocialConfig,
    pub giscus: GiscusConfig,
    pub repository: RepositoryConfig,
    pub build: BuildConfig,
}

/// Either a raw key/value mapping or an already-resolved configuration.
///
/// Callers that may receive both hand over the tagged variant instead of the
/// callee probing the value's shape.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    Raw(RawEnv),
    Validated(Configuration),
}

impl ConfigSource {
    pub fn into_config(self) -> Result<Configuration, EnvError> {
        match self {
            ConfigSource::Raw(raw) => resolve(&raw),
            ConfigSource::Validated(config) => Ok(config),
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Severity of a diagnostic finding. `Error` never aborts the diagnostic
/// resolution itself; it marks values that were dropped for being malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub field: Option<&'static str>,
    pub message: String,
}

impl Issue {
    fn new(severity: Severity, field: Option<&'static str>, message: impl Into<String>) -> Self {
        Self {
            severity,
            field,
            message: message.into(),
        }
    }
}

/// Diagnostic resolution result: always a full configuration, plus findings.
#[derive(Debug, Clone)]
pub struct Report {
    pub config: Configuration,
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Field access shared by the strict and lenient paths. In strict mode a
/// malformed value propagates; in lenient mode it is recorded as an error
/// issue and the fallback is used instead.
struct Resolver<'a> {
    raw: &'a RawEnv,
    issues: Option<Vec<Issue>>,
}

impl<'a> Resolver<'a> {
    fn strict(raw: &'a RawEnv) -> Self {
        Self { raw, issues: None }
    }

    fn lenient(raw: &'a RawEnv) -> Self {
        Self {
            raw,
            issues: Some(Vec::new()),
        }
    }

    fn optional(&mut self, field: &FieldRule) -> Result<Option<String>, EnvError> {
        match resolve_field(self.raw, field) {
            Ok(value) => Ok(value),
            Err(err) => match &mut self.issues {
                Some(issues) => {
                    issues.push(Issue::new(Severity::Error, Some(field.key), err.to_string()));
                    Ok(field.fallback.map(String::from))
                }
                None => Err(err),
            },
        }
    }

    /// Resolve a field whose rule table defines a fallback. Such a field
    /// always yields a value.
    fn required(&mut self, field: &FieldRule) -> Result<String, EnvError> {
        Ok(self.optional(field)?.unwrap_or_default())
    }

    fn url(&mut self, field: &FieldRule) -> Result<Option<Url>, EnvError> {
        match self.optional(field)? {
            // Value already passed the Url rule; fallbacks are valid constants.
            Some(value) => Ok(Url::parse(&value).ok()),
            None => Ok(None),
        }
    }

    fn truthy(&mut self, field: &FieldRule) -> Result<bool, EnvError> {
        Ok(matches!(self.required(field)?.as_str(), "true" | "1"))
    }

    fn flag(&mut self, field: &FieldRule) -> Result<bool, EnvError> {
        Ok(self.required(field)? == "1")
    }
}

fn site_config(r: &mut Resolver) -> Result<SiteConfig, EnvError> {
    let defaults = SiteConfig::default();
    Ok(SiteConfig {
        url: r.url(&SITE_URL)?.unwrap_or(defaults.url),
        title: r.required(&SITE_TITLE)?,
        description: r.required(&SITE_DESCRIPTION)?,
        author: r.required(&SITE_AUTHOR)?,
        locale: defaults.locale,
        featured_novel_count: defaults.featured_novel_count,
        novels_per_page: defaults.novels_per_page,
    })
}

fn social_config(r: &mut Resolver) -> Result<SocialConfig, EnvError> {
    Ok(SocialConfig {
        github_url: r.url(&GITHUB_URL)?,
        email_address: r.optional(&EMAIL_ADDRESS)?,
        patreon_url: r.url(&PATREON_URL)?,
        kofi_url: r.url(&KOFI_URL)?,
    })
}

fn giscus_config(r: &mut Resolver) -> Result<GiscusConfig, EnvError> {
    Ok(GiscusConfig {
        repo: r.required(&GISCUS_REPO)?,
        repo_id: r.required(&GISCUS_REPO_ID)?,
        category: r.required(&GISCUS_CATEGORY)?,
        category_id: r.required(&GISCUS_CATEGORY_ID)?,
        mapping: Mapping::parse(&r.required(&GISCUS_MAPPING)?).unwrap_or(Mapping::Pathname),
        theme: r.required(&GISCUS_THEME)?,
        lang: r.required(&GISCUS_LANG)?,
        reactions_enabled: r.flag(&GISCUS_REACTIONS_ENABLED)?,
        emit_metadata: r.flag(&GISCUS_EMIT_METADATA)?,
        input_position: match r.required(&GISCUS_INPUT_POSITION)?.as_str() {
            "bottom" => InputPosition::Bottom,
            _ => InputPosition::Top,
        },
        loading: match r.required(&GISCUS_LOADING)?.as_str() {
            "eager" => Loading::Eager,
            _ => Loading::Lazy,
        },
        strict: r.flag(&GISCUS_STRICT)?,
        enabled: r.truthy(&GISCUS_ENABLED)?,
    })
}

fn repository_config(r: &mut Resolver) -> Result<RepositoryConfig, EnvError> {
    Ok(RepositoryConfig {
        name: r.required(&REPOSITORY_NAME)?,
        owner: r.required(&REPOSITORY_OWNER)?,
    })
}

fn build_config(r: &mut Resolver) -> Result<BuildConfig, EnvError> {
    Ok(BuildConfig {
        mode: match r.required(&NODE_ENV)?.as_str() {
            "production" => BuildMode::Production,
            _ => BuildMode::Development,
        },
        enable_analytics: r.truthy(&ENABLE_ANALYTICS)?,
    })
}

/// Resolve the site bundle. Strict on format, lenient on presence.
pub fn resolve_site(raw: &RawEnv) -> Result<SiteConfig, EnvError> {
    site_config(&mut Resolver::strict(raw))
}

/// Resolve the social-links bundle.
pub fn resolve_social(raw: &RawEnv) -> Result<SocialConfig, EnvError> {
    social_config(&mut Resolver::strict(raw))
}

/// Resolve the Giscus comments bundle.
pub fn resolve_giscus(raw: &RawEnv) -> Result<GiscusConfig, EnvError> {
    giscus_config(&mut Resolver::strict(raw))
}

/// Resolve the repository bundle.
pub fn resolve_repository(raw: &RawEnv) -> Result<RepositoryConfig, EnvError> {
    repository_config(&mut Resolver::strict(raw))
}

/// Resolve the build bundle.
pub fn resolve_build(raw: &RawEnv) -> Result<BuildConfig, EnvError> {
    build_config(&mut Resolver::strict(raw))
}

/// Resolve the complete configuration. The first malformed value fails the
/// whole call; absent values use their fallbacks.
pub fn resolve(raw: &RawEnv) -> Result<Configuration, EnvError> {
    let mut r = Resolver::strict(raw);
    Ok(Configuration {
        site: site_config(&mut r)?,
        social: social_config(&mut r)?,
        giscus: giscus_config(&mut r)?,
        repository: repository_config(&mut r)?,
        build: build_config(&mut r)?,
    })
}

/// Resolve without ever failing: malformed values fall back to their
/// documented defaults and are logged. For call paths (page builds) that
/// must produce *something* regardless of configuration quality.
pub fn resolve_or_default(raw: &RawEnv) -> Configuration {
    let report = resolve_with_diagnostics(raw);
    for issue in &report.issues {
        if issue.severity == Severity::Error {
            log::warn!("{}; using fallback value", issue.message);
        }
    }
    report.config
}

/// Resolve with full diagnostics. Never fails.
///
/// Classification:
/// - **error** — a provided value was malformed and its fallback was used,
/// - **warning** — a value that matters is still a shipped placeholder
///   (site URL, repository coordinates, Giscus enabled on placeholders),
/// - **info** — actionable suggestions (no social links, comments disabled).
pub fn resolve_with_diagnostics(raw: &RawEnv) -> Report {
    let mut r = Resolver::lenient(raw);
    let config = Configuration {
        // The lenient resolver swallows format errors, so these cannot fail;
        // defaults are the safety net for the unreachable arm.
        site: site_config(&mut r).unwrap_or_default(),
        social: social_config(&mut r).unwrap_or_default(),
        giscus: giscus_config(&mut r).unwrap_or_default(),
        repository: repository_config(&mut r).unwrap_or_default(),
        build: build_config(&mut r).unwrap_or_default(),
    };
    let mut issues = r.issues.unwrap_or_default();

    if config.site.url.as_str().trim_end_matches('/') == DEFAULT_SITE_URL {
        issues.push(Issue::new(
            Severity::Warning,
            Some(SITE_URL.key),
            "site URL is still the placeholder; set SITE_URL before publishing",
        ));
    }
    if config.site.author == DEFAULT_SITE_AUTHOR {
        issues.push(Issue::new(
            Severity::Warning,
            Some(SITE_AUTHOR.key),
            "site author is still the template default",
        ));
    }
    if config.repository.name == "your-repository" || config.repository.owner == "your-username" {
        issues.push(Issue::new(
            Severity::Warning,
            Some(REPOSITORY_NAME.key),
            "repository coordinates are still placeholders",
        ));
    }
    match config.giscus.state() {
        GiscusState::EnabledPlaceholder => issues.push(Issue::new(
            Severity::Warning,
            Some(GISCUS_REPO.key),
            "comments are enabled but the Giscus repo identifiers are still placeholders",
        )),
        GiscusState::Disabled if config.giscus.is_placeholder() => issues.push(Issue::new(
            Severity::Info,
            Some(GISCUS_ENABLED.key),
            "comments are disabled and not configured",
        )),
        GiscusState::Disabled => issues.push(Issue::new(
            Severity::Info,
            Some(GISCUS_ENABLED.key),
            "Giscus is configured but disabled; set GISCUS_ENABLED=true to turn comments on",
        )),
        GiscusState::Configured => {}
    }
    if config.social.is_empty() {
        issues.push(Issue::new(
            Severity::Info,
            None,
            "no social links configured; set GITHUB_URL, EMAIL_ADDRESS, PATREON_URL or KOFI_URL",
        ));
    }

    Report { config, issues }
}

/// Returns a fully-commented stock `.env` with all keys and explanations.
///
/// Used by the `gen-env` CLI command. Keys with documented fallbacks are
/// listed with their default values; purely optional keys are commented out.
pub fn stock_env_template() -> &'static str {
    r#"# Serial Press Configuration
# ==========================
# All settings are optional. Remove any you don't need — absent keys fall
# back to the defaults shown below. Provided values must be well-formed:
# a malformed URL, email, or enum value is a configuration error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
SITE_URL=https://your-site.com
SITE_TITLE=Serial Press
SITE_DESCRIPTION=A minimal static site template for serialized web novels
SITE_AUTHOR=Template Author

# ---------------------------------------------------------------------------
# Social links (no defaults — only configured links are shown)
# ---------------------------------------------------------------------------
# GITHUB_URL=https://github.com/your-username
# EMAIL_ADDRESS=you@your-site.com
# PATREON_URL=https://patreon.com/your-username
# KOFI_URL=https://ko-fi.com/your-username

# ---------------------------------------------------------------------------
# Comments (Giscus). Disabled until configured; create a discussion
# category in your repository and fill in the ids from giscus.app.
# ---------------------------------------------------------------------------
GISCUS_ENABLED=false
GISCUS_REPO=your-username/your-repository
GISCUS_REPO_ID=YOUR_REPO_ID
GISCUS_CATEGORY=General
GISCUS_CATEGORY_ID=YOUR_CATEGORY_ID
# One of: pathname, url, title, og:title, specific
GISCUS_MAPPING=pathname
GISCUS_THEME=light
GISCUS_LANG=en
# Widget flags use 0/1
GISCUS_REACTIONS_ENABLED=1
GISCUS_EMIT_METADATA=0
GISCUS_STRICT=0
# One of: top, bottom
GISCUS_INPUT_POSITION=top
# One of: lazy, eager
GISCUS_LOADING=lazy

# ---------------------------------------------------------------------------
# Repository (edit/issue links)
# ---------------------------------------------------------------------------
REPOSITORY_NAME=your-repository
REPOSITORY_OWNER=your-username

# ---------------------------------------------------------------------------
# Build
# ---------------------------------------------------------------------------
# One of: development, production
NODE_ENV=development
ENABLE_ANALYTICS=false
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> RawEnv {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // =========================================================================
    // resolve_field
    // =========================================================================

    #[test]
    fn absent_value_resolves_to_fallback() {
        let raw = RawEnv::new();
        assert_eq!(
            resolve_field(&raw, &SITE_TITLE).unwrap(),
            Some(DEFAULT_SITE_TITLE.to_string())
        );
    }

    #[test]
    fn absent_value_without_fallback_resolves_to_none() {
        let raw = RawEnv::new();
        assert_eq!(resolve_field(&raw, &GITHUB_URL).unwrap(), None);
    }

    #[test]
    fn empty_value_is_treated_as_absent() {
        let raw = env(&[("SITE_URL", "")]);
        assert_eq!(
            resolve_field(&raw, &SITE_URL).unwrap(),
            Some(DEFAULT_SITE_URL.to_string())
        );
    }

    #[test]
    fn provided_malformed_url_is_an_error() {
        let raw = env(&[("SITE_URL", "not-a-valid-url")]);
        let err = resolve_field(&raw, &SITE_URL).unwrap_err();
        assert!(matches!(
            err,
            EnvError::InvalidFormat { field: "SITE_URL", .. }
        ));
    }

    #[test]
    fn resolve_field_is_idempotent() {
        let raw = env(&[("GISCUS_MAPPING", "url")]);
        let first = resolve_field(&raw, &GISCUS_MAPPING).unwrap();
        let second = resolve_field(&raw, &GISCUS_MAPPING).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn enum_membership_is_checked() {
        let raw = env(&[("GISCUS_MAPPING", "og:title")]);
        assert!(resolve_field(&raw, &GISCUS_MAPPING).is_ok());
        let raw = env(&[("GISCUS_MAPPING", "slug")]);
        assert!(resolve_field(&raw, &GISCUS_MAPPING).is_err());
    }

    #[test]
    fn bool_strings_are_checked() {
        for value in ["true", "1", "false", "0"] {
            let raw = env(&[("ENABLE_ANALYTICS", value)]);
            assert!(resolve_field(&raw, &ENABLE_ANALYTICS).is_ok(), "{value}");
        }
        let raw = env(&[("ENABLE_ANALYTICS", "yes")]);
        assert!(resolve_field(&raw, &ENABLE_ANALYTICS).is_err());
    }

    #[test]
    fn email_format_is_checked() {
        let raw = env(&[("EMAIL_ADDRESS", "me@my-site.com")]);
        assert!(resolve_field(&raw, &EMAIL_ADDRESS).is_ok());
        for bad in ["not-an-email", "@no-local.com", "me@nodot", "a b@c.com"] {
            let raw = env(&[("EMAIL_ADDRESS", bad)]);
            assert!(resolve_field(&raw, &EMAIL_ADDRESS).is_err(), "{bad}");
        }
    }

    // =========================================================================
    // Typed resolvers
    // =========================================================================

    #[test]
    fn empty_env_resolves_to_documented_defaults() {
        let config = resolve(&RawEnv::new()).unwrap();
        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.social, SocialConfig::default());
        assert_eq!(config.giscus, GiscusConfig::default());
        assert_eq!(config.repository, RepositoryConfig::default());
        assert_eq!(config.build, BuildConfig::default());
    }

    #[test]
    fn site_defaults() {
        let site = resolve_site(&RawEnv::new()).unwrap();
        assert_eq!(site.url.as_str(), "https://your-site.com/");
        assert_eq!(site.title, "Serial Press");
        assert_eq!(site.author, "Template Author");
        assert_eq!(site.locale, "en-US");
        assert_eq!(site.featured_novel_count, 3);
        assert_eq!(site.novels_per_page, 6);
    }

    #[test]
    fn site_overrides_do_not_contaminate_other_fields() {
        let raw = env(&[
            ("SITE_URL", "https://mynovel.com"),
            ("SITE_TITLE", "My Novel Site"),
        ]);
        let site = resolve_site(&raw).unwrap();
        assert_eq!(site.url.as_str(), "https://mynovel.com/");
        assert_eq!(site.title, "My Novel Site");
        // Non-overridden fields keep their defaults.
        assert_eq!(site.description, DEFAULT_SITE_DESCRIPTION);
        assert_eq!(site.author, DEFAULT_SITE_AUTHOR);
    }

    #[test]
    fn social_defaults_are_all_absent() {
        let social = resolve_social(&RawEnv::new()).unwrap();
        assert!(social.is_empty());
    }

    #[test]
    fn social_links_include_configured_entries_and_rss() {
        let raw = env(&[
            ("GITHUB_URL", "https://github.com/someone"),
            ("EMAIL_ADDRESS", "me@my-site.com"),
        ]);
        let social = resolve_social(&raw).unwrap();
        let links = social.links();
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["GitHub", "Email", "RSS"]);
        assert_eq!(links[1].href, "mailto:me@my-site.com");
        assert_eq!(links[2].href, "/rss.xml");
    }

    #[test]
    fn giscus_defaults_are_disabled_placeholders() {
        let giscus = resolve_giscus(&RawEnv::new()).unwrap();
        assert_eq!(giscus.repo, PLACEHOLDER_REPO);
        assert_eq!(giscus.theme, "light");
        assert!(!giscus.enabled);
        assert!(giscus.reactions_enabled);
        assert!(!giscus.emit_metadata);
        assert_eq!(giscus.state(), GiscusState::Disabled);
    }

    #[test]
    fn giscus_overrides_keep_defaults_for_other_fields() {
        let raw = env(&[
            ("GISCUS_REPO", "custom/repo"),
            ("GISCUS_THEME", "dark"),
            ("GISCUS_ENABLED", "false"),
        ]);
        let giscus = resolve_giscus(&raw).unwrap();
        assert_eq!(giscus.repo, "custom/repo");
        assert_eq!(giscus.theme, "dark");
        assert!(!giscus.enabled);
        assert_eq!(giscus.repo_id, PLACEHOLDER_REPO_ID);
    }

    #[test]
    fn giscus_enabled_on_placeholders_is_distinct_state() {
        let raw = env(&[("GISCUS_ENABLED", "true")]);
        let giscus = resolve_giscus(&raw).unwrap();
        assert_eq!(giscus.state(), GiscusState::EnabledPlaceholder);

        let raw = env(&[
            ("GISCUS_ENABLED", "true"),
            ("GISCUS_REPO", "someone/site"),
            ("GISCUS_REPO_ID", "R_kgDO123"),
            ("GISCUS_CATEGORY_ID", "DIC_kwDO123"),
        ]);
        let giscus = resolve_giscus(&raw).unwrap();
        assert_eq!(giscus.state(), GiscusState::Configured);
    }

    #[test]
    fn repository_defaults_and_overrides() {
        let repo = resolve_repository(&RawEnv::new()).unwrap();
        assert_eq!(repo.name, "your-repository");
        assert_eq!(repo.owner, "your-username");

        let raw = env(&[
            ("REPOSITORY_NAME", "my-novel-site"),
            ("REPOSITORY_OWNER", "myusername"),
        ]);
        let repo = resolve_repository(&raw).unwrap();
        assert_eq!(repo.name, "my-novel-site");
        assert_eq!(repo.owner, "myusername");
    }

    #[test]
    fn build_mode_and_analytics() {
        let build = resolve_build(&RawEnv::new()).unwrap();
        assert_eq!(build.mode, BuildMode::Development);
        assert!(!build.enable_analytics);

        let raw = env(&[("NODE_ENV", "production"), ("ENABLE_ANALYTICS", "true")]);
        let build = resolve_build(&raw).unwrap();
        assert_eq!(build.mode, BuildMode::Production);
        assert!(build.enable_analytics);
    }

    #[test]
    fn invalid_node_env_is_error() {
        let raw = env(&[("NODE_ENV", "staging")]);
        assert!(resolve_build(&raw).is_err());
    }

    // =========================================================================
    // resolve / resolve_or_default / resolve_with_diagnostics
    // =========================================================================

    #[test]
    fn strict_resolve_fails_on_first_malformed_value() {
        let raw = env(&[("SITE_URL", "nope")]);
        assert!(resolve(&raw).is_err());
    }

    #[test]
    fn resolve_or_default_never_fails() {
        let raw = env(&[
            ("SITE_URL", "nope"),
            ("SITE_TITLE", "Still Valid"),
            ("GISCUS_MAPPING", "bogus"),
        ]);
        let config = resolve_or_default(&raw);
        // Malformed values fall back; valid siblings survive.
        assert_eq!(config.site.url.as_str(), "https://your-site.com/");
        assert_eq!(config.site.title, "Still Valid");
        assert_eq!(config.giscus.mapping, Mapping::Pathname);
    }

    #[test]
    fn diagnostics_on_empty_env() {
        let report = resolve_with_diagnostics(&RawEnv::new());
        assert!(!report.has_errors());
        // Placeholder warnings for URL, author, repository.
        assert!(report.issues.iter().any(|i| {
            i.severity == Severity::Warning && i.field == Some("SITE_URL")
        }));
        // Info: no social links.
        assert!(report.issues.iter().any(|i| {
            i.severity == Severity::Info && i.message.contains("social")
        }));
    }

    #[test]
    fn diagnostics_classify_malformed_value_as_error() {
        let raw = env(&[("PATREON_URL", "patreon-page")]);
        let report = resolve_with_diagnostics(&raw);
        assert!(report.has_errors());
        assert!(report.issues.iter().any(|i| {
            i.severity == Severity::Error && i.field == Some("PATREON_URL")
        }));
        // The configuration is still fully populated.
        assert!(report.config.social.patreon_url.is_none());
    }

    #[test]
    fn diagnostics_distinguish_giscus_states() {
        let report = resolve_with_diagnostics(&env(&[("GISCUS_ENABLED", "true")]));
        assert!(report.issues.iter().any(|i| {
            i.severity == Severity::Warning && i.message.contains("placeholders")
        }));

        let report = resolve_with_diagnostics(&RawEnv::new());
        assert!(report.issues.iter().any(|i| {
            i.severity == Severity::Info && i.message.contains("disabled and not configured")
        }));
    }

    #[test]
    fn config_source_dispatches_by_tag() {
        let config = ConfigSource::Raw(env(&[("SITE_TITLE", "Tagged")]))
            .into_config()
            .unwrap();
        assert_eq!(config.site.title, "Tagged");

        let validated = Configuration::default();
        let config = ConfigSource::Validated(validated.clone())
            .into_config()
            .unwrap();
        assert_eq!(config, validated);
    }

    #[test]
    fn resolution_is_idempotent() {
        let raw = env(&[
            ("SITE_URL", "https://example.com"),
            ("GISCUS_ENABLED", "true"),
        ]);
        assert_eq!(resolve(&raw).unwrap(), resolve(&raw).unwrap());
    }

    // =========================================================================
    // stock_env_template
    // =========================================================================

    #[test]
    fn stock_template_resolves_to_defaults() {
        let parsed = crate::envfile::parse(stock_env_template()).unwrap();
        let from_template = resolve(&parsed).unwrap();
        let from_empty = resolve(&RawEnv::new()).unwrap();
        assert_eq!(from_template, from_empty);
    }

    #[test]
    fn stock_template_mentions_every_key_group() {
        let template = stock_env_template();
        for key in [
            "SITE_URL",
            "GITHUB_URL",
            "GISCUS_REPO",
            "REPOSITORY_NAME",
            "NODE_ENV",
        ] {
            assert!(template.contains(key), "{key} missing from template");
        }
    }
}
