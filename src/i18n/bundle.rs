//! Typed localization bundle.
//!
//! Every struct rejects unknown keys and every field is required, so two
//! bundles that both parse are guaranteed to expose the same key set.

use serde::Deserialize;

/// Number of project entries every bundle must define.
pub const PROJECT_COUNT: usize = 3;

/// Complete set of localized strings for one language.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bundle {
    /// Navigation bar labels.
    pub navigation: Navigation,
    /// Hero block copy on the Home section.
    pub hero: Hero,
    /// Call-to-action labels.
    pub buttons: Buttons,
    /// Skills block headings.
    pub skills: Skills,
    /// Projects preview heading on the Home section.
    pub projects_section: SectionCopy,
    /// Portfolio section copy.
    pub portfolio: PortfolioCopy,
    /// Contact section heading.
    pub contact: SectionCopy,
    /// Contact form placeholders and status strings.
    pub contact_form: ContactFormCopy,
    /// Footer lines.
    pub footer: Footer,
    /// Overlay menu titles.
    pub menu: Menu,
    /// Key hint lines shown under the active section.
    pub hints: Hints,
    /// Localized project text, in bundle order (not display order).
    pub projects: [ProjectText; PROJECT_COUNT],
}

/// Navigation bar labels, one per section.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Navigation {
    /// Label for the Home section.
    pub home: String,
    /// Label for the Portfolio section.
    pub portfolio: String,
    /// Label for the Contact section.
    pub contact: String,
}

/// Hero block copy.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    /// Professional title under the name.
    pub title: String,
    /// Location line.
    pub location: String,
    /// Short biography paragraph.
    pub bio: String,
}

/// Call-to-action labels.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Buttons {
    pub download_cv: String,
    pub contact_me: String,
    pub view_all_projects: String,
}

/// Skills block headings. The Frontend/Backend headings are not localized.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    pub title: String,
    pub tools: String,
}

/// Title plus subtitle pair used by several sections.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionCopy {
    pub title: String,
    pub subtitle: String,
}

/// Portfolio section copy.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioCopy {
    pub title: String,
    pub subtitle: String,
    /// Heading above each project's tech tags.
    pub technologies: String,
}

/// Contact form placeholders, labels, and notification copy.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactFormCopy {
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub message_placeholder: String,
    pub submit_button: String,
    /// Submit label while a submission is in flight.
    pub sending: String,
    pub success_title: String,
    pub success_message: String,
    pub error_title: String,
    pub error_message: String,
    pub config_error_title: String,
    pub config_error_message: String,
    /// Hint shown when a required field is empty.
    pub field_required: String,
    /// Hint shown when the email field is malformed.
    pub invalid_email: String,
}

/// Footer lines.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    pub copyright: String,
    pub rights: String,
}

/// Overlay menu titles.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Menu {
    pub language: String,
}

/// Key hint lines.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hints {
    /// Shortcuts available everywhere.
    pub global: String,
    /// Home section actions.
    pub home: String,
    /// Contact section, form not focused.
    pub contact: String,
    /// Contact section, form focused.
    pub form: String,
}

/// Localized text of one project entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectText {
    pub title: String,
    pub description: String,
    pub role: String,
    /// Project category, e.g. "Fintech".
    #[serde(rename = "type")]
    pub kind: String,
}
