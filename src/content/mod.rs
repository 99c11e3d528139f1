//! Static portfolio content: profile facts, skill lists, and project records.
//!
//! Nothing here is localized except through the [`Bundle`] passed to
//! [`projects`]. Skill names and tech tags are the same in every language.

use crate::i18n::{Bundle, PROJECT_COUNT};

/// Owner's display name.
pub const NAME: &str = "José Angel López";
/// Contact email shown on the Contact section.
pub const EMAIL: &str = "Ljoseangel265@gmail.com";
/// Contact phone shown on the Contact section.
pub const PHONE: &str = "640879374";
/// GitHub profile.
pub const GITHUB_URL: &str = "https://github.com/JoseAngel222";
/// LinkedIn profile.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jos%C3%A9-angel-l%C3%B3pez-morales-61b768260/?trk=opento_sprofile_pfeditor";
/// File name of the downloadable CV.
pub const CV_FILE_NAME: &str = "JoseAngel_CV.pdf";

/// Frontend skills, display order.
pub const FRONTEND_SKILLS: &[&str] = &[
    "JavaScript",
    "React",
    "HTML5",
    "CSS3",
    "Thymeleaf",
    "Bootstrap",
];
/// Backend skills, display order.
pub const BACKEND_SKILLS: &[&str] = &["Java", "Spring Boot", "C#", ".Net", "SQL", "REST APIs"];
/// Tooling and practices, display order.
pub const TOOL_SKILLS: &[&str] = &["Docker", "Azure DevOps", "Git", "JUnit5", "Scrum", "i18n"];

/// Heading of the frontend skills column. Same in every language.
pub const FRONTEND_HEADING: &str = "Frontend";
/// Heading of the backend skills column. Same in every language.
pub const BACKEND_HEADING: &str = "Backend";

/// Display order of projects as `(bundle index, tech tags)`.
const PROJECT_LAYOUT: [(usize, &[&str]); PROJECT_COUNT] = [
    (1, &["Java", "Thymeleaf", "Bootstrap", "i18n", "JavaScript"]),
    (
        2,
        &[
            "Spring Boot",
            "Java",
            "JUnit5",
            "Scrum",
            "JPA",
            "APIRest",
            "PostgreSQL",
            "React(Vite)",
            "JWT",
        ],
    ),
    (0, &["Spring Boot", "Java", "JUnit5", "Scrum"]),
];

/// One project as displayed: localized text plus language-invariant tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord<'a> {
    /// Localized title.
    pub title: &'a str,
    /// Localized description.
    pub description: &'a str,
    /// Localized role held on the project.
    pub role: &'a str,
    /// Localized project category.
    pub kind: &'a str,
    /// Technologies used. Never localized.
    pub tech: &'static [&'static str],
}

/// What: Compose the project records for the active language.
///
/// Inputs:
/// - `bundle`: Localization bundle of the active language
///
/// Output:
/// - Exactly three records in canonical display order (bundle entries 1, 2, 0)
///
/// Details:
/// - Pure; the same bundle always yields the same records
#[must_use]
pub fn projects(bundle: &Bundle) -> [ProjectRecord<'_>; PROJECT_COUNT] {
    PROJECT_LAYOUT.map(|(idx, tech)| {
        let text = &bundle.projects[idx];
        ProjectRecord {
            title: &text.title,
            description: &text.description,
            role: &text.role,
            kind: &text.kind,
            tech,
        }
    })
}
