//! Static portfolio content.
//!
//! DESIGN
//! ======
//! Content is inert data compiled into the binary. Components render these
//! tables as-is; nothing here is mutated or validated at runtime.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod education;
pub mod experience;
pub mod open_source;
pub mod principles;
pub mod profile;
pub mod projects;
pub mod publications;
pub mod skills;

/// Decorative glyph shown next to a card or heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    BarChart,
    BookOpen,
    Brain,
    Briefcase,
    Code,
    Database,
    GitHub,
    GraduationCap,
    Mail,
    Package,
    Sparkles,
    TrendingUp,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::BarChart => "\u{1F4CA}",
            Self::BookOpen => "\u{1F4D6}",
            Self::Brain => "\u{1F9E0}",
            Self::Briefcase => "\u{1F4BC}",
            Self::Code => "</>",
            Self::Database => "\u{1F5C4}",
            Self::GitHub => "\u{2325}",
            Self::GraduationCap => "\u{1F393}",
            Self::Mail => "\u{2709}",
            Self::Package => "\u{1F4E6}",
            Self::Sparkles => "\u{2728}",
            Self::TrendingUp => "\u{1F4C8}",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub photo: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub quote: &'static str,
    pub quote_author: &'static str,
    pub about_closing: &'static str,
    pub email: &'static str,
    pub email_href: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub repositories_url: &'static str,
    pub footer: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Teaching {
    pub title: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
    pub playlist: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub degree: &'static str,
    pub period: &'static str,
    pub institution: &'static str,
    pub grade: &'static str,
    pub location: &'static str,
    pub courses: &'static str,
    pub teaching: Option<Teaching>,
}

#[derive(Clone, Copy, Debug)]
pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: Icon,
    pub repo: Option<&'static str>,
    pub video: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectGroup {
    pub title: &'static str,
    pub icon: Icon,
    pub projects: &'static [Project],
}

#[derive(Clone, Copy, Debug)]
pub struct Publication {
    pub title: &'static str,
    pub venue: &'static str,
    pub publisher: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Contribution {
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub repo: &'static str,
    pub package: Option<&'static str>,
}
