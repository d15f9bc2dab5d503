use super::education::EDUCATION;
use super::experience::EXPERIENCE;
use super::open_source::CONTRIBUTIONS;
use super::principles::PRINCIPLES;
use super::profile::PROFILE;
use super::projects::PROJECT_GROUPS;
use super::publications::PUBLICATIONS;
use super::skills::SKILLS;
use super::*;

fn outbound_links() -> Vec<&'static str> {
    let mut links = vec![PROFILE.github_url, PROFILE.repositories_url];
    links.extend(EDUCATION.iter().filter_map(|e| e.teaching.and_then(|t| t.playlist)));
    links.extend(EXPERIENCE.iter().filter_map(|r| r.link));
    for group in PROJECT_GROUPS {
        links.extend(group.projects.iter().filter_map(|p| p.repo));
        links.extend(group.projects.iter().filter_map(|p| p.video));
    }
    links.extend(PUBLICATIONS.iter().filter_map(|p| p.link));
    for c in CONTRIBUTIONS {
        links.push(c.repo);
        links.extend(c.package);
    }
    links
}

#[test]
fn outbound_links_are_https() {
    for link in outbound_links() {
        assert!(link.starts_with("https://"), "{link}");
    }
}

#[test]
fn tables_are_populated() {
    assert_eq!(EDUCATION.len(), 2);
    assert_eq!(EXPERIENCE.len(), 4);
    assert_eq!(PUBLICATIONS.len(), 2);
    assert_eq!(SKILLS.len(), 6);
    assert_eq!(PRINCIPLES.len(), 3);
    assert_eq!(CONTRIBUTIONS.len(), 1);
    assert_eq!(PROJECT_GROUPS.iter().map(|g| g.projects.len()).collect::<Vec<_>>(), [13, 3]);
}

#[test]
fn projects_have_optional_repo_and_video() {
    let all: Vec<_> = PROJECT_GROUPS.iter().flat_map(|g| g.projects.iter()).collect();
    assert!(all.iter().any(|p| p.repo.is_none() && p.video.is_none()));
    assert!(all.iter().any(|p| p.repo.is_some() && p.video.is_some()));
    assert!(all.iter().all(|p| !p.tags.is_empty()));
}

#[test]
fn only_first_degree_has_teaching() {
    assert!(EDUCATION[0].teaching.is_some());
    assert!(EDUCATION[1].teaching.is_none());
}

#[test]
fn email_is_plain_address() {
    assert!(PROFILE.email.contains('@'));
    assert!(!PROFILE.email.starts_with("mailto:"));
    assert_eq!(PROFILE.email_href, format!("mailto:{}", PROFILE.email));
}

#[test]
fn every_icon_has_a_glyph() {
    let icons = [
        Icon::BarChart,
        Icon::BookOpen,
        Icon::Brain,
        Icon::Briefcase,
        Icon::Code,
        Icon::Database,
        Icon::GitHub,
        Icon::GraduationCap,
        Icon::Mail,
        Icon::Package,
        Icon::Sparkles,
        Icon::TrendingUp,
    ];
    for icon in icons {
        assert!(!icon.glyph().is_empty(), "{icon:?}");
    }
}
