use super::*;

fn project(repo: Option<&'static str>, video: Option<&'static str>) -> Project {
    Project {
        title: "t",
        description: "d",
        tags: &["Rust"],
        icon: Icon::Brain,
        repo,
        video,
    }
}

#[test]
fn project_links_empty_without_links() {
    assert!(project_links(&project(None, None)).is_empty());
}

#[test]
fn project_links_repo_only() {
    assert_eq!(
        project_links(&project(Some("https://example.com/repo"), None)),
        vec![("View on GitHub", "https://example.com/repo")]
    );
}

#[test]
fn project_links_video_only() {
    assert_eq!(
        project_links(&project(None, Some("https://example.com/v"))),
        vec![("YouTube", "https://example.com/v")]
    );
}

#[test]
fn project_links_repo_before_video() {
    let links = project_links(&project(Some("https://r"), Some("https://v")));
    assert_eq!(links, vec![("View on GitHub", "https://r"), ("YouTube", "https://v")]);
}
