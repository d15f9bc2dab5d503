//! Hygiene: enforces coding standards at test time.
//!
//! Scans the portfolio client source tree for antipatterns. Each pattern has
//! a budget; the budget only ever goes down.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    note: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, note: "panics in the hydrated page" },
    Budget { pattern: ".expect(", max: 0, note: "panics in the hydrated page" },
    Budget { pattern: "panic!(", max: 0, note: "panics in the hydrated page" },
    Budget { pattern: "unreachable!(", max: 0, note: "panics in the hydrated page" },
    Budget { pattern: "todo!(", max: 0, note: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, note: "unfinished stub" },
    // Browser-only arguments discarded by the non-hydrate adapter builds.
    Budget { pattern: "let _ =", max: 4, note: "silent discard" },
    Budget { pattern: ".ok()", max: 0, note: "error dropped without inspection" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, note: "dead code kept alive" },
];

/// Production `.rs` files under `src/`, skipping `_test.rs` siblings.
fn source_files() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn hits(files: &[(PathBuf, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect()
}

#[test]
fn scans_the_source_tree() {
    let files = source_files();
    assert!(
        files.iter().any(|(path, _)| path.ends_with("lib.rs")),
        "hygiene must run from the client crate root"
    );
}

#[test]
fn antipattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` ({}) found {count}, max {}\n{listing}",
                budget.pattern, budget.note, budget.max
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
