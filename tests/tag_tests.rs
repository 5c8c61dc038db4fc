//! Integration tests for the tag command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{postq_cmd, write_post};

#[test]
fn test_tag_filters_posts() {
    let temp = TempDir::new().unwrap();

    write_post(
        temp.path(),
        "a.md",
        "title = \"A\"\ndate = \"2024-01-01\"\ntags = [\"Go\", \"Web\"]",
        "Body.",
    );
    write_post(
        temp.path(),
        "b.md",
        "title = \"B\"\ndate = \"2023-01-01\"\ntags = [\"go\"]",
        "Body.",
    );
    write_post(
        temp.path(),
        "c.md",
        "title = \"C\"\ndate = \"2024-06-01\"\ntags = [\"rust\"]",
        "Body.",
    );

    postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains("A"))
        .stdout(predicate::str::contains("B"))
        .stdout(predicate::str::contains("C").not());
}

#[test]
fn test_tag_output_sorted_newest_first() {
    let temp = TempDir::new().unwrap();

    write_post(
        temp.path(),
        "old.md",
        "title = \"Old\"\ndate = \"2022-01-01\"\ntags = [\"rust\"]",
        "Body.",
    );
    write_post(
        temp.path(),
        "new.md",
        "title = \"New\"\ndate = \"2024-01-01\"\ntags = [\"rust\"]",
        "Body.",
    );

    let output = postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("rust")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("New"));
    assert!(lines[1].contains("Old"));
}

#[test]
fn test_tag_matches_after_slugification() {
    let temp = TempDir::new().unwrap();

    write_post(
        temp.path(),
        "post.md",
        "title = \"Post\"\ndate = \"2024-01-01\"\ntags = [\"Web Dev\"]",
        "Body.",
    );

    for query in ["web-dev", "Web Dev", "WEB_DEV"] {
        postq_cmd()
            .current_dir(temp.path())
            .arg("tag")
            .arg(query)
            .assert()
            .success()
            .stdout(predicate::str::contains("Post"));
    }
}

#[test]
fn test_tag_unknown_prints_empty_not_error() {
    let temp = TempDir::new().unwrap();

    write_post(
        temp.path(),
        "c.md",
        "title = \"C\"\ndate = \"2024-06-01\"\ntags = [\"rust\"]",
        "Body.",
    );

    postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}

#[test]
fn test_tag_invalid_query_fails_with_exit_code() {
    let temp = TempDir::new().unwrap();

    postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("???")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid tag"));
}

#[test]
fn test_tag_with_limit() {
    let temp = TempDir::new().unwrap();

    write_post(
        temp.path(),
        "a.md",
        "title = \"Newest\"\ndate = \"2024-03-01\"\ntags = [\"go\"]",
        "Body.",
    );
    write_post(
        temp.path(),
        "b.md",
        "title = \"Middle\"\ndate = \"2024-02-01\"\ntags = [\"go\"]",
        "Body.",
    );
    write_post(
        temp.path(),
        "c.md",
        "title = \"Oldest\"\ndate = \"2024-01-01\"\ntags = [\"go\"]",
        "Body.",
    );

    postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("go")
        .arg("--limit")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Newest"))
        .stdout(predicate::str::contains("Middle").not())
        .stdout(predicate::str::contains("Oldest").not());
}

#[test]
fn test_tag_hides_drafts_by_default() {
    let temp = TempDir::new().unwrap();

    write_post(
        temp.path(),
        "wip.md",
        "title = \"Wip\"\ndate = \"2024-01-01\"\ndraft = true\ntags = [\"go\"]",
        "Body.",
    );

    postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));

    postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("go")
        .arg("--drafts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wip"));
}

#[test]
fn test_tag_malformed_post_tags_do_not_match() {
    let temp = TempDir::new().unwrap();

    write_post(
        temp.path(),
        "odd.md",
        "title = \"Odd\"\ndate = \"2024-01-01\"\ntags = [\"   \", \"##\"]",
        "Body.",
    );
    write_post(
        temp.path(),
        "ok.md",
        "title = \"Ok\"\ndate = \"2024-01-01\"\ntags = [\"go\"]",
        "Body.",
    );

    let output = postq_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .arg("go")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Ok"));
}
