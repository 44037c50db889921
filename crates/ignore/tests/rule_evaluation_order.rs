//! Precedence: rule files nearer the candidate decide before broader
//! ancestors, and within one file the last matching line wins.

use std::fs;
use std::path::PathBuf;

use ignore::RuleIndex;

fn built(root: &std::path::Path) -> (RuleIndex, PathBuf) {
    let index = RuleIndex::build(root, [root.to_path_buf()]);
    let resolved = index.project_root().to_path_buf();
    (index, resolved)
}

#[test]
fn within_one_file_the_last_matching_line_wins() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join(".gitignore"),
        "notes.txt\n!notes.txt\nnotes.txt\n",
    )
    .expect("write");

    let (index, root) = built(temp.path());
    assert!(index.is_ignored(&root.join("notes.txt")));
}

#[test]
fn a_nested_rule_file_overrides_the_root_for_its_subtree() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    fs::write(root.join(".gitignore"), "!important.txt\n").expect("write");
    fs::create_dir(root.join("sub")).expect("dir");
    fs::write(root.join("sub/.gitignore"), "important.txt\n").expect("write");

    let (index, root) = built(root);
    assert!(index.is_ignored(&root.join("sub/important.txt")));
    assert!(!index.is_ignored(&root.join("important.txt")));
}

#[test]
fn the_nearest_file_with_a_match_decides_even_against_later_root_lines() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    fs::write(root.join(".gitignore"), "*.dat\n!sample.dat\n").expect("write");
    fs::create_dir(root.join("data")).expect("dir");
    fs::write(root.join("data/.gitignore"), "sample.dat\n").expect("write");

    let (index, root) = built(root);
    // `data/.gitignore` matches, so the root's negation is never reached.
    assert!(index.is_ignored(&root.join("data/sample.dat")));
    assert!(!index.is_ignored(&root.join("sample.dat")));
}

#[test]
fn an_unmatched_nested_file_defers_to_its_ancestors() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    fs::write(root.join(".gitignore"), "*.bak\n").expect("write");
    fs::create_dir(root.join("sub")).expect("dir");
    fs::write(root.join("sub/.gitignore"), "*.swp\n").expect("write");

    let (index, root) = built(root);
    assert!(index.is_ignored(&root.join("sub/old.bak")));
    assert!(index.is_ignored(&root.join("sub/edit.swp")));
    assert!(!index.is_ignored(&root.join("sub/main.rs")));
}

#[test]
fn three_levels_resolve_nearest_first() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    fs::write(root.join(".gitignore"), "*.txt\n").expect("write");
    fs::create_dir_all(root.join("a/b")).expect("dirs");
    fs::write(root.join("a/.gitignore"), "!keep.txt\n").expect("write");
    fs::write(root.join("a/b/.gitignore"), "keep.txt\n").expect("write");

    let (index, root) = built(root);
    assert!(index.is_ignored(&root.join("a/b/keep.txt")));
    assert!(!index.is_ignored(&root.join("a/keep.txt")));
    assert!(index.is_ignored(&root.join("a/other.txt")));
    assert!(index.is_ignored(&root.join("top.txt")));
}

#[test]
fn repeated_queries_with_shared_references_stay_stable() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".gitignore"), "*.tmp\n!pin.tmp\n").expect("write");

    let (index, root) = built(temp.path());
    let ignored = root.join("drop.tmp");
    let kept = root.join("pin.tmp");
    for _ in 0..8 {
        assert!(index.is_ignored(&ignored));
        assert!(!index.is_ignored(&kept));
    }
}
