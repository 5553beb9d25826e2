//! End-to-end tests: real repositories through the loader and renderer.

mod common;

use common::TestRepo;
use topo_order::git::GitRepository;
use topo_order::render::output::{OutputFormat, render_to};
use topo_order::{AppError, render_lines};

fn render(repo: &TestRepo) -> Vec<String> {
    let git = GitRepository::open(repo.path()).expect("Failed to open repository");
    let graph = git.load_graph().expect("Failed to load graph");
    render_lines(&graph)
        .expect("Failed to render")
        .iter()
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_fresh_repository_renders_nothing() {
    let repo = TestRepo::new();
    assert!(render(&repo).is_empty());
}

#[test]
fn test_linear_history() {
    let repo = TestRepo::new();
    let c1 = repo.commit("first", &[], 100);
    let c2 = repo.commit("second", &[c1], 200);
    let c3 = repo.commit("third", &[c2], 300);
    repo.branch("main", c3);

    assert_eq!(
        render(&repo),
        vec![format!("{c3} main"), c2.to_string(), c1.to_string()]
    );
}

#[test]
fn test_branch_point() {
    let repo = TestRepo::new();
    let p = repo.commit("base", &[], 100);
    let a = repo.commit("on a", &[p], 300);
    let b = repo.commit("on b", &[p], 200);
    repo.branch("a", a);
    repo.branch("feature/b", b);

    assert_eq!(
        render(&repo),
        vec![
            format!("{a} a"),
            format!("{p}="),
            String::new(),
            "=".to_string(),
            format!("{b} feature/b"),
            p.to_string(),
        ]
    );
}

#[test]
fn test_merge_commit() {
    let repo = TestRepo::new();
    let r = repo.commit("root", &[], 100);
    let x = repo.commit("x", &[r], 300);
    let y = repo.commit("y", &[r], 200);
    let m = repo.commit("merge y", &[x, y], 400);
    repo.branch("main", m);

    assert_eq!(
        render(&repo),
        vec![
            format!("{m} main"),
            x.to_string(),
            format!("{r}="),
            String::new(),
            format!("= {m}"),
            y.to_string(),
            r.to_string(),
        ]
    );
}

#[test]
fn test_several_branches_on_one_commit_are_sorted() {
    let repo = TestRepo::new();
    let c1 = repo.commit("first", &[], 100);
    let c2 = repo.commit("second", &[c1], 200);
    repo.branch("release", c2);
    repo.branch("main", c2);
    repo.branch("old", c1);

    assert_eq!(
        render(&repo),
        vec![format!("{c2} main release"), format!("{c1} old")]
    );
}

#[test]
fn test_commits_without_a_branch_are_not_rendered() {
    let repo = TestRepo::new();
    let c1 = repo.commit("first", &[], 100);
    let c2 = repo.commit("second", &[c1], 200);
    let _dangling = repo.commit("nobody points here", &[c2], 300);
    repo.branch("main", c2);

    assert_eq!(render(&repo), vec![format!("{c2} main"), c1.to_string()]);
}

#[test]
fn test_open_from_subdirectory() {
    let repo = TestRepo::new();
    let c1 = repo.commit("first", &[], 100);
    repo.branch("main", c1);

    let nested = repo.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let git = GitRepository::open(&nested).unwrap();
    let graph = git.load_graph().unwrap();
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get(&c1.to_string()).unwrap().branches, vec!["main"]);
}

#[test]
fn test_open_outside_repository_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    match GitRepository::open(dir.path()) {
        Err(AppError::RepoNotFound(path)) => assert!(path.contains(dir.path().to_str().unwrap())),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected RepoNotFound"),
    }
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let repo = TestRepo::new();
    let r = repo.commit("root", &[], 100);
    let a = repo.commit("a", &[r], 200);
    let b = repo.commit("b", &[r], 200);
    let m = repo.commit("merge", &[a, b], 300);
    let c = repo.commit("c", &[b], 250);
    repo.branch("main", m);
    repo.branch("topic", c);

    let run = || {
        let git = GitRepository::open(repo.path()).unwrap();
        let graph = git.load_graph().unwrap();
        let mut out = Vec::new();
        render_to(&graph, &mut out, OutputFormat::Text).unwrap();
        out
    };

    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}
