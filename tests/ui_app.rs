use std::cell::{Cell, RefCell};
use std::path::Path;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use git2::{IndexAddOption, Repository, Signature};
use proptest::prelude::*;
use quickstage::core::{
    classify, Classification, DiffTarget, GitBackend, GitCli, IndexAction, IndexOp, RelPath,
    RepoError,
};
use quickstage::ui::{handle_input, App, Mode};
use tempfile::TempDir;

const FILE_ALPHA: &str = "alpha.txt";
const FILE_RUST: &str = "src/lib.rs";
const FILE_NEW: &str = "docs/new.md";

/// Records every call; fails index actions while `fail` is set.
#[derive(Default)]
struct FakeGit {
    applied: RefCell<Vec<IndexAction>>,
    diffs: RefCell<Vec<(RelPath, DiffTarget)>>,
    fail: Cell<bool>,
    diff_text: String,
}

impl FakeGit {
    fn with_diff(text: &str) -> Self {
        Self {
            diff_text: text.to_string(),
            ..Default::default()
        }
    }
}

impl GitBackend for FakeGit {
    fn apply(&self, action: &IndexAction) -> Result<(), RepoError> {
        if self.fail.get() {
            return Err(RepoError::GitError("index.lock exists".to_string()));
        }
        self.applied.borrow_mut().push(action.clone());
        Ok(())
    }

    fn diff(&self, path: &RelPath, target: DiffTarget) -> Result<String, RepoError> {
        self.diffs.borrow_mut().push((path.clone(), target));
        Ok(self.diff_text.clone())
    }
}

fn sample_files() -> Vec<quickstage::core::FileEntry> {
    vec![
        classify("M ", RelPath::new("staged.rs")),
        classify(" M", RelPath::new("modified.rs")),
        classify("??", RelPath::new("untracked.txt")),
        classify("AM", RelPath::new("added.rs")),
    ]
}

fn fake_app() -> App<FakeGit> {
    App::new(sample_files(), FakeGit::default())
}

fn numbered_diff(n: usize) -> String {
    (0..n)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press<G: GitBackend>(app: &mut App<G>, code: KeyCode) {
    handle_input(app, key(code));
}

#[test]
fn starts_browsing_at_first_file() {
    let app = fake_app();
    assert_eq!(app.cursor, 0);
    assert_eq!(app.mode, Mode::Browsing);
    assert!(!app.should_quit);
    assert!(app.ui.dirty);
}

#[test]
fn cursor_wraps_both_ways() {
    let mut app = fake_app();
    app.move_up();
    assert_eq!(app.cursor, 3);
    app.move_down();
    assert_eq!(app.cursor, 0);
}

#[test]
fn toggle_stages_and_unstages() {
    let mut app = fake_app();

    // staged.rs: Staged -> Unstaged via restore
    app.toggle_selected();
    assert_eq!(app.files[0].classification, Classification::Unstaged);

    // back to Staged via add
    app.toggle_selected();
    assert_eq!(app.files[0].classification, Classification::Staged);

    let ops: Vec<IndexOp> = app.git().applied.borrow().iter().map(|a| a.op).collect();
    assert_eq!(ops, vec![IndexOp::RestoreStaged, IndexOp::Add]);
}

#[test]
fn toggling_partial_file_stages_it() {
    let mut app = fake_app();
    app.cursor = 3;
    app.toggle_selected();
    assert_eq!(app.files[3].classification, Classification::Staged);

    // Newly added file leaves the index with rm --cached.
    app.toggle_selected();
    assert_eq!(app.files[3].classification, Classification::Unstaged);
    let last = app.git().applied.borrow().last().cloned();
    assert_eq!(
        last,
        Some(IndexAction::new(IndexOp::RemoveCached, RelPath::new("added.rs")))
    );
}

#[test]
fn failed_toggle_keeps_state_and_reports() {
    let mut app = fake_app();
    app.git().fail.set(true);
    app.cursor = 1;
    app.toggle_selected();

    assert_eq!(app.files[1].classification, Classification::Unstaged);
    assert_eq!(
        app.ui.error.as_deref(),
        Some("Failed to stage modified.rs: git command failed: index.lock exists")
    );
}

#[test]
fn next_key_clears_error() {
    let mut app = fake_app();
    app.git().fail.set(true);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.ui.error.is_some());

    press(&mut app, KeyCode::Down);
    assert!(app.ui.error.is_none());
}

#[test]
fn toggle_ignored_while_viewing_diff() {
    let mut app = App::new(sample_files(), FakeGit::with_diff("diff"));
    app.toggle_diff_mode();
    app.toggle_selected();
    assert_eq!(app.files[0].classification, Classification::Staged);
    assert!(app.git().applied.borrow().is_empty());
}

#[test]
fn diff_mode_fetches_diff_for_classification() {
    let mut app = App::new(sample_files(), FakeGit::with_diff("a\nb\n"));
    app.toggle_diff_mode();
    assert_eq!(app.mode, Mode::ViewingDiff);
    // trailing newline yields an extra empty line
    assert_eq!(app.viewer.lines, vec!["a", "b", ""]);

    // three lines fit the viewport, so Down moves on to the next file
    app.move_down();
    assert_eq!(app.cursor, 1);
    app.cursor = 3;
    app.refresh_diff();

    let diffs = app.git().diffs.borrow();
    assert_eq!(diffs[0], (RelPath::new("staged.rs"), DiffTarget::Staged));
    assert_eq!(diffs[1], (RelPath::new("modified.rs"), DiffTarget::Worktree));
    assert_eq!(diffs[2], (RelPath::new("added.rs"), DiffTarget::WorktreeVsHead));
}

#[test]
fn leaving_diff_mode_returns_to_list() {
    let mut app = App::new(sample_files(), FakeGit::with_diff("x"));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::ViewingDiff);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::Browsing);
    assert_eq!(app.viewer.scroll, 0);
}

#[test]
fn page_keys_move_half_a_viewport() {
    let mut app = App::new(sample_files(), FakeGit::with_diff(&numbered_diff(100)));
    assert_eq!(app.viewer.viewport_height, 20);
    app.toggle_diff_mode();

    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.viewer.scroll, 10);
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.viewer.scroll, 20);
    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.viewer.scroll, 10);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.viewer.scroll, 80);
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.viewer.scroll, 80);

    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.viewer.scroll, 0);
    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.viewer.scroll, 0);
}

#[test]
fn arrows_scroll_then_change_file_at_edges() {
    let mut app = App::new(sample_files(), FakeGit::with_diff(&numbered_diff(22)));
    app.toggle_diff_mode();

    press(&mut app, KeyCode::Down);
    assert_eq!((app.cursor, app.viewer.scroll), (0, 1));
    press(&mut app, KeyCode::Down);
    assert_eq!((app.cursor, app.viewer.scroll), (0, 2));

    // at max_scroll (22 - 20), Down moves to the next file and resets scroll
    press(&mut app, KeyCode::Down);
    assert_eq!((app.cursor, app.viewer.scroll), (1, 0));
    assert_eq!(app.git().diffs.borrow().len(), 2);

    // at the top, Up moves back
    press(&mut app, KeyCode::Up);
    assert_eq!((app.cursor, app.viewer.scroll), (0, 0));
}

#[test]
fn scroll_keys_are_ignored_while_browsing() {
    let mut app = fake_app();
    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.viewer.scroll, 0);
    assert_eq!(app.cursor, 0);
}

#[test]
fn resize_sets_viewport_and_clamps_scroll() {
    let mut app = App::new(sample_files(), FakeGit::with_diff(&numbered_diff(50)));
    app.toggle_diff_mode();
    app.scroll_to_bottom();
    assert_eq!(app.viewer.scroll, 30);

    // 40 rows - 4 files - 1 footer
    handle_input(&mut app, Event::Resize(80, 40));
    assert_eq!(app.viewer.viewport_height, 35);
    assert_eq!(app.viewer.scroll, 15);

    // never below one line
    app.resize(3);
    assert_eq!(app.viewer.viewport_height, 1);
}

#[test]
fn quit_keys() {
    let mut app = fake_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = fake_app();
    handle_input(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    );
    assert!(app.should_quit);
}

#[test]
fn key_release_is_ignored() {
    let mut app = fake_app();
    let release = KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Release);
    assert!(!handle_input(&mut app, Event::Key(release)));
    assert_eq!(app.cursor, 0);
}

#[test]
fn unbound_key_is_not_handled() {
    let mut app = fake_app();
    assert!(!handle_input(&mut app, key(KeyCode::Char('x'))));
    assert!(handle_input(&mut app, key(KeyCode::Down)));
}

#[test]
fn modified_letter_keys_are_unbound() {
    let mut app = App::new(sample_files(), FakeGit::with_diff(&numbered_diff(100)));
    let chord = |code, modifiers| Event::Key(KeyEvent::new(code, modifiers));

    assert!(!handle_input(&mut app, chord(KeyCode::Char('d'), KeyModifiers::CONTROL)));
    assert_eq!(app.mode, Mode::Browsing);
    assert!(!handle_input(&mut app, chord(KeyCode::Char(' '), KeyModifiers::ALT)));
    assert!(!handle_input(&mut app, chord(KeyCode::Char('q'), KeyModifiers::ALT)));
    assert!(app.git().applied.borrow().is_empty());
    assert!(!app.should_quit);

    // Shift is how `G` arrives on most terminals.
    press(&mut app, KeyCode::Char('d'));
    assert!(handle_input(&mut app, chord(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    assert_eq!(app.viewer.scroll, 80);
    assert!(!handle_input(&mut app, chord(KeyCode::Char('g'), KeyModifiers::ALT)));
    assert_eq!(app.viewer.scroll, 80);
}

proptest! {
    #[test]
    fn n_downs_return_to_start(n in 1usize..20, start_offset in 0usize..20) {
        let files = (0..n).map(|i| classify("??", RelPath::new(format!("f{i}")))).collect();
        let mut app = App::new(files, FakeGit::default());
        app.cursor = start_offset % n;
        let start = app.cursor;
        for _ in 0..n {
            app.select_next();
        }
        prop_assert_eq!(app.cursor, start);
        for _ in 0..n {
            app.select_prev();
        }
        prop_assert_eq!(app.cursor, start);
    }

    #[test]
    fn scroll_stays_in_bounds(
        lines in 0usize..120,
        height in 0u16..80,
        keys in prop::collection::vec(0u8..6, 0..40),
    ) {
        let mut app = App::new(sample_files(), FakeGit::with_diff(&numbered_diff(lines)));
        app.resize(height);
        app.toggle_diff_mode();
        for k in keys {
            let code = match k {
                0 => KeyCode::Down,
                1 => KeyCode::Up,
                2 => KeyCode::PageDown,
                3 => KeyCode::PageUp,
                4 => KeyCode::Char('g'),
                _ => KeyCode::Char('G'),
            };
            press(&mut app, code);
            prop_assert!(app.viewer.scroll <= app.max_scroll());
            prop_assert!(app.viewer.viewport_height >= 1);
        }
    }
}

// Real repository through the CLI backend.

struct RepoHarness {
    dir: TempDir,
}

impl RepoHarness {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path());
        Self { dir }
    }

    fn app(&self) -> App {
        let (repo, files) = quickstage::core::load(self.dir.path()).unwrap();
        App::new(files, GitCli::new(repo))
    }

    fn status(&self) -> Vec<(String, Classification)> {
        self.app()
            .files
            .iter()
            .map(|f| (f.name.as_str().to_string(), f.classification))
            .collect()
    }
}

fn init_repo(path: &Path) {
    let repo = Repository::init(path).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
        config.set_str("user.name", "Test").unwrap();
    }

    std::fs::create_dir_all(path.join("src")).unwrap();
    std::fs::create_dir_all(path.join("docs")).unwrap();

    std::fs::write(path.join(FILE_ALPHA), "alpha line one\nalpha line two\n").unwrap();
    std::fs::write(path.join(FILE_RUST), "pub fn meaning() -> i32 {\n    41\n}\n").unwrap();

    let mut index = repo.index().unwrap();
    index
        .add_all(["."], IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();

    // alpha: unstaged edit; lib.rs: staged edit; new.md: untracked
    std::fs::write(path.join(FILE_ALPHA), "alpha line one\nchanged line\n").unwrap();
    std::fs::write(path.join(FILE_RUST), "pub fn meaning() -> i32 {\n    42\n}\n").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(FILE_RUST)).unwrap();
    index.write().unwrap();
    std::fs::write(path.join(FILE_NEW), "# New\n").unwrap();
}

fn select(app: &mut App, name: &str) {
    app.cursor = app
        .files
        .iter()
        .position(|f| f.name.as_str() == name)
        .unwrap();
}

#[test]
fn repo_starts_with_expected_classifications() {
    let harness = RepoHarness::new();
    let mut status = harness.status();
    status.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        status,
        vec![
            (FILE_ALPHA.to_string(), Classification::Unstaged),
            ("docs/".to_string(), Classification::Unstaged),
            (FILE_RUST.to_string(), Classification::Staged),
        ]
    );
}

#[test]
fn toggles_reach_the_real_index() {
    let harness = RepoHarness::new();
    let mut app = harness.app();

    select(&mut app, FILE_ALPHA);
    app.toggle_selected();
    assert!(app.ui.error.is_none(), "{:?}", app.ui.error);
    select(&mut app, FILE_RUST);
    app.toggle_selected();
    assert!(app.ui.error.is_none(), "{:?}", app.ui.error);

    let reloaded = harness.status();
    assert!(reloaded.contains(&(FILE_ALPHA.to_string(), Classification::Staged)));
    assert!(reloaded.contains(&(FILE_RUST.to_string(), Classification::Unstaged)));
}

#[test]
fn untracked_directory_stages_and_unstages() {
    let harness = RepoHarness::new();
    let mut app = harness.app();

    select(&mut app, "docs/");
    app.toggle_selected();
    assert_eq!(app.selected_file().map(|f| f.classification), Some(Classification::Staged));
    assert!(harness
        .status()
        .contains(&(FILE_NEW.to_string(), Classification::Staged)));

    // A fresh session sees the added file and can take it back out.
    let mut app = harness.app();
    select(&mut app, FILE_NEW);
    app.toggle_selected();
    assert!(app.ui.error.is_none(), "{:?}", app.ui.error);
    assert!(harness
        .status()
        .contains(&("docs/".to_string(), Classification::Unstaged)));
}

#[test]
fn diff_view_shows_real_diff() {
    let harness = RepoHarness::new();
    let mut app = harness.app();
    select(&mut app, FILE_RUST);
    app.toggle_diff_mode();

    assert!(app.viewer.lines.iter().any(|l| l == "-    41"));
    assert!(app.viewer.lines.iter().any(|l| l == "+    42"));
}
