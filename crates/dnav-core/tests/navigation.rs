use std::fs;
use std::path::Path;

use dnav_core::{
    Command, DirectorySnapshot, DualPanelCoordinator, EntryKind, Event, PathStyle, Region, Side,
};
use tempfile::TempDir;

/// Builds:
///
/// ```text
/// root/
///   alpha/
///   beta/
///     deep/
///     note.md
///   gamma/
///   a.txt .. l.txt
/// ```
fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    for d in ["gamma", "alpha", "beta"] {
        fs::create_dir(root.join(d)).unwrap();
    }
    fs::create_dir(root.join("beta").join("deep")).unwrap();
    fs::write(root.join("beta").join("note.md"), "").unwrap();
    for c in 'a'..='l' {
        fs::write(root.join(format!("{c}.txt")), "").unwrap();
    }
    tmp
}

fn run(dual: DualPanelCoordinator, commands: &[Command]) -> (DualPanelCoordinator, Vec<Event>) {
    let mut events = Vec::new();
    let mut dual = dual;
    for &command in commands {
        let (next, event) = dual.dispatch(command);
        dual = next;
        events.extend(event);
    }
    (dual, events)
}

fn check_viewport(dual: &DualPanelCoordinator) {
    for side in [Side::Left, Side::Right] {
        let Some(panel) = dual.panel(side) else { continue };
        let len = panel.entries().len();
        let height = panel.viewport_height().max(1) as usize;
        if len == 0 {
            assert_eq!(panel.focus_index(), 0);
            continue;
        }
        assert!(panel.focus_index() < len);
        assert!(panel.top_index() <= panel.focus_index());
        assert!(panel.focus_index() < panel.top_index() + height);
    }
}

#[test]
fn listing_orders_directories_before_files() {
    let tmp = fixture();
    let snapshot = DirectorySnapshot::load(tmp.path());

    let kinds: Vec<EntryKind> = snapshot.entries().iter().map(|e| e.kind()).collect();
    assert_eq!(kinds.len(), 1 + 3 + 12);
    assert_eq!(kinds[0], EntryKind::ParentMarker);
    assert!(kinds[1..4].iter().all(|k| *k == EntryKind::Directory));
    assert!(kinds[4..].iter().all(|k| *k == EntryKind::File));

    let names: Vec<&str> = snapshot.entries()[1..4].iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn drill_down_and_back_up_restores_focus() {
    let tmp = fixture();
    let dual = DualPanelCoordinator::with_dirs(
        Region::new(60, 4),
        tmp.path(),
        tmp.path(),
        PathStyle::native(),
    );
    let start = dual.active_panel().unwrap().current_dir().to_path_buf();

    // ".." -> alpha -> beta, then enter it
    let (dual, events) = run(
        dual,
        &[Command::FocusDown, Command::FocusDown, Command::Activate],
    );
    let panel = dual.active_panel().unwrap();
    assert!(panel.current_dir().ends_with("beta"));
    assert_eq!(events.len(), 1);

    // enter deep, then climb twice
    let (dual, _) = run(dual, &[Command::FocusDown, Command::Activate]);
    assert!(dual.active_panel().unwrap().current_dir().ends_with("deep"));

    let (dual, _) = run(dual, &[Command::GoToParent]);
    let panel = dual.active_panel().unwrap();
    assert!(panel.current_dir().ends_with("beta"));
    assert_eq!(panel.focused_entry().unwrap().name(), "deep");

    let (dual, _) = run(dual, &[Command::GoToParent]);
    let panel = dual.active_panel().unwrap();
    assert_eq!(panel.current_dir(), start);
    assert_eq!(panel.focused_entry().unwrap().name(), "beta");
    check_viewport(&dual);
}

#[test]
fn long_command_sequences_keep_focus_visible() {
    let tmp = fixture();
    let dual = DualPanelCoordinator::with_dirs(
        Region::new(60, 5),
        tmp.path(),
        tmp.path(),
        PathStyle::native(),
    );

    let script = [
        Command::PageDown,
        Command::PageDown,
        Command::FocusDown,
        Command::FocusLast,
        Command::FocusUp,
        Command::PageUp,
        Command::SwapActivePanel,
        Command::FocusLast,
        Command::PageUp,
        Command::FocusFirst,
        Command::FocusUp,
        Command::SwapActivePanel,
        Command::Refresh,
    ];
    let mut dual = dual;
    for command in script {
        dual = dual.dispatch(command).0;
        check_viewport(&dual);
    }
    let dual = dual.resize(Region::new(60, 2));
    check_viewport(&dual);
}

#[test]
fn created_directory_appears_after_reload() {
    let tmp = fixture();
    let dual = DualPanelCoordinator::with_dirs(
        Region::new(60, 10),
        tmp.path(),
        tmp.path(),
        PathStyle::native(),
    );

    let (dual, path) = dual.create_directory("delta").unwrap();
    assert!(Path::new(&path).is_dir());

    let panel = dual.active_panel().unwrap();
    let dirs: Vec<&str> = panel
        .entries()
        .iter()
        .filter(|e| e.kind() == EntryKind::Directory)
        .map(|e| e.name())
        .collect();
    assert_eq!(dirs, vec!["alpha", "beta", "delta", "gamma"]);
    assert_eq!(panel.focus_index(), 0);
}

#[test]
fn missing_start_directory_is_not_fatal() {
    let tmp = fixture();
    let missing = tmp.path().join("not-here");
    let dual = DualPanelCoordinator::with_dirs(
        Region::new(60, 10),
        tmp.path(),
        &missing,
        PathStyle::native(),
    );

    let right = dual.panel(Side::Right).unwrap();
    assert!(right.snapshot().is_degraded());
    assert_eq!(right.entries().len(), 1);

    // Enter on the error row does nothing; going up recovers.
    let (dual, event) = dual.dispatch(Command::Activate);
    assert_eq!(event, None);
    let (dual, _) = dual.dispatch(Command::GoToParent);
    let right = dual.panel(Side::Right).unwrap();
    assert!(!right.snapshot().is_degraded());
    assert_eq!(right.entries().len(), 16);
}
