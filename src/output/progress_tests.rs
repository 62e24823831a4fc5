use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = ScanProgress::new(100, true);
    progress.inc("a.py");
    progress.inc("b.py");
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn visible_bar_tracks_position() {
    let progress = ScanProgress::new_with_visibility(3, false, true);

    for name in ["a.py", "b.py", "c.py"] {
        progress.inc(name);
    }

    assert_eq!(progress.position(), 3);
    progress.finish();
}

#[test]
fn clones_share_state() {
    let progress = ScanProgress::new(10, true);
    let cloned = progress.clone();

    progress.inc("a.py");
    cloned.inc("b.py");

    assert_eq!(progress.position(), 2);
}
