use std::thread;
use std::time::Duration;

use termdialog::ui::{
    DialogEvent, EventSource, Key, ProgressConfig, ProgressLine, ProgressLineKind, ProgressView,
    ScriptedEvents,
};
use termdialog::{DialogConfig, DialogError, Result, Session};

/// Presses `key` every few milliseconds, forever.
struct Repeating {
    key: Key,
}

impl EventSource for Repeating {
    fn size(&self) -> Result<(u16, u16)> {
        Ok((80, 30))
    }

    fn poll_event(&mut self, _timeout: Duration) -> Result<Option<DialogEvent>> {
        thread::sleep(Duration::from_millis(2));
        Ok(Some(DialogEvent::Key(self.key)))
    }
}

fn session() -> Session {
    Session::with_writer(DialogConfig::default(), Box::new(std::io::sink()))
}

fn idle() -> ScriptedEvents {
    ScriptedEvents::new(80, 30)
}

#[test]
fn lines_arrive_in_producer_order() {
    let session = session();
    let config = ProgressConfig::new("Copying").with_capacity(8);
    let view = ProgressView::spawn(&session, config, Repeating { key: Key::Char('q') }).unwrap();

    let expected: Vec<ProgressLine> = (0..250)
        .map(|i| ProgressLine::new(ProgressLineKind::Status, format!("file {i}")))
        .collect();
    for line in &expected {
        view.add_line(line.kind, line.message.clone()).unwrap();
    }

    let summary = view.done().unwrap();
    assert!(summary.completed);
    assert_eq!(summary.lines, expected);
}

#[test]
fn dismissal_keeps_a_prefix_of_the_stream() {
    let session = session();
    let config = ProgressConfig::new("Copying").with_capacity(8);
    let view = ProgressView::spawn(&session, config, idle()).unwrap();

    let expected: Vec<ProgressLine> = (0..50)
        .map(|i| ProgressLine::new(ProgressLineKind::Text, format!("chunk {i}")))
        .collect();
    for line in &expected {
        view.add_line(line.kind, line.message.clone()).unwrap();
    }

    let summary = view.dismiss().unwrap();
    assert!(!summary.completed);
    assert_eq!(summary.lines, expected[..summary.lines.len()].to_vec());
}

#[test]
fn quit_key_only_dismisses_after_completion() {
    let session = session();
    let view = ProgressView::spawn(
        &session,
        ProgressConfig::new("Installing"),
        Repeating { key: Key::Char('q') },
    )
    .unwrap();

    view.add_info("start").unwrap();
    thread::sleep(Duration::from_millis(30));
    view.add_success("done").unwrap();
    let summary = view.done().unwrap();

    assert!(summary.completed);
    assert_eq!(
        summary.lines,
        vec![
            ProgressLine::new(ProgressLineKind::Info, "start"),
            ProgressLine::new(ProgressLineKind::Success, "done"),
        ]
    );
}

#[test]
fn dismiss_ends_a_stream_that_never_completes() {
    let session = session();
    let view = ProgressView::spawn(&session, ProgressConfig::new("Waiting"), idle()).unwrap();
    view.add_text("still working").unwrap();
    let summary = view.dismiss().unwrap();
    assert!(!summary.completed);
}

#[test]
fn dismiss_wins_over_keys_and_queued_lines() {
    let session = session();
    let view = ProgressView::spawn(
        &session,
        ProgressConfig::new("Busy"),
        Repeating { key: Key::Down },
    )
    .unwrap();
    for i in 0..20 {
        view.add_status(format!("step {i}")).unwrap();
    }
    let summary = view.dismiss().unwrap();
    assert!(!summary.completed);
    assert!(summary.lines.len() <= 20);
}

#[test]
fn render_loop_failure_is_returned_by_done() {
    let session = session();
    struct Closed;
    impl EventSource for Closed {
        fn size(&self) -> Result<(u16, u16)> {
            Ok((80, 30))
        }
        fn poll_event(&mut self, _timeout: Duration) -> Result<Option<DialogEvent>> {
            Err(DialogError::InputClosed)
        }
    }

    let view = ProgressView::spawn(&session, ProgressConfig::new("Broken"), Closed).unwrap();
    let mut closed = false;
    for _ in 0..200 {
        if let Err(e) = view.add_info("late") {
            assert!(matches!(e, DialogError::StreamClosed));
            closed = true;
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    assert!(closed);
    assert!(matches!(view.done(), Err(DialogError::InputClosed)));
}

#[test]
fn dropping_an_unfinished_view_stops_the_loop() {
    let session = session();
    let view = ProgressView::spawn(&session, ProgressConfig::new("Dropped"), idle()).unwrap();
    view.add_info("partial").unwrap();
    drop(view);
    assert!(!session.in_session());
}
