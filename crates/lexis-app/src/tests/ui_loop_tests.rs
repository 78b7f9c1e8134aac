use std::time::Duration;

use lexis_types::{AppEvent, CurrentEntry, LoadState, Notice, SessionView};
use tokio::io::BufReader;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::ui::ui_loop;

fn pending_view() -> SessionView {
    SessionView {
        load_state: LoadState::Loaded,
        current: Some(CurrentEntry {
            index: 0,
            word: "λόγος".into(),
            header: "Λ".into(),
            reopened: false,
        }),
        buffer: String::new(),
        buffer_revision: 0,
        completed: vec![],
        completed_count: 0,
        total: 1,
    }
}

#[tokio::test]
async fn scripted_input_drives_backend_events() {
    let (app_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (ui_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();

    app_tx.send(AppEvent::Render(pending_view())).await.unwrap();
    app_tx
        .send(AppEvent::Notice(Notice::info("hello")))
        .await
        .unwrap();
    app_tx.send(AppEvent::BackendReady).await.unwrap();

    let input = BufReader::new(&b"word/reason\n.\n:quit\n"[..]);
    let mut output = Vec::new();

    timeout(
        Duration::from_secs(2),
        ui_loop(
            input,
            &mut output,
            false,
            app_rx,
            ui_tx,
            CancellationToken::new(),
        ),
    )
    .await
    .expect("ui loop timed out")
    .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Current pending word: λόγος [Λ]"));
    assert!(text.contains("[info] hello"));

    let mut sent = Vec::new();
    while let Ok(Some(event)) = ui_rx.try_recv() {
        sent.push(event);
    }
    assert_eq!(
        sent,
        vec![
            AppEvent::UpdateBuffer("word/reason".into()),
            AppEvent::SubmitEdit("word/reason".into()),
            AppEvent::Quit,
        ]
    );
}

#[tokio::test]
async fn closed_input_sends_quit() {
    let (_app_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (ui_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();

    ui_loop(
        BufReader::new(&b""[..]),
        Vec::new(),
        false,
        app_rx,
        ui_tx,
        CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(ui_rx.try_recv().unwrap(), Some(AppEvent::Quit));
}

#[tokio::test]
async fn cancellation_stops_the_form() {
    let (_app_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (ui_tx, _ui_rx) = kanal::unbounded_async::<AppEvent>();
    let cancel = CancellationToken::new();
    cancel.cancel();

    // input never ends
    let (_writer, reader) = tokio::io::duplex(64);

    let result = timeout(
        Duration::from_secs(2),
        ui_loop(BufReader::new(reader), Vec::new(), false, app_rx, ui_tx, cancel),
    )
    .await;

    assert!(matches!(result, Ok(Ok(()))));
}

#[tokio::test]
async fn reopened_render_resyncs_buffer_and_keeps_later_lines() {
    let (app_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (ui_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();

    let mut reopened = pending_view();
    reopened.buffer = "old".into();
    reopened.buffer_revision = 1;
    app_tx.send(AppEvent::Render(reopened)).await.unwrap();
    // same revision: the draft stays as typed
    app_tx.send(AppEvent::Render(pending_view())).await.unwrap();

    let input = BufReader::new(&b"more\n:quit\n"[..]);

    timeout(
        Duration::from_secs(2),
        ui_loop(
            input,
            Vec::new(),
            false,
            app_rx,
            ui_tx,
            CancellationToken::new(),
        ),
    )
    .await
    .expect("ui loop timed out")
    .unwrap();

    let mut sent = Vec::new();
    while let Ok(Some(event)) = ui_rx.try_recv() {
        sent.push(event);
    }
    assert_eq!(
        sent,
        vec![
            AppEvent::UpdateBuffer("old".into()),
            AppEvent::UpdateBuffer("old\nmore".into()),
            AppEvent::Quit,
        ]
    );
}
