use std::ops::ControlFlow;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::Session;
use lexis_source::EntrySource;
use lexis_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod load_entries;
pub mod select_completed;
pub mod submit_edit;

use load_entries::handle_initial_load;
use select_completed::{Selection, handle_select_completed};
use submit_edit::handle_submit_edit;

/// App's main loop. Owns the session; events are handled one at a time.
pub async fn event_loop(
    state: Arc<AppState>,
    source: Arc<dyn EntrySource>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    tracing::info!(session = %session.id(), "[EVENT_LOOP] Session created");

    // the fetch has no timeout by default; shutdown must not wait on it
    let session_id = session.id();
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::info!(session = %session_id, "[EVENT_LOOP] Cancelled during initial load");
            return Ok(());
        }
        result = handle_initial_load(&mut session, source.as_ref(), &app_to_ui_tx) => result?,
    }

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::info!("[EVENT_LOOP] UI channel closed");
                    break;
                }
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );

        if handle_events(&state, &mut session, &app_to_ui_tx, event)
            .await?
            .is_break()
        {
            cancel.cancel();
            break;
        }
    }

    tracing::info!(
        session = %session.id(),
        "[EVENT_LOOP] Session ended with {}/{} entries completed; nothing was persisted",
        session.completed_count(),
        session.entries().len()
    );
    Ok(())
}

async fn handle_events(
    state: &AppState,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::SubmitEdit(text) => {
            handle_submit_edit(state, session, text, app_to_ui_tx).await?;
        }
        AppEvent::SelectCompleted(index) => {
            handle_select_completed(session, Selection::Index(index), app_to_ui_tx).await?;
        }
        AppEvent::SelectCompletedWord(word) => {
            handle_select_completed(session, Selection::Word(word), app_to_ui_tx).await?;
        }
        AppEvent::UpdateBuffer(text) => {
            session.set_buffer(text);
        }
        AppEvent::RequestRender => {
            app_to_ui_tx.send(AppEvent::Render(session.view())).await?;
        }
        AppEvent::Quit => {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return Ok(ControlFlow::Break(()));
        }
        AppEvent::Render(_) | AppEvent::Notice(_) | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(ControlFlow::Continue(()))
}
