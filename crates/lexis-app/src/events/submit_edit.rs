use std::time::Duration;

use kanal::AsyncSender;
use lexis_core::{Session, SessionEvent};
use lexis_types::{AppEvent, Notice};

use crate::state::AppState;

pub async fn handle_submit_edit(
    state: &AppState,
    session: &mut Session,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.commit(text) {
        SessionEvent::Committed {
            word, next_pending, ..
        } => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::success(format!(
                    "Saved '{word}' and marked it completed."
                ))))
                .await?;

            if next_pending.is_none() {
                tracing::info!("No pending entries left");
            }

            let pause = {
                let config = state.config.read().await;
                Duration::from_millis(config.ui.render_pause_ms)
            };
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }

            app_to_ui_tx.send(AppEvent::Render(session.view())).await?;
        }
        SessionEvent::NothingPending => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::info(
                    "There are no more pending words to save.",
                )))
                .await?;
        }
        other => {
            tracing::warn!("Unexpected commit outcome: {:?}", other);
        }
    }

    Ok(())
}
