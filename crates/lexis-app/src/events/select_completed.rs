use kanal::AsyncSender;
use lexis_core::{Session, SessionEvent};
use lexis_types::{AppEvent, Notice};

#[derive(Debug, Clone)]
pub enum Selection {
    Index(usize),
    Word(String),
}

pub async fn handle_select_completed(
    session: &mut Session,
    selection: Selection,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let result = match selection {
        Selection::Index(index) => session.edit_existing(index),
        Selection::Word(word) => session.edit_existing_word(&word),
    };

    match result {
        Ok(SessionEvent::Reopened { word, .. }) => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::info(format!(
                    "Loading '{word}' for editing."
                ))))
                .await?;
            app_to_ui_tx.send(AppEvent::Render(session.view())).await?;
        }
        Ok(other) => {
            tracing::warn!("Unexpected reopen outcome: {:?}", other);
        }
        Err(e) => {
            tracing::warn!("Reopen rejected: {}", e);
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::warning(format!("Cannot edit: {e}"))))
                .await?;
        }
    }

    Ok(())
}
