use kanal::AsyncSender;
use lexis_core::{Session, SessionEvent};
use lexis_source::EntrySource;
use lexis_types::{AppEvent, Notice};

pub async fn handle_initial_load(
    session: &mut Session,
    source: &dyn EntrySource,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.initialize(source).await {
        SessionEvent::Loaded { count } => {
            tracing::debug!("Initial load produced {} entries", count);
        }
        SessionEvent::LoadFailed(failure) => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::warning(format!(
                    "Could not load the dictionary, check the JSON URL. ({failure})"
                ))))
                .await?;
        }
        other => {
            tracing::debug!("Initialization skipped: {:?}", other);
        }
    }

    app_to_ui_tx.send(AppEvent::Render(session.view())).await?;
    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    Ok(())
}
