use kanal::{AsyncReceiver, AsyncSender};
use lexis_types::{AppEvent, SessionView};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

pub mod command;
pub mod render;

use command::{Command, EditTarget, HELP};
use render::{render_completed, render_notice, render_view};

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Print(String),
    Send(AppEvent),
    Quit,
}

/// Terminal form state: the last rendered view plus the local draft
#[derive(Debug, Default)]
pub struct Form {
    draft: String,
    view: SessionView,
    /// Last `buffer_revision` adopted from the session
    revision: u64,
}

impl Form {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Store the new view. The draft is replaced only when the session
    /// loaded text into its buffer (a reopened entry); the returned event
    /// pushes the adopted draft back so both sides agree even if lines were
    /// typed in the meantime.
    pub fn apply_view(&mut self, view: SessionView) -> Option<AppEvent> {
        let adopt = view.buffer_revision != self.revision;
        if adopt {
            self.draft = view.buffer.clone();
            self.revision = view.buffer_revision;
        }
        self.view = view;
        adopt.then(|| AppEvent::UpdateBuffer(self.draft.clone()))
    }

    pub fn handle_line(&mut self, line: &str) -> Vec<UiAction> {
        match Command::parse(line) {
            Command::Append(text) => {
                if !self.draft.is_empty() {
                    self.draft.push('\n');
                }
                self.draft.push_str(&text);
                vec![UiAction::Send(AppEvent::UpdateBuffer(self.draft.clone()))]
            }
            Command::Submit => {
                // a commit clears the session buffer; with nothing to edit the draft stays
                let text = if self.view.current.is_some() {
                    std::mem::take(&mut self.draft)
                } else {
                    self.draft.clone()
                };
                vec![UiAction::Send(AppEvent::SubmitEdit(text))]
            }
            Command::List => vec![UiAction::Print(render_completed(&self.view))],
            Command::Edit(EditTarget::Index(index)) => {
                if self.view.completed.iter().any(|o| o.index == index) {
                    vec![UiAction::Send(AppEvent::SelectCompleted(index))]
                } else {
                    vec![UiAction::Print(format!(
                        "[{index}] is not a completed word, see ':list'.\n"
                    ))]
                }
            }
            Command::Edit(EditTarget::Word(word)) => {
                vec![UiAction::Send(AppEvent::SelectCompletedWord(word))]
            }
            Command::Show => {
                if self.draft.is_empty() {
                    vec![UiAction::Print("(empty draft)\n".to_string())]
                } else {
                    vec![UiAction::Print(format!("{}\n", self.draft))]
                }
            }
            Command::Clear => {
                self.draft.clear();
                vec![
                    UiAction::Send(AppEvent::UpdateBuffer(String::new())),
                    UiAction::Print("Draft cleared.\n".to_string()),
                ]
            }
            Command::Refresh => vec![UiAction::Send(AppEvent::RequestRender)],
            Command::Help => vec![UiAction::Print(format!("{HELP}\n"))],
            Command::Quit => vec![UiAction::Send(AppEvent::Quit), UiAction::Quit],
            Command::Unknown(text) => vec![UiAction::Print(format!(
                "Unknown command '{text}', try ':help'.\n"
            ))],
        }
    }
}

/// Line-oriented terminal front end
pub async fn ui_loop<R, W>(
    input: R,
    mut output: W,
    prompt: bool,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut form = Form::default();
    let mut ready = false;

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                tracing::debug!("[UI] Cancelled");
                break;
            }
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("[UI] Backend channel closed");
                    break;
                };
                match event {
                    AppEvent::Render(view) => {
                        output.write_all(render_view(&view).as_bytes()).await?;
                        if let Some(resync) = form.apply_view(view) {
                            ui_to_app_tx.send(resync).await?;
                        }
                    }
                    AppEvent::Notice(notice) => {
                        output.write_all(render_notice(&notice).as_bytes()).await?;
                    }
                    AppEvent::BackendReady => {
                        tracing::debug!("[UI] Backend ready");
                        ready = true;
                    }
                    _ => {}
                }
                if ready && prompt {
                    output.write_all(b"> ").await?;
                }
                output.flush().await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("[UI] Input closed");
                    ui_to_app_tx.send(AppEvent::Quit).await.ok();
                    break;
                };

                let mut quit = false;
                for action in form.handle_line(&line) {
                    match action {
                        UiAction::Print(text) => output.write_all(text.as_bytes()).await?,
                        UiAction::Send(event) => ui_to_app_tx.send(event).await?,
                        UiAction::Quit => quit = true,
                    }
                }
                if quit {
                    break;
                }
                if prompt {
                    output.write_all(b"> ").await?;
                }
                output.flush().await?;
            }
        }
    }

    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use lexis_types::{CompletedOption, CurrentEntry, LoadState};

    use super::*;

    fn view_with_completed() -> SessionView {
        SessionView {
            load_state: LoadState::Loaded,
            current: Some(CurrentEntry {
                index: 1,
                word: "b".into(),
                header: "B".into(),
                reopened: false,
            }),
            buffer: String::new(),
            buffer_revision: 0,
            completed: vec![CompletedOption {
                index: 0,
                label: "a (A)".into(),
            }],
            completed_count: 1,
            total: 2,
        }
    }

    #[test]
    fn lines_accumulate_into_draft() {
        let mut form = Form::default();

        form.handle_line("first");
        let actions = form.handle_line("second");

        assert_eq!(form.draft(), "first\nsecond");
        assert_eq!(
            actions,
            vec![UiAction::Send(AppEvent::UpdateBuffer("first\nsecond".into()))]
        );
    }

    #[test]
    fn submit_sends_whole_draft_and_clears_it() {
        let mut form = Form::default();
        form.apply_view(view_with_completed());
        form.handle_line("word/reason");

        let actions = form.handle_line(".");

        assert_eq!(
            actions,
            vec![UiAction::Send(AppEvent::SubmitEdit("word/reason".into()))]
        );
        assert_eq!(form.draft(), "");
    }

    #[test]
    fn submit_with_nothing_to_edit_keeps_draft() {
        let mut form = Form::default();
        form.handle_line("notes");

        form.handle_line(".");

        assert_eq!(form.draft(), "notes");
    }

    #[test]
    fn lines_typed_before_commit_render_are_kept() {
        let mut form = Form::default();
        form.apply_view(view_with_completed());
        form.handle_line("first");
        form.handle_line(".");

        // typed during the pause before the redraw
        let actions = form.handle_line("second");
        assert_eq!(
            actions,
            vec![UiAction::Send(AppEvent::UpdateBuffer("second".into()))]
        );

        let mut after_commit = view_with_completed();
        after_commit.buffer = String::new();
        assert_eq!(form.apply_view(after_commit), None);
        assert_eq!(form.draft(), "second");
    }

    #[test]
    fn reopened_view_replaces_draft_and_resyncs() {
        let mut form = Form::default();
        form.handle_line("typed");

        let mut view = view_with_completed();
        view.buffer = "old".into();
        view.buffer_revision = 1;
        let resync = form.apply_view(view);

        assert_eq!(form.draft(), "old");
        assert_eq!(resync, Some(AppEvent::UpdateBuffer("old".into())));
    }

    #[test]
    fn refresh_view_keeps_draft() {
        let mut form = Form::default();
        form.handle_line("typed");

        assert_eq!(form.apply_view(view_with_completed()), None);
        assert_eq!(form.draft(), "typed");
    }

    #[test]
    fn edit_by_index_is_guarded_by_the_completed_list() {
        let mut form = Form::default();
        form.apply_view(view_with_completed());

        assert_eq!(
            form.handle_line(":edit 0"),
            vec![UiAction::Send(AppEvent::SelectCompleted(0))]
        );
        assert!(matches!(
            form.handle_line(":edit 1").as_slice(),
            [UiAction::Print(_)]
        ));
    }

    #[test]
    fn clear_resets_draft_and_session_buffer() {
        let mut form = Form::default();
        form.handle_line("junk");

        let actions = form.handle_line(":clear");

        assert_eq!(form.draft(), "");
        assert_eq!(actions[0], UiAction::Send(AppEvent::UpdateBuffer(String::new())));
    }

    #[test]
    fn quit_notifies_backend_then_stops() {
        let mut form = Form::default();

        assert_eq!(
            form.handle_line(":quit"),
            vec![UiAction::Send(AppEvent::Quit), UiAction::Quit]
        );
    }
}
