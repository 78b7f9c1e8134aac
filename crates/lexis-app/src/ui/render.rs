use lexis_types::{LoadState, Notice, NoticeLevel, SessionView};

const RULE: &str = "----------------------------------------";

pub fn render_view(view: &SessionView) -> String {
    let mut lines = vec![RULE.to_string(), "Greek dictionary editor".to_string()];

    match view.load_state {
        LoadState::Failed => {
            lines.push("The data could not be loaded. Please check the JSON URL.".into());
            return join_lines(lines);
        }
        LoadState::NotAttempted => {
            lines.push("Loading...".into());
            return join_lines(lines);
        }
        LoadState::Loaded => {}
    }

    lines.push(format!("{}/{} completed", view.completed_count, view.total));

    match &view.current {
        Some(current) => {
            let title = if current.reopened {
                "Editing completed word"
            } else {
                "Current pending word"
            };
            lines.push(format!("{title}: {} [{}]", current.word, current.header));
            if !view.buffer.is_empty() {
                lines.push("Current definition:".into());
                lines.extend(view.buffer.lines().map(|line| format!("  | {line}")));
            }
            lines.push("Enter the definition, translation or notes; '.' saves.".into());
        }
        None => {
            lines.push("Congratulations! All words have been completed (in this session).".into());
            lines.push(
                "Nothing is written back to the source; changes are lost when the session ends."
                    .into(),
            );
        }
    }

    if view.completed.is_empty() {
        lines.push("No completed words to edit yet.".into());
    } else {
        lines.push(format!(
            "{} completed word(s): ':list' to browse, ':edit <n|word>' to revise.",
            view.completed.len()
        ));
    }

    join_lines(lines)
}

pub fn render_completed(view: &SessionView) -> String {
    if view.completed.is_empty() {
        return "No completed words to edit yet.\n".to_string();
    }

    join_lines(
        view.completed
            .iter()
            .map(|option| format!("  [{}] {}", option.index, option.label))
            .collect(),
    )
}

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "saved",
        NoticeLevel::Warning => "warning",
    };
    format!("[{tag}] {}\n", notice.message)
}

/// Every line newline-terminated
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
