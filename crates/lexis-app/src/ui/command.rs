/// One line typed into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text, appended to the draft
    Append(String),
    Submit,
    List,
    Edit(EditTarget),
    Show,
    Clear,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Index(usize),
    Word(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == "." {
            return Command::Submit;
        }

        let Some(rest) = trimmed.strip_prefix(':') else {
            return Command::Append(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "list" | "l" => Command::List,
            "edit" | "e" if !arg.is_empty() => match arg.parse::<usize>() {
                Ok(index) => Command::Edit(EditTarget::Index(index)),
                Err(_) => Command::Edit(EditTarget::Word(arg.to_string())),
            },
            "show" | "s" => Command::Show,
            "clear" | "c" => Command::Clear,
            "refresh" | "r" => Command::Refresh,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type the definition, one or more lines, then '.' on its own line to save.
  :list            show completed words
  :edit <n|word>   reopen a completed word
  :show            print the current draft
  :clear           discard the current draft
  :refresh         redraw the form
  :quit            end the session (nothing is saved)";
