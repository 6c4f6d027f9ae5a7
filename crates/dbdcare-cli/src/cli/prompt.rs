use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode, Reedline, Signal,
};
use std::borrow::Cow;
use std::io;

pub static DEFAULT_PROMPT_INDICATOR: &str = "〉";
pub static DEFAULT_VI_INSERT_PROMPT_INDICATOR: &str = ": ";
pub static DEFAULT_MULTILINE_INDICATOR: &str = "::: ";

/// A prompt showing a short label before the indicator.
#[derive(Clone, Default)]
pub struct LabelPrompt {
    label: String,
}

impl LabelPrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Prompt for LabelPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => DEFAULT_PROMPT_INDICATOR.into(),
            PromptEditMode::Vi(vi_mode) => match vi_mode {
                PromptViMode::Normal => DEFAULT_PROMPT_INDICATOR.into(),
                PromptViMode::Insert => DEFAULT_VI_INSERT_PROMPT_INDICATOR.into(),
            },
            PromptEditMode::Custom(str) => format!("({str})").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(DEFAULT_MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search) \"{}\": ", prefix, history_search.term))
    }
}

pub(crate) struct Prompter {
    editor: Reedline,
}

impl Prompter {
    pub(crate) fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }

    /// One trimmed line, `None` on Ctrl-C or Ctrl-D.
    pub(crate) fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        match self.editor.read_line(&LabelPrompt::new(label))? {
            Signal::Success(line) => Ok(Some(line.trim().to_owned())),
            Signal::CtrlC | Signal::CtrlD => Ok(None),
        }
    }

    pub(crate) fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N] "))?;
        Ok(answer.is_some_and(|answer| is_yes(&answer)))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "ya" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("Y"));
        assert!(is_yes("ya"));
        assert!(!is_yes(""));
        assert!(!is_yes("tidak"));
    }

    #[test]
    fn test_label_is_rendered() {
        assert_eq!(LabelPrompt::new("Password ").render_prompt_left(), "Password ");
    }
}
