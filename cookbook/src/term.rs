use std::borrow::Cow;

use crate::{style::Styles, error::AppError};
use rustyline::{config::BellStyle, highlight::{CmdKind, Highlighter}, history::MemHistory, Completer, CompletionType, EditMode, Editor, Helper, Hinter, Validator};

const LOGO: &str = r"
   ______             __    __                __  
  / ____/___  ____   / /__ / /_   ____  ____ / /__
 / /   / __ \/ __ \ / //_// __ \ / __ \/ __ \/ //_/
/ /___/ /_/ / /_/ // ,<  / /_/ // /_/ / /_/ / ,<   
\____/\____/\____//_/|_|/_.___/ \____/\____/_/|_|  ";

const INSTRUCTIONS: &str = "For help use ?, to exit use Ctrl+C";

const HELP: &str = "Ask a question, e.g. \"What is the weather in Hawaii?\".
Weather questions are answered with the current temperature at the
place you mention, anything else gets a general answer.";

/// Terminal stuff.
pub struct Term {
    user_prompt: String,
    model_prompt: String,
    styles: Styles,
    dumb: bool,
    editor: Option<Editor<RlineHelper, MemHistory>>,
}

impl Term {
    /// New instance for output only.
    pub fn new() -> Self {
        let styles = Styles::new();

        let (user_prompt, model_prompt, dumb) =
        if Ok("dumb") == std::env::var("TERM").as_deref() {
            (
                "USER> ".to_owned(),
                "MODEL> ".to_owned(),
                true,
            )
        } else {
            (
                format!("{} USER {:#}{} {:#}", styles.user_prompt, styles.user_prompt, styles.user_prompt_arrow, styles.user_prompt_arrow),
                format!("{} MODEL {:#}{} {:#}", styles.model_prompt, styles.model_prompt, styles.model_prompt_arrow, styles.model_prompt_arrow),
                false,
            )
        };

        Term {
            user_prompt,
            model_prompt,
            styles,
            dumb,
            editor: None,
        }
    }

    /// New instance reading user input.
    pub fn interactive() -> Result<Self, AppError> {
        let mut term = Self::new();

        let rline_config = rustyline::Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .bell_style(BellStyle::None)
            .check_cursor_position(true)
            .completion_type(CompletionType::List)
            .edit_mode(EditMode::Emacs)
            .build();

        let mut editor: Editor<RlineHelper, MemHistory> = Editor::with_config(rline_config)?;
        let h = RlineHelper {
            colored_prompt: format!("{}{}", &term.user_prompt, term.styles.user_text),
        };
        editor.set_helper(Some(h));
        term.editor.replace(editor);

        Ok(term)
    }

    /// Get input from user.
    pub fn user_input(&mut self) -> Result<String, AppError> {
        let editor = self.editor.as_mut()
            .ok_or(AppError::Error("terminal is not interactive".to_owned()))?;

        if self.dumb {
            editor.readline(&self.user_prompt).map_err(|e| e.into())
        } else {
            let ret = editor.readline(" USER > ");
            print!("{:#}", self.styles.user_text);
            ret.map_err(|e| e.into())
        }
    }

    /// Print as model.
    pub fn model_print(&self, s: &str) {
        if self.dumb {
            println!("{}{}", self.model_prompt, s);
        } else {
            println!("{}{}{}{:#}", self.model_prompt, self.styles.model_text, s, self.styles.model_text);
        }
    }

    /// Print a notice, e.g. an error that does not end the session.
    pub fn notice_print(&self, s: &str) {
        if self.dumb {
            println!("{}", s);
        } else {
            println!("{}{}{:#}", self.styles.notice_text, s, self.styles.notice_text);
        }
    }

    /// Print logo and instructions.
    pub fn print_intro(&self) {
        if self.dumb {
            println!("{}\n (ver. {})\n\n{}", LOGO, env!("CARGO_PKG_VERSION"), INSTRUCTIONS);
        } else {
            println!("{}{}\n (ver. {})\n\n{}{:#}", self.styles.model_text, LOGO, env!("CARGO_PKG_VERSION"), INSTRUCTIONS, self.styles.model_text);
        }
    }

    /// Print help information.
    pub fn print_help(&self) {
        if !self.dumb { print!("{}", self.styles.model_text); }
        print!("{}", HELP);
        if !self.dumb { println!("{:#}", self.styles.model_text); } else { println!(); }
    }
}


#[derive(Helper, Validator, Hinter, Completer)]
struct RlineHelper {
    colored_prompt: String,
}

impl Highlighter for RlineHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        let _ = pos;
        Cow::Borrowed(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Borrowed(&self.colored_prompt)
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, line: &str, pos: usize, kind: CmdKind) -> bool {
        let _ = (line, pos, kind);
        false
    }
}
