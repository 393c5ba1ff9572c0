//! Line-driven editing session over a [`DateForm`].
//!
//! Each line is one command. Edits recompute the count right away and the
//! updated form is printed after every edit, the same way the result panel
//! follows the date pickers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use date_span::{DateForm, Field, Locale};
use log::{debug, warn};

use crate::render;

const HELP: &str = "\
commands:
  start <date>        set the start date (YYYY-MM-DD)
  end <date>          set the end date (YYYY-MM-DD)
  clear start|end     empty one of the dates
  calc                recalculate now
  show                print the form
  help                print this help
  quit                leave
";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Set(Field, String),
    Clear(Field),
    Calculate,
    Show,
    Help,
    Quit,
    Unknown(String),
}

fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let action = match (word.to_ascii_lowercase().as_str(), rest) {
        ("start", value) => Action::Set(Field::Start, value.to_string()),
        ("end", value) => Action::Set(Field::End, value.to_string()),
        ("clear", "start") => Action::Clear(Field::Start),
        ("clear", "end") => Action::Clear(Field::End),
        ("calc" | "calculate", "") => Action::Calculate,
        ("show", "") => Action::Show,
        ("help" | "?", "") => Action::Help,
        ("quit" | "exit" | "q", "") => Action::Quit,
        _ => Action::Unknown(line.to_string()),
    };
    Some(action)
}

/// Interactive session reading commands from `input` and writing to `output`.
pub struct Session<R, W> {
    form: DateForm,
    locale: Locale,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(locale: Locale, input: R, output: W) -> Self {
        Self {
            form: DateForm::new(),
            locale,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                debug!("end of input");
                break;
            }

            let Some(action) = parse_action(&line) else {
                continue;
            };
            debug!("action: {action:?}");

            match action {
                Action::Set(field, value) => {
                    self.form.set(field, value);
                    self.show()?;
                }
                Action::Clear(field) => {
                    match field {
                        Field::Start => self.form.clear_start(),
                        Field::End => self.form.clear_end(),
                    }
                    self.show()?;
                }
                Action::Calculate => {
                    if self.form.can_calculate() {
                        self.form.recalculate();
                    }
                    self.show()?;
                }
                Action::Show => self.show()?,
                Action::Help => self.write(HELP)?,
                Action::Quit => break,
                Action::Unknown(text) => {
                    warn!("unknown command: {text}");
                    self.write(&format!("unknown command: {text} (type 'help')\n"))?;
                }
            }
        }
        self.output.flush().context("failed to flush output")
    }

    /// The form as it stands now.
    #[cfg(test)]
    pub fn form(&self) -> &DateForm {
        &self.form
    }

    fn show(&mut self) -> Result<()> {
        let text = render::form_view(&self.form.view(self.locale));
        self.write(&text)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("failed to write output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (DateForm, String) {
        let mut out = Vec::new();
        let mut session = Session::new(Locale::RuRu, script.as_bytes(), &mut out);
        session.run().unwrap();
        let form = session.form().clone();
        (form, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            parse_action("start 2024-01-01"),
            Some(Action::Set(Field::Start, "2024-01-01".to_string()))
        );
        assert_eq!(
            parse_action("  END   2024-01-02 "),
            Some(Action::Set(Field::End, "2024-01-02".to_string()))
        );
        assert_eq!(parse_action("clear end"), Some(Action::Clear(Field::End)));
        assert_eq!(parse_action("calc"), Some(Action::Calculate));
        assert_eq!(parse_action("q"), Some(Action::Quit));
        assert_eq!(parse_action("   "), None);
        assert_eq!(
            parse_action("clear both"),
            Some(Action::Unknown("clear both".to_string()))
        );
    }

    #[test]
    fn test_bare_start_empties_the_field() {
        assert_eq!(
            parse_action("start"),
            Some(Action::Set(Field::Start, String::new()))
        );
    }

    #[test]
    fn test_session_recomputes_after_each_edit() {
        let (form, out) = run("start 2024-01-01\nend 2024-01-04\n");
        assert_eq!(form.day_count(), Some(3));
        assert!(out.contains("3 дня\n"), "got: {out}");
    }

    #[test]
    fn test_session_clear_hides_result() {
        let (form, out) = run("start 2024-01-01\nend 2024-01-02\nclear start\n");
        assert_eq!(form.day_count(), None);
        assert!(out.contains("1 день\n"));
        assert!(out.ends_with("Рассчитать: недоступно, укажите обе даты\n"));
    }

    #[test]
    fn test_session_calc_repeats_result_panel() {
        let (form, out) = run("start 2024-01-01\nend 2024-01-10\ncalc\n");
        assert_eq!(form.day_count(), Some(9));
        assert_eq!(out.matches("9 дней\nмежду выбранными датами\n").count(), 2);
        assert!(out.ends_with("9 дней\nмежду выбранными датами\n"), "got: {out}");
    }

    #[test]
    fn test_session_stops_at_quit() {
        let (form, _) = run("start 2024-01-01\nquit\nend 2024-01-02\n");
        assert_eq!(form.end(), "");
    }

    #[test]
    fn test_session_reports_unknown_commands() {
        let (_, out) = run("frobnicate\n");
        assert_eq!(out, "unknown command: frobnicate (type 'help')\n");
    }

    #[test]
    fn test_session_help() {
        let (_, out) = run("help\n");
        assert!(out.contains("clear start|end"));
    }
}
