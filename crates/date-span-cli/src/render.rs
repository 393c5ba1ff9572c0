//! Plain-text rendering of the form.

use date_span::{DaySpan, FormView, InputView};

const START_HEADING: &str = "Начальная дата";
const END_HEADING: &str = "Конечная дата";
const CALCULATE_DISABLED: &str = "Рассчитать: недоступно, укажите обе даты";

/// `3 дня`
pub fn span_line(span: &DaySpan) -> String {
    format!("{} {}", span.display, span.unit)
}

/// The whole form: both inputs with their labels, then the result panel if
/// there is one.
pub fn form_view(view: &FormView) -> String {
    let mut lines = Vec::new();
    input_lines(&mut lines, START_HEADING, &view.start);
    input_lines(&mut lines, END_HEADING, &view.end);

    if let Some(panel) = &view.result {
        lines.push(span_line(&panel.span));
        lines.push(panel.caption.to_string());
    }
    if !view.can_calculate {
        lines.push(CALCULATE_DISABLED.to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn input_lines(lines: &mut Vec<String>, heading: &str, input: &InputView) {
    lines.push(format!("{heading}: {}", input.value));
    if let Some(label) = input.label.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("  {label}"));
    }
}
