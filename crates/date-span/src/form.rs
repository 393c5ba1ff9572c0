//! State of the two-date form.
//!
//! [`DateForm`] owns the start and end inputs and the derived day count.
//! Every edit recomputes the count immediately, so reading it never returns
//! a value that disagrees with the inputs. The count has no setter.

use log::debug;
use serde::Serialize;

use crate::calculator::{compute, format_label, DaySpan};
use crate::locale::Locale;

/// Caption shown under the result.
pub const RESULT_CAPTION: &str = "между выбранными датами";

/// Which of the two inputs an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
}

/// The two date inputs and their derived day count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateForm {
    start: String,
    end: String,
    day_count: Option<u64>,
}

impl DateForm {
    /// An empty form: both inputs blank, no result.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Current derived count. `None` when either input is empty or invalid.
    pub fn day_count(&self) -> Option<u64> {
        self.day_count
    }

    pub fn set_start(&mut self, value: impl Into<String>) {
        self.set(Field::Start, value);
    }

    pub fn set_end(&mut self, value: impl Into<String>) {
        self.set(Field::End, value);
    }

    /// Replace one input and recompute.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Start => self.start = value,
            Field::End => self.end = value,
        }
        self.recalculate();
    }

    pub fn clear_start(&mut self) {
        self.set(Field::Start, String::new());
    }

    pub fn clear_end(&mut self) {
        self.set(Field::End, String::new());
    }

    /// Recompute the count from the current inputs and return it.
    ///
    /// Edits already call this; it is also the explicit "calculate" action.
    pub fn recalculate(&mut self) -> Option<u64> {
        self.day_count = compute(&self.start, &self.end);
        debug!(
            "recalculated: start={:?} end={:?} days={:?}",
            self.start, self.end, self.day_count
        );
        self.day_count
    }

    /// Whether the calculate action is enabled: both inputs non-blank.
    pub fn can_calculate(&self) -> bool {
        !is_blank(&self.start) && !is_blank(&self.end)
    }

    /// Render model of the form in `locale`.
    pub fn view(&self, locale: Locale) -> FormView {
        FormView {
            locale,
            start: InputView::new(&self.start, locale),
            end: InputView::new(&self.end, locale),
            result: self.day_count.map(|days| ResultPanel {
                span: DaySpan::new(days, locale),
                caption: RESULT_CAPTION,
            }),
            can_calculate: self.can_calculate(),
        }
    }
}

/// Whitespace-only input counts as empty, matching the parser.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// One input as it is shown: the raw value and the label under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub value: String,
    /// Present only when `value` is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl InputView {
    fn new(value: &str, locale: Locale) -> Self {
        Self {
            value: value.to_string(),
            label: (!is_blank(value)).then(|| format_label(value, locale)),
        }
    }
}

/// The result panel, shown only when a count is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPanel {
    #[serde(flatten)]
    pub span: DaySpan,
    pub caption: &'static str,
}

/// Everything needed to draw the form once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub locale: Locale,
    pub start: InputView,
    pub end: InputView,
    pub result: Option<ResultPanel>,
    pub can_calculate: bool,
}
