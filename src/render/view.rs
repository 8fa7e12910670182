//! View trait and the leaf views used by the estimate summary.

use crate::store::ProjectState;

/// A projection of store state into output text.
///
/// Views are stateless: everything they show comes from the snapshot they
/// are handed, so the same tree can be rendered for the screen and for a
/// PDF capture.
pub trait View: Send + Sync {
    fn render(&self, state: &ProjectState, out: &mut String);
}

impl View for Box<dyn View> {
    fn render(&self, state: &ProjectState, out: &mut String) {
        (**self).render(state, out);
    }
}

/// Fixed text line.
pub struct Text(pub String);

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl View for Text {
    fn render(&self, _state: &ProjectState, out: &mut String) {
        out.push_str(&self.0);
        out.push('\n');
    }
}

/// A sequence of child views rendered in order.
pub struct Stack(pub Vec<Box<dyn View>>);

impl View for Stack {
    fn render(&self, state: &ProjectState, out: &mut String) {
        for child in &self.0 {
            child.render(state, out);
        }
    }
}

/// The derived estimate amount, thousands-separated with a yen suffix.
pub struct AmountLine;

impl View for AmountLine {
    fn render(&self, state: &ProjectState, out: &mut String) {
        out.push_str("概算金額: ");
        out.push_str(&format_yen(state.amount));
        out.push_str("円\n");
    }
}

/// The four user inputs, one labelled line each.
pub struct InputSummary;

impl View for InputSummary {
    fn render(&self, state: &ProjectState, out: &mut String) {
        let inputs = &state.inputs;
        let area = if inputs.fire_prevention_area.is_empty() {
            "未選択"
        } else {
            &inputs.fire_prevention_area
        };
        out.push_str(&format!("防火地域等: {}\n", area));
        out.push_str(&format!("階数: {}\n", inputs.floors));
        out.push_str(&format!("スパン: {}m\n", inputs.span));
        out.push_str(&format!("奥行き: {}m\n", inputs.depth));
    }
}

/// Insert thousands separators into a whole-yen amount.
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
