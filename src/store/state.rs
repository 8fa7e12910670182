//! State types for the project store.
//!
//! The store holds a single aggregate: the four user inputs, the derived
//! estimate amount, and the render-mode flag used during PDF export.

/// Fire-prevention zone categories accepted by the estimate form.
///
/// The store itself does not validate against this list; it exists for
/// front-ends that want to offer a fixed choice.
pub const FIRE_PREVENTION_CATEGORIES: [&str; 4] =
    ["防火地域", "準防火地域", "22条地域", "指定なし"];

/// How the content tree is currently being rendered.
///
/// `Export` is active only while a PDF capture is in progress; views that are
/// interactive-only (buttons, form controls) suppress themselves in this mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Interactive,
    Export,
}

/// The four user-entered building parameters.
///
/// Comparison is strict per field (no float tolerance); the change detector
/// relies on this to decide whether a store write touched the tracked inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInputs {
    /// Fire-prevention zone category. Empty string means "not chosen yet".
    pub fire_prevention_area: String,
    /// Number of floors, above-ground only.
    pub floors: u32,
    /// Short-side length in meters.
    pub span: f64,
    /// Long-side length in meters.
    pub depth: f64,
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            fire_prevention_area: String::new(),
            floors: 1,
            span: 0.0,
            depth: 0.0,
        }
    }
}

impl UserInputs {
    /// Whether every required field has been filled in.
    ///
    /// The estimate pipeline only calls the external estimator once this
    /// holds; partial input never leaves the process.
    pub fn is_complete(&self) -> bool {
        !self.fire_prevention_area.is_empty()
            && self.floors > 0
            && self.span > 0.0
            && self.depth > 0.0
    }
}

/// Full store snapshot: user inputs plus derived state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectState {
    pub inputs: UserInputs,
    /// Derived estimate amount in whole yen. Zero until the first successful
    /// derivation, and reset to zero when a derivation fails.
    pub amount: i64,
    pub mode: RenderMode,
}

/// Partial update for [`ProjectState`].
///
/// Fields left as `None` are untouched by [`ProjectStore::apply`].
///
/// [`ProjectStore::apply`]: crate::store::ProjectStore::apply
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub fire_prevention_area: Option<String>,
    pub floors: Option<u32>,
    pub span: Option<f64>,
    pub depth: Option<f64>,
    pub amount: Option<i64>,
    pub mode: Option<RenderMode>,
}

impl ProjectPatch {
    /// Merge this patch into `state`, leaving `None` fields unchanged.
    pub(crate) fn merge_into(self, state: &mut ProjectState) {
        if let Some(area) = self.fire_prevention_area {
            state.inputs.fire_prevention_area = area;
        }
        if let Some(floors) = self.floors {
            state.inputs.floors = floors;
        }
        if let Some(span) = self.span {
            state.inputs.span = span;
        }
        if let Some(depth) = self.depth {
            state.inputs.depth = depth;
        }
        if let Some(amount) = self.amount {
            state.amount = amount;
        }
        if let Some(mode) = self.mode {
            state.mode = mode;
        }
    }
}
