//! Linear multi-step form state shared by every wizard page.
//!
//! DESIGN
//! ======
//! A flow is a marker type implementing [`WizardFlow`]; it fixes the step
//! count, field keys, defaults and per-step readiness. [`WizardState`] owns
//! the step index and field values and enforces `1 <= step <= TOTAL_STEPS`.
//! Nothing here can fail: blocked transitions are no-ops and the UI reads
//! the derived `can_*` booleans to disable controls.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// A single form value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Whether the value counts as filled in for readiness checks.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Flag(flag) => *flag,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Field values keyed by a flow's field enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMap<K: Ord> {
    values: BTreeMap<K, FieldValue>,
}

impl<K: Ord + Copy> FieldMap<K> {
    pub fn new(defaults: impl IntoIterator<Item = (K, FieldValue)>) -> Self {
        Self { values: defaults.into_iter().collect() }
    }

    pub fn get(&self, key: K) -> Option<&FieldValue> {
        self.values.get(&key)
    }

    /// Text value for `key`, or `""` when unset or a flag.
    pub fn text(&self, key: K) -> &str {
        match self.values.get(&key) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Flag value for `key`, or `false` when unset or text.
    pub fn flag(&self, key: K) -> bool {
        matches!(self.values.get(&key), Some(FieldValue::Flag(true)))
    }

    pub fn is_filled(&self, key: K) -> bool {
        self.values.get(&key).is_some_and(FieldValue::is_filled)
    }

    /// Whether every key in `keys` is filled.
    pub fn all_filled(&self, keys: &[K]) -> bool {
        keys.iter().all(|key| self.is_filled(*key))
    }

    pub fn set(&mut self, key: K, value: FieldValue) {
        self.values.insert(key, value);
    }
}

/// Static description of one wizard flow.
pub trait WizardFlow: 'static {
    /// Field keys used by this flow.
    type Field: Copy + Ord + fmt::Debug + Send + Sync + 'static;

    /// Flow name used in log lines.
    const NAME: &'static str;
    /// Number of steps; the last step is where submit becomes available.
    const TOTAL_STEPS: u8;

    /// Field values present when the page mounts.
    fn default_fields() -> Vec<(Self::Field, FieldValue)>;

    /// Heading shown for `step` (1-based).
    fn step_title(step: u8) -> &'static str;

    /// Whether the required inputs of `step` are present.
    fn step_ready(step: u8, fields: &FieldMap<Self::Field>) -> bool {
        let _ = (step, fields);
        true
    }
}

/// What "Back" does on the first step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloorBehavior {
    /// Stay on step 1.
    Clamp,
    /// Report [`Retreat::Exit`]; the caller leaves the flow.
    #[default]
    Exit,
}

/// Navigation policy for a wizard instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WizardPolicy {
    /// When false, `advance()` is blocked until the current step is ready.
    pub allow_skip_ahead: bool,
    pub floor: FloorBehavior,
}

impl Default for WizardPolicy {
    fn default() -> Self {
        Self { allow_skip_ahead: true, floor: FloorBehavior::Exit }
    }
}

/// Outcome of [`WizardState::retreat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retreat {
    /// Moved back to the contained step.
    Moved(u8),
    /// Already at step 1 under [`FloorBehavior::Clamp`].
    Stayed,
    /// Already at step 1 under [`FloorBehavior::Exit`].
    Exit,
}

/// Step index and field values for one mounted wizard.
pub struct WizardState<W: WizardFlow> {
    step: u8,
    fields: FieldMap<W::Field>,
    policy: WizardPolicy,
    completed: bool,
    _flow: PhantomData<fn() -> W>,
}

impl<W: WizardFlow> WizardState<W> {
    pub fn new(policy: WizardPolicy) -> Self {
        debug_assert!(W::TOTAL_STEPS >= 1, "wizard {} has no steps", W::NAME);
        Self {
            step: 1,
            fields: FieldMap::new(W::default_fields()),
            policy,
            completed: false,
            _flow: PhantomData,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn total_steps(&self) -> u8 {
        W::TOTAL_STEPS
    }

    pub fn fields(&self) -> &FieldMap<W::Field> {
        &self.fields
    }

    pub fn policy(&self) -> WizardPolicy {
        self.policy
    }

    pub fn is_first(&self) -> bool {
        self.step == 1
    }

    pub fn is_last(&self) -> bool {
        self.step == W::TOTAL_STEPS
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn title(&self) -> &'static str {
        W::step_title(self.step)
    }

    /// Fraction of the flow reached, in `[1 / TOTAL_STEPS, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.step) / f64::from(W::TOTAL_STEPS)
    }

    pub fn current_step_ready(&self) -> bool {
        W::step_ready(self.step, &self.fields)
    }

    pub fn can_advance(&self) -> bool {
        self.step < W::TOTAL_STEPS && (self.policy.allow_skip_ahead || self.current_step_ready())
    }

    /// Submit is available on the last step once every step is ready.
    pub fn can_complete(&self) -> bool {
        self.is_last() && !self.completed && (1..=W::TOTAL_STEPS).all(|step| W::step_ready(step, &self.fields))
    }

    /// Move one step forward. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step += 1;
        log::debug!("wizard {}: advanced to step {}/{}", W::NAME, self.step, W::TOTAL_STEPS);
        true
    }

    /// Move one step back, or report the floor outcome on step 1.
    pub fn retreat(&mut self) -> Retreat {
        if self.step > 1 {
            self.step -= 1;
            log::debug!("wizard {}: back to step {}/{}", W::NAME, self.step, W::TOTAL_STEPS);
            return Retreat::Moved(self.step);
        }
        match self.policy.floor {
            FloorBehavior::Clamp => Retreat::Stayed,
            FloorBehavior::Exit => {
                log::debug!("wizard {}: exit requested from first step", W::NAME);
                Retreat::Exit
            }
        }
    }

    pub fn set_field(&mut self, key: W::Field, value: impl Into<FieldValue>) {
        self.fields.set(key, value.into());
    }

    /// Mark the flow submitted. Returns false unless [`Self::can_complete`].
    pub fn complete(&mut self) -> bool {
        if !self.can_complete() {
            return false;
        }
        self.completed = true;
        log::debug!("wizard {}: completed", W::NAME);
        true
    }
}

impl<W: WizardFlow> Default for WizardState<W> {
    fn default() -> Self {
        Self::new(WizardPolicy::default())
    }
}

impl<W: WizardFlow> Clone for WizardState<W> {
    fn clone(&self) -> Self {
        Self {
            step: self.step,
            fields: self.fields.clone(),
            policy: self.policy,
            completed: self.completed,
            _flow: PhantomData,
        }
    }
}

impl<W: WizardFlow> PartialEq for WizardState<W> {
    fn eq(&self, other: &Self) -> bool {
        self.step == other.step
            && self.fields == other.fields
            && self.policy == other.policy
            && self.completed == other.completed
    }
}

impl<W: WizardFlow> fmt::Debug for WizardState<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardState")
            .field("flow", &W::NAME)
            .field("step", &self.step)
            .field("total_steps", &W::TOTAL_STEPS)
            .field("fields", &self.fields)
            .field("policy", &self.policy)
            .field("completed", &self.completed)
            .finish()
    }
}
