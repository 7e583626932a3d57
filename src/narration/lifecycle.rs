//! Interaction lifecycle of the input controls
//!
//! ```text
//!          focus (emits on-focus description)
//!   Idle ───────────────────────────────────► Focused
//!    ▲                                           │ value change
//!    │ blur / reset                              ▼
//!    └──────────────────────────────────────── Dragging ◄─┐
//!                                                 └───────┘ value change
//! ```

/// Input controls that produce narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SoluteAmount,
    Volume,
    SoluteSelector,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::SoluteAmount, Control::Volume, Control::SoluteSelector];

    fn index(self) -> usize {
        match self {
            Control::SoluteAmount => 0,
            Control::Volume => 1,
            Control::SoluteSelector => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderState {
    #[default]
    Idle,
    Focused,
    Dragging,
}

/// State of every control
#[derive(Debug, Clone, Default)]
pub struct SliderLifecycle {
    states: [SliderState; 3],
}

impl SliderLifecycle {
    pub fn state(&self, control: Control) -> SliderState {
        self.states[control.index()]
    }

    /// Returns true on the transition out of `Idle`, the only focus that is announced
    pub fn focus(&mut self, control: Control) -> bool {
        let state = &mut self.states[control.index()];
        if *state == SliderState::Idle {
            *state = SliderState::Focused;
            true
        } else {
            false
        }
    }

    pub fn value_changed(&mut self, control: Control) {
        let state = &mut self.states[control.index()];
        if *state == SliderState::Focused {
            *state = SliderState::Dragging;
        }
    }

    pub fn blur(&mut self, control: Control) {
        self.states[control.index()] = SliderState::Idle;
    }

    pub fn reset(&mut self) {
        self.states = [SliderState::Idle; 3];
    }
}

// =================================================================================================
// Tests
// =================================================================================================
