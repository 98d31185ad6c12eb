use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CanvasButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasModifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubtractModifier {
    #[default]
    Alt,
    Shift,
    Ctrl,
}

impl CanvasModifiers {
    pub fn is_held(&self, modifier: SubtractModifier) -> bool {
        match modifier {
            SubtractModifier::Alt => self.alt,
            SubtractModifier::Shift => self.shift,
            SubtractModifier::Ctrl => self.ctrl,
        }
    }
}

/// Snapshot of the pointer as seen by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    pub position: (i32, i32),
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
    pub modifiers: CanvasModifiers,
}

impl PointerState {
    pub fn pressed(position: (i32, i32), button: CanvasButton) -> Self {
        let mut state = Self {
            position,
            ..Self::default()
        };
        match button {
            CanvasButton::Primary => state.primary = true,
            CanvasButton::Secondary => state.secondary = true,
            CanvasButton::Middle => state.middle = true,
        }
        state
    }

    pub fn with_modifiers(mut self, modifiers: CanvasModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_down(&self, button: CanvasButton) -> bool {
        match button {
            CanvasButton::Primary => self.primary,
            CanvasButton::Secondary => self.secondary,
            CanvasButton::Middle => self.middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    #[default]
    Union,
    Subtract,
}

impl BrushMode {
    pub fn from_modifiers(modifiers: CanvasModifiers, subtract_with: SubtractModifier) -> Self {
        if modifiers.is_held(subtract_with) {
            Self::Subtract
        } else {
            Self::Union
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushSample {
    Stroke { position: (i32, i32), mode: BrushMode },
    Released,
}
