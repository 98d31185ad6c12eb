mod controller;
mod layout;
mod request;

#[cfg(test)]
mod tests;

pub use controller::{DialogController, DialogPresenter};
pub use layout::{ScreenRect, Size, center_dialog};
pub use request::{DialogEvent, DialogKey, DialogOutcome, DialogRequest, ResponseButton};
