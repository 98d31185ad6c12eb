mod error;
mod snapshot;
mod source;
mod virtual_plot;

#[cfg(test)]
mod tests;

pub use error::{Result, StackError};
pub use snapshot::PlotSnapshot;
pub use source::ImageSource;
pub use virtual_plot::{DecodeFailureHook, PlotVirtualStack};
