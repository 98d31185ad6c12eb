mod codec;
mod error;
mod model;
mod render;


pub use codec::{BincodePlotCodec, PLOT_MAGIC, PlotCodec};
pub use error::{PlotError, Result};
pub use model::{MAX_PLOT_PIXELS, Plot, PlotColor, PlotSeries, SeriesStyle};
