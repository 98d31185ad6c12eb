use super::{Plot, PlotError, Result};

pub const PLOT_MAGIC: [u8; 4] = *b"PLT1";

pub trait PlotCodec {
    fn encode(&self, plot: &Plot) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> Result<Plot>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BincodePlotCodec;

impl PlotCodec for BincodePlotCodec {
    fn encode(&self, plot: &Plot) -> Result<Vec<u8>> {
        plot.validate()?;
        let body = bincode::serialize(plot)?;
        let mut bytes = Vec::with_capacity(PLOT_MAGIC.len() + body.len());
        bytes.extend_from_slice(&PLOT_MAGIC);
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Plot> {
        let (header, body) = bytes
            .split_first_chunk::<4>()
            .ok_or(PlotError::Truncated(bytes.len()))?;
        if *header != PLOT_MAGIC {
            return Err(PlotError::BadMagic(*header));
        }
        let plot: Plot = bincode::deserialize(body)?;
        plot.validate()?;
        Ok(plot)
    }
}
