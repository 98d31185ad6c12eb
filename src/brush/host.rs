use crate::roi::Roi;

/// Image side of a brush session: owns the current ROI.
pub trait RoiHost {
    fn roi(&self) -> Option<&Roi>;
    fn set_roi(&mut self, roi: Option<Roi>);

    /// False when the image is not shown on any canvas.
    fn has_canvas(&self) -> bool {
        true
    }

    fn delete_roi(&mut self) {
        self.set_roi(None);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetImage {
    pub width: u32,
    pub height: u32,
    pub displayed: bool,
    roi: Option<Roi>,
}

impl TargetImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            displayed: true,
            roi: None,
        }
    }

    pub fn hidden(width: u32, height: u32) -> Self {
        Self {
            displayed: false,
            ..Self::new(width, height)
        }
    }

    pub fn with_roi(mut self, roi: Roi) -> Self {
        self.roi = Some(roi);
        self
    }
}

impl RoiHost for TargetImage {
    fn roi(&self) -> Option<&Roi> {
        self.roi.as_ref()
    }

    fn set_roi(&mut self, roi: Option<Roi>) {
        self.roi = roi;
    }

    fn has_canvas(&self) -> bool {
        self.displayed
    }
}
