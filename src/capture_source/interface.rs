use crate::frame::Frame;

/// An exclusively owned camera handle.
pub trait CaptureSource {
    /// Acquires the device. The handle stays held until `release`.
    fn open(&mut self, device_index: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Latest frame, or `None` when the device has nothing to give
    /// (not open, disconnected, end of stream).
    fn read(&mut self) -> Option<Frame>;

    /// Releases the device. Does nothing when it is not open.
    fn release(&mut self);

    fn is_opened(&self) -> bool;
}
