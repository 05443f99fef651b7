use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both minimum and maximum radius.")]
    MissingRadius,
    #[error("Please enter numeric values for the minimum and maximum radius.")]
    NonNumericRadius,
    #[error("Minimum radius must be smaller than the maximum radius.")]
    RadiusOrder,
}

/// Everything that can interrupt a session. None of these are fatal. An empty
/// frame is only logged; the rest become a notice for the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to open camera {device_index}: {reason}")]
    DeviceOpen { device_index: i32, reason: String },
    #[error("Camera {device_index} returned an empty frame.")]
    EmptyFrame { device_index: i32 },
    #[error("Camera index must be a whole number, got {0:?}.")]
    InvalidDeviceIndex(String),
}
