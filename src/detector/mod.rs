#[cfg(test)]
pub mod impl_fake;
pub mod impl_hough;
#[cfg(feature = "opencv")]
pub mod impl_opencv;
pub mod interface;
pub mod overlay;
pub mod prepare;
