/// Errors raised while building a grid.
///
/// Construction is the only fallible step; every query and mutation on a
/// built grid is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid width must be at least 1")]
    ZeroWidth,

    #[error("grid height must be at least 1")]
    ZeroHeight,

    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },

    #[error("unknown gravity direction {0:?} (expected none, up, down, left or right)")]
    UnknownGravity(String),
}
