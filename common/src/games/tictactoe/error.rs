use thiserror::Error;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid board size: {size}. Supported board sizes: 3, 4 and 5.")]
pub struct InvalidSizeError {
    pub size: usize,
}

pub fn validate_board_size(size: usize) -> Result<(), InvalidSizeError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(InvalidSizeError { size })
    }
}
