mod draft;
mod train;

pub use draft::{
    parse_leading_int, DraftField, TrainDraft, ValidDraft, DEFAULT_CAPACITY, DEFAULT_OCCUPIED,
    DEFAULT_PLATFORM, DEFAULT_TIME,
};
pub use train::{TrainRecord, TrainStatus};
