//! Service layer for the calendar bot.
//!
//! This module contains the business logic for:
//! - Visible-text extraction (`TextExtractor`)
//! - Activity segmentation (`ActivitySegmenter`)
//! - Period grouping and year filtering
//! - Reply rendering
//! - Chat relay (`ChatRelay`)

mod extractor;
mod formatter;
mod periods;
mod relay;
mod segmenter;

pub use extractor::TextExtractor;
pub use formatter::render;
pub use periods::{current_year, filter_by_year, group_by_period};
pub use relay::ChatRelay;
pub use segmenter::{ActivitySegmenter, FragmentKind};
