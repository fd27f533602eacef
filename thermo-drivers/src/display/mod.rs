//! Segment displays

pub mod seven_segment;

pub use seven_segment::SevenSegment;
