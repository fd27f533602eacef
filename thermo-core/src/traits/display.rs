//! Seven-segment display driver trait

/// One of the two digit positions sharing the segment bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    Left,
    Right,
}

impl DigitPosition {
    /// The position lit after this one
    pub const fn other(self) -> Self {
        match self {
            DigitPosition::Left => DigitPosition::Right,
            DigitPosition::Right => DigitPosition::Left,
        }
    }

    /// Slot index, left first
    pub const fn index(self) -> usize {
        match self {
            DigitPosition::Left => 0,
            DigitPosition::Right => 1,
        }
    }
}

/// What one digit position shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharacterCode {
    /// A decimal digit, always `0..=9`
    Digit(u8),
    /// A '-' sign
    Minus,
    /// All segments off
    Empty,
}

impl CharacterCode {
    /// Build a digit code, rejecting values above 9
    pub const fn digit(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(CharacterCode::Digit(value))
        } else {
            None
        }
    }

    /// Index into a twelve-entry font table: digits, then minus, then empty
    ///
    /// A `Digit` above 9 maps to the empty slot.
    pub const fn font_index(self) -> usize {
        match self {
            CharacterCode::Digit(d) if d <= 9 => d as usize,
            CharacterCode::Digit(_) => 11,
            CharacterCode::Minus => 10,
            CharacterCode::Empty => 11,
        }
    }
}

/// Trait for the display driver collaborator
///
/// The driver only knows how to put a code on the bus and select a
/// position. Which position is lit and when is decided by
/// [`crate::multiplex::Multiplexer`]. Both positions share one data bus, so
/// at most one may be enabled at a time.
pub trait SegmentDisplay {
    /// One-time hardware setup, leaving both positions disabled
    fn initialize(&mut self);

    /// Blank the bus and deselect both positions (`true`), or allow
    /// refreshing again (`false`)
    fn set_low_power(&mut self, enabled: bool);

    /// Put the segment pattern for `code` on the shared bus
    fn write_segment_code(&mut self, position: DigitPosition, code: CharacterCode);

    /// Light a position with whatever is on the bus
    fn enable_position(&mut self, position: DigitPosition);

    /// Turn a position off
    fn disable_position(&mut self, position: DigitPosition);
}
