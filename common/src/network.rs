pub mod address;
pub mod entry;
pub mod overlap;
pub mod range;

/// Separates entries inside a field.
pub const ENTRY_SEPARATOR: char = ',';
/// Separates the two bounds of a range.
pub const RANGE_SEPARATOR: char = '-';
