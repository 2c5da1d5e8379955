/// Smallest ranking length with at least one pair of items to compare.
pub const MIN_ITEMS: usize = 2;
