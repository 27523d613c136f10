//! Slot Math
//!
//! Pure insertion-index computation shared by every drag container.

/// Layout direction of a drag container's items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Items stacked top to bottom (task lists)
    Vertical,
    /// Items laid out left to right (column strip)
    Horizontal,
}

/// Leading edge and size of a rendered item along the drag axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f64,
    pub extent: f64,
}

impl Span {
    pub fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    pub fn midpoint(&self) -> f64 {
        self.start + self.extent / 2.0
    }
}

/// Index of the first item whose midpoint lies past the pointer.
/// Falls back to the end of the list when the pointer is past every midpoint.
pub fn insertion_index<I>(spans: I, pointer: f64) -> usize
where
    I: IntoIterator<Item = Span>,
{
    let mut index = 0;
    for span in spans {
        if pointer < span.midpoint() {
            return index;
        }
        index += 1;
    }
    index
}

/// Translate an "insert before slot" index into a target index for a
/// remove-then-insert move within the same sequence.
pub fn target_index_after_removal(from: usize, insert: usize) -> usize {
    if insert > from {
        insert - 1
    } else {
        insert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(count: usize, height: f64) -> Vec<Span> {
        (0..count).map(|i| Span::new(i as f64 * height, height)).collect()
    }

    #[test]
    fn test_pointer_above_first_midpoint() {
        assert_eq!(insertion_index(stacked(3, 40.0), 5.0), 0);
        assert_eq!(insertion_index(stacked(3, 40.0), 19.9), 0);
    }

    #[test]
    fn test_pointer_between_items() {
        // midpoints at 20, 60, 100
        assert_eq!(insertion_index(stacked(3, 40.0), 20.0), 1);
        assert_eq!(insertion_index(stacked(3, 40.0), 59.0), 1);
        assert_eq!(insertion_index(stacked(3, 40.0), 61.0), 2);
    }

    #[test]
    fn test_pointer_below_all_items_is_end() {
        assert_eq!(insertion_index(stacked(3, 40.0), 500.0), 3);
        assert_eq!(insertion_index(Vec::new(), 10.0), 0);
    }

    #[test]
    fn test_target_index_after_removal() {
        // slot after own position collapses onto it
        assert_eq!(target_index_after_removal(0, 3), 2);
        assert_eq!(target_index_after_removal(2, 2), 2);
        assert_eq!(target_index_after_removal(3, 1), 1);
        assert_eq!(target_index_after_removal(1, 2), 1);
    }
}
