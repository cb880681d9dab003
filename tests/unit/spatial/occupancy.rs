//! Tests for the bitset backing the canvas filled set

#[cfg(test)]
mod tests {
    use atsumaru::spatial::occupancy::Occupancy;

    #[test]
    fn test_occupy_and_contains() {
        let mut occupancy = Occupancy::new(6);

        assert!(occupancy.is_empty());
        assert!(occupancy.occupy(1));
        assert!(occupancy.occupy(4));

        assert!(occupancy.contains(1));
        assert!(occupancy.contains(4));
        assert!(!occupancy.contains(0));
        assert_eq!(occupancy.count(), 2);
        assert_eq!(occupancy.iter_occupied().collect::<Vec<_>>(), vec![1, 4]);
    }

    // Re-occupying reports no change so callers can detect double placement
    // Verified by returning true unconditionally
    #[test]
    fn test_occupy_twice_reports_no_change() {
        let mut occupancy = Occupancy::new(3);

        assert!(occupancy.occupy(2));
        assert!(!occupancy.occupy(2));
        assert_eq!(occupancy.count(), 1);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut occupancy = Occupancy::new(3);

        assert!(!occupancy.occupy(3));
        assert!(!occupancy.contains(3));
        assert!(occupancy.is_empty());
        assert_eq!(occupancy.capacity(), 3);
    }

    #[test]
    fn test_full_and_display() {
        let mut occupancy = Occupancy::new(2);
        occupancy.occupy(0);
        assert!(!occupancy.is_full());
        occupancy.occupy(1);

        assert!(occupancy.is_full());
        assert_eq!(occupancy.to_string(), "Occupancy(2/2 cells)");
    }
}
