//! Tests for channel means and boundary band extraction

#[cfg(test)]
mod tests {
    use atsumaru::spatial::position::Side;
    use atsumaru::tiles::bands::{band_means, channel_means, edge_band, mean_distance};
    use ndarray::Array3;

    // 4x4 block where channel 0 encodes the column and channel 1 the row
    fn gradient() -> Array3<u8> {
        Array3::from_shape_fn((4, 4, 2), |(row, col, channel)| {
            if channel == 0 { col as u8 } else { row as u8 }
        })
    }

    #[test]
    fn test_channel_means() {
        let content = Array3::from_shape_fn((2, 2, 3), |(_, _, channel)| (channel * 10) as u8);

        assert_eq!(channel_means(content.view()), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_channel_means_of_empty_view() {
        let content = Array3::<u8>::zeros((0, 3, 2));
        assert_eq!(channel_means(content.view()), vec![0.0, 0.0]);
    }

    // Each side selects its own border
    // Verified by swapping the Left and Right slices
    #[test]
    fn test_band_means_per_side() {
        let content = gradient();

        assert_eq!(band_means(content.view(), Side::Left, 1), vec![0.0, 1.5]);
        assert_eq!(band_means(content.view(), Side::Right, 1), vec![3.0, 1.5]);
        assert_eq!(band_means(content.view(), Side::Top, 1), vec![1.5, 0.0]);
        assert_eq!(band_means(content.view(), Side::Bottom, 1), vec![1.5, 3.0]);
        assert_eq!(band_means(content.view(), Side::Right, 2), vec![2.5, 1.5]);
    }

    #[test]
    fn test_band_width_is_clamped() {
        let content = gradient();
        let band = edge_band(content.view(), Side::Bottom, 99);

        assert_eq!(band.dim(), (4, 4, 2));
        assert_eq!(edge_band(content.view(), Side::Left, 3).dim(), (4, 3, 2));
    }

    #[test]
    fn test_mean_distance_sums_absolute_differences() {
        assert!((mean_distance(&[1.0, 5.0, 2.0], &[3.0, 4.0, 2.0]) - 3.0).abs() < f64::EPSILON);
        assert!(mean_distance(&[], &[]).abs() < f64::EPSILON);
    }
}
