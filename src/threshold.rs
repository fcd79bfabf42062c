//! Global threshold binarization.

use image::GrayImage;

pub const BLACK: u8 = 0;
pub const WHITE: u8 = 255;

/// Maps every intensity strictly greater than `cutoff` to white and the rest to black.
///
/// The input is left untouched and the output always has the same length.
pub fn threshold(gray: &[u8], cutoff: u8) -> Vec<u8> {
    gray.iter()
        .map(|&value| if value > cutoff { WHITE } else { BLACK })
        .collect()
}

/// Applies [`threshold`] to a grayscale image, keeping its dimensions.
pub fn binarize(gray: &GrayImage, cutoff: u8) -> GrayImage {
    let (width, height) = gray.dimensions();
    GrayImage::from_raw(width, height, threshold(gray.as_raw(), cutoff))
        .unwrap_or_else(|| GrayImage::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        (0..=255u8).chain([0, 17, 127, 128, 254, 255]).collect()
    }

    #[test]
    fn midpoint_example() {
        let gray = [0, 100, 127, 128, 200, 255];
        assert_eq!(threshold(&gray, 127), vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn value_equal_to_cutoff_is_black() {
        assert_eq!(threshold(&[50], 50), vec![0]);
    }

    #[test]
    fn output_is_two_level_and_matches_comparison() {
        let gray = sample();
        for cutoff in [0u8, 1, 64, 127, 128, 200, 254, 255] {
            let binary = threshold(&gray, cutoff);
            assert_eq!(binary.len(), gray.len());
            for (&g, &b) in gray.iter().zip(&binary) {
                assert!(b == BLACK || b == WHITE);
                assert_eq!(b == WHITE, g > cutoff, "gray {} cutoff {}", g, cutoff);
            }
        }
    }

    #[test]
    fn cutoff_255_is_all_black() {
        assert!(threshold(&sample(), 255).iter().all(|&b| b == BLACK));
    }

    #[test]
    fn cutoff_0_only_keeps_zero_black() {
        let gray = sample();
        let binary = threshold(&gray, 0);
        for (&g, &b) in gray.iter().zip(&binary) {
            assert_eq!(b, if g == 0 { BLACK } else { WHITE });
        }
    }

    #[test]
    fn repeated_calls_agree_and_input_is_untouched() {
        let gray = sample();
        let before = gray.clone();
        let first = threshold(&gray, 90);
        let second = threshold(&gray, 90);
        assert_eq!(first, second);
        assert_eq!(gray, before);
    }

    #[test]
    fn empty_buffer_stays_empty() {
        assert!(threshold(&[], 10).is_empty());
    }

    #[test]
    fn binarize_keeps_dimensions_and_layout() {
        let gray = GrayImage::from_raw(3, 2, vec![10, 200, 30, 128, 127, 255]).unwrap();
        let binary = binarize(&gray, 127);
        assert_eq!(binary.dimensions(), (3, 2));
        assert_eq!(binary.as_raw(), &vec![0, 255, 0, 255, 0, 255]);
        assert_eq!(binary.get_pixel(1, 0).0, [255]);
    }
}
