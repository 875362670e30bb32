use image::{Rgb, RgbImage};
use std::error::Error;

/// Per-channel absolute difference of two images.
///
/// # Arguments
/// * `a`, `b` - Input images; they must have identical dimensions
/// # Returns
/// An image of the same dimensions where every pixel is the absolute value of
/// the per-channel input difference
pub fn absolute_difference(a: &RgbImage, b: &RgbImage) -> Result<RgbImage, Box<dyn Error>> {
    let (width, height) = a.dimensions();

    if b.dimensions() != (width, height) {
        return Err(format!(
            "Images have different dimensions: {}x{} vs {}x{}",
            width,
            height,
            b.width(),
            b.height()
        )
        .into());
    }

    let mut diff = RgbImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pa = a.get_pixel(x, y);
            let pb = b.get_pixel(x, y);

            diff.put_pixel(
                x,
                y,
                Rgb([
                    pa[0].abs_diff(pb[0]),
                    pa[1].abs_diff(pb[1]),
                    pa[2].abs_diff(pb[2]),
                ]),
            );
        }
    }

    Ok(diff)
}

/// Diff a student render in the working directory against its reference
/// counterpart and write the result as `diff_{filename}`.
pub fn write_diff(filename: &str, ref_prefix: &str) -> Result<(), Box<dyn Error>> {
    let student = image::open(filename)?.to_rgb8();
    let reference = image::open(format!("{}{}", ref_prefix, filename))?.to_rgb8();

    let diff = absolute_difference(&student, &reference)?;
    diff.save(format!("diff_{}", filename))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_images_diff_to_all_zero() {
        let img = RgbImage::from_pixel(4, 3, Rgb([10, 200, 37]));
        let diff = absolute_difference(&img, &img).unwrap();

        assert_eq!(diff.dimensions(), (4, 3));
        assert!(diff.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_difference_is_absolute_per_channel() {
        let mut a = RgbImage::new(2, 1);
        let mut b = RgbImage::new(2, 1);
        a.put_pixel(0, 0, Rgb([10, 250, 0]));
        b.put_pixel(0, 0, Rgb([30, 100, 0]));
        a.put_pixel(1, 0, Rgb([0, 5, 255]));
        b.put_pixel(1, 0, Rgb([255, 5, 254]));

        let diff = absolute_difference(&a, &b).unwrap();

        assert_eq!(diff.get_pixel(0, 0).0, [20, 150, 0]);
        assert_eq!(diff.get_pixel(1, 0).0, [255, 0, 1]);
    }

    #[test]
    fn test_difference_is_symmetric() {
        let a = RgbImage::from_pixel(3, 3, Rgb([7, 140, 33]));
        let b = RgbImage::from_pixel(3, 3, Rgb([209, 3, 90]));

        let ab = absolute_difference(&a, &b).unwrap();
        let ba = absolute_difference(&b, &a).unwrap();

        assert_eq!(ab, ba);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let a = RgbImage::new(2, 2);
        let b = RgbImage::new(3, 2);

        let err = absolute_difference(&a, &b).unwrap_err();
        assert!(err.to_string().contains("different dimensions"));
    }
}
