use base::Vec2;
use image::{Image, ImageError, PixelFormat};

#[test]
fn test_rgb_checks_length() {
    assert!(Image::rgb(Vec2::new(2, 3), vec![0; 18]).is_ok());
    assert!(matches!(
        Image::rgb(Vec2::new(2, 3), vec![0; 17]),
        Err(ImageError::Size { expected: 18, got: 17 })
    ));
}

#[test]
fn test_gray_replicates_luma() {
    let image = Image::gray(Vec2::new(2, 1), &[10, 200]).unwrap();
    assert_eq!(image.data, vec![10, 10, 10, 200, 200, 200]);
    assert_eq!(image.format, PixelFormat::Rgb8);
    assert_eq!(image.pixel(1, 0), [200, 200, 200]);
}

#[test]
fn test_resize_to_exact_size() {
    let source = Image::gray(Vec2::new(4, 4), &[128; 16]).unwrap();

    let up = image::resize(&source, Vec2::new(640, 480)).unwrap();
    assert_eq!(up.size, Vec2::new(640, 480));
    assert_eq!(up.data.len(), 640 * 480 * 3);
    assert!(up.data.iter().all(|&c| c == 128));

    let down = image::resize(&source, Vec2::new(3, 1)).unwrap();
    assert_eq!(down.size, Vec2::new(3, 1));
}

#[test]
fn test_resize_is_smooth() {
    // black left half, white right half
    let luma: Vec<u8> = (0..8 * 8).map(|i| if i % 8 < 4 { 0 } else { 255 }).collect();
    let source = Image::gray(Vec2::new(8, 8), &luma).unwrap();

    let up = image::resize(&source, Vec2::new(64, 8)).unwrap();
    let row: Vec<u8> = (0..64).map(|x| up.pixel(x, 4)[0]).collect();

    assert_eq!(row[0], 0);
    assert_eq!(row[63], 255);
    // a bilinear filter produces intermediate values at the edge
    assert!(row.iter().any(|&c| c > 20 && c < 235));
    assert!(row.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_resize_rejects_zero_size() {
    let source = Image::gray(Vec2::new(2, 2), &[0; 4]).unwrap();
    assert!(image::resize(&source, Vec2::new(0, 2)).is_err());
}
