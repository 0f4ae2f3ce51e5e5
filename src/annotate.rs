// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawing of pose annotations onto images.

use crate::label::LabelRecord;
use crate::visualizer::color::{BOX_COLOR, KEYPOINT_COLOR, LIMB_COLORS};
use crate::visualizer::skeleton::SKELETON;
use image::DynamicImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Bounding box outline stroke width in pixels.
const BOX_THICKNESS: i32 = 2;

/// Keypoint marker radius in pixels.
const KEYPOINT_RADIUS: i32 = 5;

/// Load image helper to bypass zune-jpeg stride issues
pub fn load_image(path: &Path) -> image::ImageResult<DynamicImage> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    if let Some("jpg") | Some("jpeg") = ext.as_deref() {
        if let Ok(file) = File::open(path) {
            let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
            if let Ok(pixels) = decoder.decode() {
                if let Some(metadata) = decoder.info() {
                    let width = metadata.width as u32;
                    let height = metadata.height as u32;
                    match metadata.pixel_format {
                        jpeg_decoder::PixelFormat::RGB24 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageRgb8(buffer));
                            }
                        }
                        jpeg_decoder::PixelFormat::L8 => {
                            if let Some(buffer) =
                                image::ImageBuffer::from_raw(width, height, pixels)
                            {
                                return Ok(DynamicImage::ImageLuma8(buffer));
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    // Fallback
    image::open(path)
}

/// Draw bounding boxes, keypoint markers, and skeleton limbs for every label
/// record onto a copy of the image.
pub fn draw_annotations(image: &DynamicImage, records: &[LabelRecord]) -> DynamicImage {
    let mut img = image.to_rgb8();
    let (width, height) = img.dimensions();

    for record in records {
        let b = record.pixel_box(width, height);

        let mut x1 = b.x1;
        let mut y1 = b.y1;
        let mut x2 = b.x2;
        let mut y2 = b.y2;

        // Ensure x1 < x2 and y1 < y2
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
        }

        // Clamp to image bounds
        x1 = x1.max(0).min(width as i32 - 1);
        y1 = y1.max(0).min(height as i32 - 1);
        x2 = x2.max(0).min(width as i32 - 1);
        y2 = y2.max(0).min(height as i32 - 1);

        if x2 > x1 && y2 > y1 {
            for t in 0..BOX_THICKNESS {
                let tx1 = (x1 + t).min(x2);
                let ty1 = (y1 + t).min(y2);
                let tx2 = (x2 - t).max(tx1);
                let ty2 = (y2 - t).max(ty1);
                if tx2 > tx1 && ty2 > ty1 {
                    let rect = Rect::at(tx1, ty1).of_size((tx2 - tx1) as u32, (ty2 - ty1) as u32);
                    draw_hollow_rect_mut(&mut img, rect, BOX_COLOR.to_rgb());
                }
            }
        }

        let keypoints = record.pixel_keypoints(width, height);
        for &(x, y) in &keypoints {
            draw_filled_circle_mut(&mut img, (x, y), KEYPOINT_RADIUS, KEYPOINT_COLOR.to_rgb());
        }

        for (i, [a, b]) in SKELETON.iter().enumerate() {
            // Table entries are 1-based keypoint numbers
            let p1_idx = a - 1;
            let p2_idx = b - 1;

            if p1_idx < keypoints.len() && p2_idx < keypoints.len() {
                let p1 = keypoints[p1_idx];
                let p2 = keypoints[p2_idx];

                // A point at the origin means the keypoint was not detected
                if p1.0 > 0 && p1.1 > 0 && p2.0 > 0 && p2.1 > 0 {
                    let color = LIMB_COLORS[i % LIMB_COLORS.len()];
                    draw_line_segment_mut(
                        &mut img,
                        (p1.0 as f32, p1.1 as f32),
                        (p2.0 as f32, p2.1 as f32),
                        color.to_rgb(),
                    );
                }
            }
        }
    }

    DynamicImage::ImageRgb8(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn white_image(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb([255, 255, 255])))
    }

    /// 17 keypoint pairs, all at the origin except the two shoulders.
    fn shoulder_label(right_shoulder: (f32, f32)) -> String {
        let mut tokens = vec!["0".to_string()];
        for v in ["0.5", "0.5", "0.8", "0.8"] {
            tokens.push(v.to_string());
        }
        for i in 0..17 {
            let (x, y) = match i {
                5 => (0.2, 0.2),
                6 => right_shoulder,
                _ => (0.0, 0.0),
            };
            tokens.push(x.to_string());
            tokens.push(y.to_string());
        }
        tokens.join(" ")
    }

    #[test]
    fn test_no_records_leaves_image_unchanged() {
        let img = white_image(32, 32);
        let out = draw_annotations(&img, &[]);
        assert_eq!(img.to_rgb8().as_raw(), out.to_rgb8().as_raw());
    }

    #[test]
    fn test_box_outline_drawn() {
        let img = white_image(100, 100);
        let rec = LabelRecord::parse("0 0.5 0.5 0.2 0.4").unwrap();
        let out = draw_annotations(&img, &[rec]).to_rgb8();

        // Corner (40,30) lies on the outline, the box interior does not.
        assert_eq!(out.get_pixel(40, 30), &BOX_COLOR.to_rgb());
        assert_eq!(out.get_pixel(50, 50), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_skeleton_limb_drawn_between_detected_points() {
        let img = white_image(100, 100);
        let rec = LabelRecord::parse(&shoulder_label((0.8, 0.2))).unwrap();
        let out = draw_annotations(&img, &[rec]).to_rgb8();

        // Shoulders at (20,20) and (80,20); edge [6,7] is table entry 7.
        assert_eq!(out.get_pixel(50, 20), &LIMB_COLORS[7].to_rgb());
    }

    #[test]
    fn test_no_limb_when_endpoint_at_origin() {
        let img = white_image(100, 100);
        let rec = LabelRecord::parse(&shoulder_label((0.0, 0.0))).unwrap();
        let out = draw_annotations(&img, &[rec]).to_rgb8();

        assert_eq!(out.get_pixel(50, 20), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_keypoint_marker_drawn() {
        let img = white_image(100, 100);
        let rec = LabelRecord::parse(&shoulder_label((0.8, 0.2))).unwrap();
        let out = draw_annotations(&img, &[rec]).to_rgb8();

        assert_eq!(out.get_pixel(20, 22), &KEYPOINT_COLOR.to_rgb());
    }

    #[test]
    fn test_out_of_bounds_box_does_not_panic() {
        let img = white_image(10, 10);
        let rec = LabelRecord::parse("0 1.5 1.5 0.5 0.5").unwrap();
        let _ = draw_annotations(&img, &[rec]);
    }
}
