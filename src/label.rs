// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! YOLO-style pose label parsing.
//!
//! One label line per object:
//! `class_id x_center y_center width height [kp1_x kp1_y ... kp17_x kp17_y]`,
//! all geometric values normalized to [0,1] relative to the image dimensions.

/// A bounding box in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    /// Top-left x.
    pub x1: i32,
    /// Top-left y.
    pub y1: i32,
    /// Bottom-right x.
    pub x2: i32,
    /// Bottom-right y.
    pub y2: i32,
}

/// One parsed object from a label file.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord {
    /// Object class id.
    pub class_id: u32,
    /// Normalized box center x.
    pub x_center: f32,
    /// Normalized box center y.
    pub y_center: f32,
    /// Normalized box width.
    pub width: f32,
    /// Normalized box height.
    pub height: f32,
    /// Normalized keypoint positions, in label order.
    pub keypoints: Vec<(f32, f32)>,
}

impl LabelRecord {
    /// Parse one label line.
    ///
    /// Returns `None` for malformed lines: fewer than 5 whitespace-separated
    /// tokens, or a token that fails numeric parsing. A trailing unpaired
    /// keypoint token is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 5 {
            return None;
        }

        let class_id = parts[0].parse::<u32>().ok()?;
        let x_center = parts[1].parse::<f32>().ok()?;
        let y_center = parts[2].parse::<f32>().ok()?;
        let width = parts[3].parse::<f32>().ok()?;
        let height = parts[4].parse::<f32>().ok()?;

        let mut keypoints = Vec::with_capacity((parts.len() - 5) / 2);
        for pair in parts[5..].chunks_exact(2) {
            let x = pair[0].parse::<f32>().ok()?;
            let y = pair[1].parse::<f32>().ok()?;
            keypoints.push((x, y));
        }

        Some(Self {
            class_id,
            x_center,
            y_center,
            width,
            height,
            keypoints,
        })
    }

    /// Denormalize the box against the image dimensions.
    ///
    /// Corners are `center -/+ size/2`, truncated to integer pixels.
    #[must_use]
    pub fn pixel_box(&self, img_w: u32, img_h: u32) -> PixelBox {
        let abs_x_center = self.x_center * img_w as f32;
        let abs_y_center = self.y_center * img_h as f32;
        let abs_width = self.width * img_w as f32;
        let abs_height = self.height * img_h as f32;

        PixelBox {
            x1: (abs_x_center - abs_width / 2.0) as i32,
            y1: (abs_y_center - abs_height / 2.0) as i32,
            x2: (abs_x_center + abs_width / 2.0) as i32,
            y2: (abs_y_center + abs_height / 2.0) as i32,
        }
    }

    /// Denormalize the keypoints against the image dimensions.
    #[must_use]
    pub fn pixel_keypoints(&self, img_w: u32, img_h: u32) -> Vec<(i32, i32)> {
        self.keypoints
            .iter()
            .map(|&(x, y)| ((x * img_w as f32) as i32, (y * img_h as f32) as i32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_box_only() {
        let rec = LabelRecord::parse("0 0.5 0.5 0.2 0.4").unwrap();
        assert_eq!(rec.class_id, 0);
        assert!(rec.keypoints.is_empty());
    }

    #[test]
    fn test_parse_too_few_tokens() {
        assert!(LabelRecord::parse("").is_none());
        assert!(LabelRecord::parse("0 0.5").is_none());
        assert!(LabelRecord::parse("0 0.5 0.5 0.2").is_none());
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(LabelRecord::parse("0 0.5 x 0.2 0.4").is_none());
        assert!(LabelRecord::parse("person 0.5 0.5 0.2 0.4").is_none());
    }

    #[test]
    fn test_parse_keypoint_pairs() {
        let rec = LabelRecord::parse("0 0.5 0.5 0.2 0.4 0.1 0.2 0.3 0.4").unwrap();
        assert_eq!(rec.keypoints, vec![(0.1, 0.2), (0.3, 0.4)]);
    }

    #[test]
    fn test_parse_trailing_odd_token_ignored() {
        let rec = LabelRecord::parse("0 0.5 0.5 0.2 0.4 0.1 0.2 0.9").unwrap();
        assert_eq!(rec.keypoints, vec![(0.1, 0.2)]);
    }

    #[test]
    fn test_pixel_box_corners() {
        let rec = LabelRecord::parse("0 0.5 0.5 0.2 0.4").unwrap();
        let b = rec.pixel_box(100, 100);
        assert_eq!(b, PixelBox { x1: 40, y1: 30, x2: 60, y2: 70 });
    }

    #[test]
    fn test_pixel_box_truncates() {
        let rec = LabelRecord::parse("0 0.505 0.505 0.2 0.2").unwrap();
        let b = rec.pixel_box(100, 100);
        // 50.5 - 10 = 40.5 -> 40, 50.5 + 10 = 60.5 -> 60
        assert_eq!(b, PixelBox { x1: 40, y1: 40, x2: 60, y2: 60 });
    }

    #[test]
    fn test_pixel_keypoints() {
        let rec = LabelRecord::parse("0 0.5 0.5 0.2 0.4 0.25 0.75 0.0 0.0").unwrap();
        assert_eq!(rec.pixel_keypoints(200, 100), vec![(50, 75), (0, 0)]);
    }
}
