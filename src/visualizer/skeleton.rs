// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// Number of keypoints in the COCO-Pose layout.
pub const KEYPOINT_COUNT: usize = 17;

/// COCO-Pose skeleton structure (pairs of keypoint indices).
/// Defines which keypoints connect to form the pose skeleton.
///
/// Entries are 1-based (1=nose .. 17=right ankle) and are shifted down by one
/// when indexing the parsed keypoint list. The table assumes the 17-point
/// COCO ordering; labels with a different keypoint count or ordering produce
/// wrong or missing limbs.
pub const SKELETON: [[usize; 2]; 19] = [
    [16, 14], // left ankle to left knee
    [14, 12], // left knee to left hip
    [17, 15], // right ankle to right knee
    [15, 13], // right knee to right hip
    [12, 13], // left hip to right hip
    [6, 12],  // left shoulder to left hip
    [7, 13],  // right shoulder to right hip
    [6, 7],   // left shoulder to right shoulder
    [6, 8],   // left shoulder to left elbow
    [7, 9],   // right shoulder to right elbow
    [8, 10],  // left elbow to left wrist
    [9, 11],  // right elbow to right wrist
    [2, 3],   // left eye to right eye
    [1, 2],   // nose to left eye
    [1, 3],   // nose to right eye
    [2, 4],   // left eye to left ear
    [3, 5],   // right eye to right ear
    [4, 6],   // left ear to left shoulder
    [5, 7],   // right ear to right shoulder
];
