// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Video frame extraction.
//!
//! Reads a video file frame by frame and writes every frame as a numbered
//! JPEG image, logging video properties and progress to a per-run log file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Instant;

use image::DynamicImage;
use ndarray::Array3;
use video_rs::decode::Decoder;

use crate::error::{Result, ToolError};
use crate::logging::RunLogger;

static INIT: Once = Once::new();

/// Initialize the video stack once, silencing FFmpeg logs below error level.
fn init_video() {
    INIT.call_once(|| {
        if let Err(e) = video_rs::init() {
            eprintln!("Failed to initialize video-rs: {e}");
        }
        ffmpeg_next::log::set_level(ffmpeg_next::log::Level::Error);
    });
}

/// Properties of the input video, logged before extraction starts.
///
/// `frame_count` comes from container metadata and may under- or over-count;
/// it is used for progress percentages only, never as a loop bound.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: f32,
    /// Frame count as reported by the container (0 if unknown).
    pub frame_count: u64,
    /// Duration in seconds (0 if unknown).
    pub duration_secs: f64,
    /// Codec identifier, e.g. `H264`.
    pub codec: String,
    /// Video file size in bytes.
    pub file_size: u64,
}

impl VideoMetadata {
    /// Probe the container for metadata the decoder does not expose.
    fn probe(path: &Path, decoder: &Decoder) -> Result<Self> {
        let file_size = fs::metadata(path)?.len();
        let (width, height) = decoder.size();
        let fps = decoder.frame_rate();

        let input = ffmpeg_next::format::input(&path)
            .map_err(|e| ToolError::VideoError(format!("failed to probe container: {e}")))?;

        let duration_secs = if input.duration() > 0 {
            input.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
        } else {
            0.0
        };

        let stream = input
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| ToolError::VideoError("no video stream found".to_string()))?;

        let codec = format!("{:?}", stream.parameters().id());

        // Containers do not always carry nb_frames; fall back to duration * fps.
        let mut frame_count = stream.frames().max(0) as u64;
        if frame_count == 0 && duration_secs > 0.0 && fps > 0.0 {
            frame_count = (duration_secs * f64::from(fps)).round() as u64;
        }

        Ok(Self {
            width,
            height,
            fps,
            frame_count,
            duration_secs,
            codec,
            file_size,
        })
    }

    fn log(&self, log: &mut RunLogger) {
        log_rule(log);
        log.info("VIDEO PROPERTIES");
        log_rule(log);
        log.info(&format!(
            "Resolution:       {} x {} pixels",
            self.width, self.height
        ));
        log.info(&format!("Frame Rate (FPS): {:.2}", self.fps));
        log.info(&format!("Total Frames:     {}", self.frame_count));
        log.info(&format!(
            "Duration:         {:.2} seconds ({:.2} minutes)",
            self.duration_secs,
            self.duration_secs / 60.0
        ));
        log.info(&format!("Codec:            {}", self.codec));
        log.info(&format!(
            "File Size:        {:.2} MB",
            self.file_size as f64 / (1024.0 * 1024.0)
        ));
        log_rule(log);
    }
}

/// Outcome of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    /// Number of frames written.
    pub frames_written: u64,
    /// Wall-clock extraction time in seconds.
    pub elapsed_secs: f64,
    /// Path of the run's log file.
    pub log_path: PathBuf,
}

/// Output path for frame number `index`.
pub fn frame_filename(output_dir: &Path, index: u64) -> PathBuf {
    output_dir.join(format!("frame_{index:06}.jpg"))
}

fn log_rule(log: &mut RunLogger) {
    log.info(&"=".repeat(60));
}

/// Extract every frame of `video_path` into `output_dir` as numbered JPEGs.
///
/// The output directory is created before anything else so the log file can
/// always be written, including on failure paths. Reading stops when the
/// decoder signals end-of-stream, not when the container's frame count is
/// reached.
///
/// # Errors
///
/// Returns an error if the video file is missing or cannot be opened, or if
/// a frame cannot be written. No frames are written in the first two cases.
pub fn extract_frames(video_path: &Path, output_dir: &Path) -> Result<ExtractionSummary> {
    init_video();

    fs::create_dir_all(output_dir)?;
    let mut log = RunLogger::create(output_dir)?;

    log_rule(&mut log);
    log.info("VIDEO FRAME EXTRACTION STARTED");
    log_rule(&mut log);

    if !video_path.exists() {
        let msg = format!("Video file '{}' not found!", video_path.display());
        log.error(&msg);
        return Err(ToolError::VideoError(msg));
    }

    log.info(&format!("Input video file: {}", video_path.display()));

    let mut decoder = match Decoder::new(video_path) {
        Ok(d) => d,
        Err(e) => {
            log.error("Could not open video file!");
            return Err(ToolError::VideoError(format!(
                "could not open '{}': {e}",
                video_path.display()
            )));
        }
    };

    let metadata = match VideoMetadata::probe(video_path, &decoder) {
        Ok(m) => m,
        Err(e) => {
            log.error(&format!("Could not read video properties: {e}"));
            return Err(e);
        }
    };
    metadata.log(&mut log);

    log.info(&format!(
        "Output folder: {}",
        absolute_display(output_dir)
    ));
    log.info("Frame format: JPEG");
    log.info("Starting frame extraction...");
    log.info("");

    let mut extracted: u64 = 0;
    let start = Instant::now();

    loop {
        // The decoder reports end-of-stream as an error; the container frame
        // count is never used as a loop bound.
        let frame = match decoder.decode() {
            Ok((_ts, frame)) => frame,
            Err(_) => break,
        };

        let image = frame_to_image(&frame)?;
        image.save(frame_filename(output_dir, extracted))?;
        extracted += 1;

        if extracted % 100 == 0 || extracted == metadata.frame_count {
            if metadata.frame_count > 0 {
                let progress = extracted as f64 / metadata.frame_count as f64 * 100.0;
                log.info(&format!(
                    "Progress: {extracted}/{} frames ({progress:.1}%)",
                    metadata.frame_count
                ));
            } else {
                log.info(&format!("Progress: {extracted} frames"));
            }
        }
    }

    let elapsed_secs = start.elapsed().as_secs_f64();
    let average = if elapsed_secs > 0.0 {
        extracted as f64 / elapsed_secs
    } else {
        extracted as f64
    };

    log.info("");
    log_rule(&mut log);
    log.info("EXTRACTION COMPLETE!");
    log_rule(&mut log);
    log.info(&format!("Total frames extracted: {extracted}"));
    log.info(&format!(
        "Extraction time: {:.2} seconds ({:.2} minutes)",
        elapsed_secs,
        elapsed_secs / 60.0
    ));
    log.info(&format!("Average speed: {average:.2} frames/second"));
    log.info(&format!("Frames saved in: {}/", absolute_display(output_dir)));
    log_rule(&mut log);

    let log_path = log.finish()?;

    Ok(ExtractionSummary {
        frames_written: extracted,
        elapsed_secs,
        log_path,
    })
}

fn absolute_display(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Convert a decoded HWC u8 frame to a `DynamicImage`.
fn frame_to_image(arr: &Array3<u8>) -> Result<DynamicImage> {
    let shape = arr.shape();
    let height = u32::try_from(shape[0])
        .map_err(|_| ToolError::ImageError("Image height exceeds u32::MAX".to_string()))?;
    let width = u32::try_from(shape[1])
        .map_err(|_| ToolError::ImageError("Image width exceeds u32::MAX".to_string()))?;

    let mut rgb_data = Vec::with_capacity((height * width * 3) as usize);
    for y in 0..height as usize {
        for x in 0..width as usize {
            rgb_data.push(arr[[y, x, 0]]);
            rgb_data.push(arr[[y, x, 1]]);
            rgb_data.push(arr[[y, x, 2]]);
        }
    }

    let img_buffer = image::RgbImage::from_raw(width, height, rgb_data).ok_or_else(|| {
        ToolError::ImageError("Failed to create image from video frame".to_string())
    })?;

    Ok(DynamicImage::ImageRgb8(img_buffer))
}
