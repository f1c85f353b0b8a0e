//! Synthesis of the normalization filtergraph.
//!
//! Every input becomes one video chain (scale into the target canvas
//! preserving aspect ratio, square pixels, yuv420p, letterboxed onto a
//! black background) and one audio chain (normalized audio, or synthesized
//! silence of the source's duration when it has none), so the final concat
//! stage always sees exactly one video and one audio pad per segment.
//!
//! The synthesizer performs no I/O. Segment labels are derived from the
//! index passed by the caller, so independent planning runs cannot collide.

use crate::error::{CoreError, CoreResult};
use crate::media::VideoInfo;

/// Builder for a filter_complex expression: ordered stages rendered to the
/// semicolon-joined wire format at the end.
#[derive(Debug, Default)]
pub struct FilterGraph {
    stages: Vec<String>,
}

impl FilterGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter stage. Empty stages are ignored.
    pub fn push(&mut self, stage: impl Into<String>) {
        let stage = stage.into();
        if !stage.is_empty() {
            self.stages.push(stage);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Renders the graph in the form ffmpeg's -filter_complex expects.
    #[must_use]
    pub fn build(self) -> String {
        self.stages.join(";")
    }
}

/// Produces the filter stages normalizing input `index` onto a
/// `target_width` x `target_height` canvas, labeled `v{index}`/`a{index}`.
///
/// The target dimensions come from an already probed video, so a
/// non-positive canvas is a caller bug, not a user error.
pub fn segment_filters(
    index: usize,
    info: &VideoInfo,
    target_width: u32,
    target_height: u32,
) -> CoreResult<Vec<String>> {
    if target_width == 0 || target_height == 0 {
        return Err(CoreError::InvariantViolation(format!(
            "target canvas must have positive dimensions, got {target_width}x{target_height}"
        )));
    }

    let mut stages = Vec::with_capacity(4);

    // Scale to fit the canvas without exceeding it, then center the result
    // on a black background of exactly the canvas size.
    stages.push(format!(
        "[{index}:v]scale={target_width}:{target_height}:force_original_aspect_ratio=decrease,\
         setsar=1,format=yuv420p[vid{index}]"
    ));
    stages.push(format!(
        "color=c=black:s={target_width}x{target_height}:d={}[bg{index}]",
        info.duration_secs
    ));
    stages.push(format!(
        "[bg{index}][vid{index}]overlay=(W-w)/2:(H-h)/2[v{index}]"
    ));

    if info.has_audio {
        stages.push(format!(
            "[{index}:a]aformat=sample_fmts=fltp:sample_rates=48000:channel_layouts=stereo[a{index}]"
        ));
    } else {
        // The concat stage expects an audio pad per segment, so a silent
        // track of the source's duration stands in.
        stages.push(format!("aevalsrc=0:d={}[a{index}]", info.duration_secs));
    }

    Ok(stages)
}

/// Renders the final concat stage joining `segments` labeled pairs into
/// `[outv]`/`[outa]`.
#[must_use]
pub fn concat_stage(segments: usize) -> String {
    let pads: String = (0..segments).map(|i| format!("[v{i}][a{i}]")).collect();
    format!("{pads}concat=n={segments}:v=1:a=1[outv][outa]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(has_audio: bool, duration_secs: f64) -> VideoInfo {
        VideoInfo {
            width: 1280,
            height: 720,
            duration_secs,
            frame_rate: 30.0,
            has_audio,
        }
    }

    #[test]
    fn test_segment_filters_video_chain() {
        let stages = segment_filters(0, &info(true, 8.0), 1920, 1080).unwrap();
        assert_eq!(stages.len(), 4);
        assert_eq!(
            stages[0],
            "[0:v]scale=1920:1080:force_original_aspect_ratio=decrease,setsar=1,format=yuv420p[vid0]"
        );
        assert_eq!(stages[1], "color=c=black:s=1920x1080:d=8[bg0]");
        assert_eq!(stages[2], "[bg0][vid0]overlay=(W-w)/2:(H-h)/2[v0]");
    }

    #[test]
    fn test_segment_filters_audio_chain() {
        let stages = segment_filters(2, &info(true, 8.0), 1920, 1080).unwrap();
        assert_eq!(
            stages[3],
            "[2:a]aformat=sample_fmts=fltp:sample_rates=48000:channel_layouts=stereo[a2]"
        );
    }

    #[test]
    fn test_segment_filters_synthesizes_silence() {
        let stages = segment_filters(1, &info(false, 12.5), 1920, 1080).unwrap();
        assert_eq!(stages[3], "aevalsrc=0:d=12.5[a1]");
    }

    #[test]
    fn test_segment_filters_labels_follow_index() {
        let stages = segment_filters(7, &info(false, 3.0), 640, 480).unwrap();
        assert!(stages[0].starts_with("[7:v]"));
        assert!(stages[0].ends_with("[vid7]"));
        assert!(stages[2].ends_with("[v7]"));
        assert!(stages[3].ends_with("[a7]"));
    }

    #[test]
    fn test_segment_filters_rejects_degenerate_canvas() {
        let result = segment_filters(0, &info(true, 8.0), 0, 1080);
        assert!(matches!(result, Err(CoreError::InvariantViolation(_))));
        let result = segment_filters(0, &info(true, 8.0), 1920, 0);
        assert!(matches!(result, Err(CoreError::InvariantViolation(_))));
    }

    #[test]
    fn test_concat_stage() {
        assert_eq!(
            concat_stage(3),
            "[v0][a0][v1][a1][v2][a2]concat=n=3:v=1:a=1[outv][outa]"
        );
        assert_eq!(concat_stage(1), "[v0][a0]concat=n=1:v=1:a=1[outv][outa]");
    }

    #[test]
    fn test_filter_graph_joins_with_semicolons() {
        let mut graph = FilterGraph::new();
        graph.push("a");
        graph.push("");
        graph.push("b");
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.build(), "a;b");
    }

    #[test]
    fn test_filter_graph_empty() {
        let graph = FilterGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.build(), "");
    }
}
