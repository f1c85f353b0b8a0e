//! FFmpeg invocation: plan-to-command assembly and process execution.
//!
//! Execution treats ffmpeg as a black box. Its progress and log events are
//! surfaced through the `log` facade; only the exit status is interpreted,
//! with engine error lines buffered into the failure message.

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::planning::ConcatPlan;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

/// Assembles the ffmpeg command executing `plan`. No process is spawned.
#[must_use]
pub fn command_for_plan(plan: &ConcatPlan) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.arg("-hide_banner");

    match plan {
        ConcatPlan::DemuxCopy { list_file, output } => {
            cmd.args(["-f", "concat"])
                .args(["-safe", "0"])
                .input(list_file.to_string_lossy().as_ref())
                .args(["-c", "copy"])
                .output(output.to_string_lossy().as_ref());
        }
        ConcatPlan::DemuxReenc {
            list_file,
            width,
            height,
            encode,
            output,
        } => {
            cmd.args(["-f", "concat"])
                .args(["-safe", "0"])
                .args(["-fflags", "+genpts"])
                .input(list_file.to_string_lossy().as_ref())
                .args(["-avoid_negative_ts", "make_zero"])
                .args(["-fps_mode", "vfr"])
                .args(["-c:v", &encode.video_codec])
                .args(["-preset", &encode.preset])
                .args(["-crf", &encode.crf.to_string()])
                .args(["-vf", &format!("scale={width}:{height}")])
                .args(["-pix_fmt", &encode.pix_fmt])
                .args(["-c:a", &encode.audio_codec])
                .args(["-b:a", &encode.audio_bitrate])
                .output(output.to_string_lossy().as_ref());
        }
        ConcatPlan::FilterConcat {
            inputs,
            filtergraph,
            encode,
            output,
        } => {
            for input in inputs {
                cmd.input(input.to_string_lossy().as_ref());
            }
            cmd.args(["-filter_complex", filtergraph])
                .args(["-map", "[outv]"])
                .args(["-map", "[outa]"])
                .args(["-c:v", &encode.video_codec])
                .args(["-preset", &encode.preset])
                .args(["-crf", &encode.crf.to_string()])
                .args(["-pix_fmt", &encode.pix_fmt])
                .args(["-c:a", &encode.audio_codec])
                .args(["-b:a", &encode.audio_bitrate])
                .output(output.to_string_lossy().as_ref());
        }
    }

    cmd
}

/// Spawns `cmd` and waits for it to finish.
///
/// Engine error lines are collected and attached to the `CommandFailed`
/// error when ffmpeg exits non-zero.
pub fn run(mut cmd: FfmpegCommand) -> CoreResult<()> {
    log::debug!("Running: {}", render(&cmd));

    let mut child = cmd.spawn().map_err(|e| command_start_error("ffmpeg", e))?;

    let mut engine_errors = String::new();
    let events = child
        .iter()
        .map_err(|e| command_wait_error("ffmpeg", std::io::Error::other(e.to_string())))?;
    for event in events {
        match event {
            FfmpegEvent::Progress(progress) => {
                log::debug!(
                    "ffmpeg progress: frame={} fps={} time={}",
                    progress.frame,
                    progress.fps,
                    progress.time
                );
            }
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, message) => {
                engine_errors.push_str(&message);
                engine_errors.push('\n');
            }
            FfmpegEvent::Error(message) => {
                engine_errors.push_str(&message);
                engine_errors.push('\n');
            }
            _ => {}
        }
    }

    let status = child.wait().map_err(|e| command_wait_error("ffmpeg", e))?;
    if status.success() {
        log::debug!("ffmpeg finished successfully");
        Ok(())
    } else {
        Err(command_failed_error(
            "ffmpeg",
            status,
            engine_errors.trim_end().to_string(),
        ))
    }
}

/// Renders `cmd` as a copy-pasteable shell line for the print-only mode.
#[must_use]
pub fn render(cmd: &FfmpegCommand) -> String {
    let mut rendered = String::from("ffmpeg");
    for arg in cmd.get_args() {
        let arg = arg.to_string_lossy();
        rendered.push(' ');
        if arg.is_empty() || arg.contains([' ', ';', '\'', '[', ']']) {
            rendered.push('"');
            rendered.push_str(&arg);
            rendered.push('"');
        } else {
            rendered.push_str(&arg);
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::EncodeParams;
    use std::path::PathBuf;

    #[test]
    fn test_demux_copy_command() {
        let plan = ConcatPlan::DemuxCopy {
            list_file: PathBuf::from("/tmp/list.txt"),
            output: PathBuf::from("joined.mp4"),
        };
        let rendered = render(&command_for_plan(&plan));
        assert!(rendered.starts_with("ffmpeg -hide_banner -f concat -safe 0 -i /tmp/list.txt"));
        assert!(rendered.contains("-c copy"));
        assert!(rendered.ends_with("joined.mp4"));
    }

    #[test]
    fn test_demux_reenc_command() {
        let plan = ConcatPlan::DemuxReenc {
            list_file: PathBuf::from("/tmp/list.txt"),
            width: 1920,
            height: 1080,
            encode: EncodeParams::with_preset("fast"),
            output: PathBuf::from("joined.mp4"),
        };
        let rendered = render(&command_for_plan(&plan));
        assert!(rendered.contains("-fflags +genpts"));
        assert!(rendered.contains("-avoid_negative_ts make_zero"));
        assert!(rendered.contains("-fps_mode vfr"));
        assert!(rendered.contains("-vf scale=1920:1080"));
        assert!(rendered.contains("-c:v libx264 -preset fast -crf 23"));
    }

    #[test]
    fn test_filter_concat_command() {
        let plan = ConcatPlan::FilterConcat {
            inputs: vec![PathBuf::from("a.mp4"), PathBuf::from("b.mp4")],
            filtergraph: "[v0][a0][v1][a1]concat=n=2:v=1:a=1[outv][outa]".to_string(),
            encode: EncodeParams::with_preset("ultrafast"),
            output: PathBuf::from("joined.mp4"),
        };
        let rendered = render(&command_for_plan(&plan));
        assert!(rendered.contains("-i a.mp4 -i b.mp4"));
        assert!(rendered.contains(
            "-filter_complex \"[v0][a0][v1][a1]concat=n=2:v=1:a=1[outv][outa]\""
        ));
        assert!(rendered.contains("-map \"[outv]\" -map \"[outa]\""));
        assert!(rendered.contains("-preset ultrafast"));
        assert!(rendered.contains("-c:a aac -b:a 192k"));
    }

    #[test]
    fn test_render_quotes_args_with_spaces() {
        let plan = ConcatPlan::DemuxCopy {
            list_file: PathBuf::from("/tmp/my list.txt"),
            output: PathBuf::from("my output.mp4"),
        };
        let rendered = render(&command_for_plan(&plan));
        assert!(rendered.contains("-i \"/tmp/my list.txt\""));
        assert!(rendered.ends_with("\"my output.mp4\""));
    }
}
