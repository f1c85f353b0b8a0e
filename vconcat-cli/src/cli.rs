//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vconcat_core::planning::Strategy;
use vconcat_core::{DEFAULT_OUTPUT, DEFAULT_PRESET, PRESETS};

#[derive(Parser, Debug)]
#[command(
    name = "vconcat",
    author,
    version,
    about = "Concatenate video files using ffmpeg",
    long_about = "Concatenates video files into one output, picking between a \
lossless demuxer-level join and a normalizing re-encode via vconcat-core."
)]
pub struct Cli {
    /// Concatenation mode
    #[arg(short, long, value_enum, default_value_t = Mode::DemuxCopy)]
    pub mode: Mode,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// x264 preset used when re-encoding
    #[arg(
        short,
        long,
        value_name = "PRESET",
        value_parser = clap::builder::PossibleValuesParser::new(PRESETS),
        default_value = DEFAULT_PRESET
    )]
    pub preset: String,

    /// Overwrite existing files without asking
    #[arg(long)]
    pub yes: bool,

    /// Print the ffmpeg command instead of running it
    #[arg(long)]
    pub print: bool,

    /// Show debug output, including per-file probe results
    #[arg(long)]
    pub verbose: bool,

    /// Input files, order matters (defaults to all video files in the
    /// current directory, oldest first)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Lossless demuxer-level concat of the 60 fps inputs
    DemuxCopy,
    /// Demuxer-level concat of the 60 fps inputs, then one re-encode
    DemuxReenc,
    /// Normalizing filtergraph concat of all inputs
    Filter,
}

impl Mode {
    pub fn strategy(self) -> Strategy {
        match self {
            Mode::DemuxCopy => Strategy::DemuxCopy,
            Mode::DemuxReenc => Strategy::DemuxReenc,
            Mode::Filter => Strategy::FilterConcat,
        }
    }
}

// Needed for default_value_t; prints the same name clap parses.
impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mode::DemuxCopy => "demux-copy",
            Mode::DemuxReenc => "demux-reenc",
            Mode::Filter => "filter",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["vconcat"]);
        assert_eq!(cli.mode, Mode::DemuxCopy);
        assert_eq!(cli.output, PathBuf::from("concat.mp4"));
        assert_eq!(cli.preset, "fast");
        assert!(!cli.yes);
        assert!(!cli.print);
        assert!(!cli.verbose);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_parse_mode_and_files() {
        let cli = Cli::parse_from(["vconcat", "--mode", "filter", "a.mp4", "b.mkv"]);
        assert_eq!(cli.mode, Mode::Filter);
        assert_eq!(cli.mode.strategy(), Strategy::FilterConcat);
        assert_eq!(
            cli.files,
            vec![PathBuf::from("a.mp4"), PathBuf::from("b.mkv")]
        );
    }

    #[test]
    fn test_parse_flags_and_preset() {
        let cli = Cli::parse_from([
            "vconcat",
            "-m",
            "demux-reenc",
            "-o",
            "out.mp4",
            "-p",
            "veryslow",
            "--yes",
            "--print",
            "--verbose",
        ]);
        assert_eq!(cli.mode, Mode::DemuxReenc);
        assert_eq!(cli.output, PathBuf::from("out.mp4"));
        assert_eq!(cli.preset, "veryslow");
        assert!(cli.yes);
        assert!(cli.print);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_preset() {
        let result = Cli::try_parse_from(["vconcat", "--preset", "warp-speed"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["vconcat", "--mode", "overlay"]);
        assert!(result.is_err());
    }
}
