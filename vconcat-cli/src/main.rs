//! Main entry point for the vconcat CLI.
//!
//! Handles argument parsing, logging setup, input discovery, the
//! interactive overwrite confirmation, and dispatch into vconcat-core.

mod cli;
mod overwrite;

use clap::Parser;
use cli::Cli;
use console::style;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use vconcat_core::external::{check_dependency, ffmpeg};
use vconcat_core::planning::{PlanOptions, plan_concat};
use vconcat_core::{CoreError, CoreResult, VideoCollection, find_video_files};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", style("error:").red().bold());
        process::exit(1);
    }
}

fn run(cli: Cli) -> CoreResult<()> {
    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")?;

    let files = resolve_inputs(&cli)?;
    let collection = VideoCollection::new(files);

    if cli.verbose {
        let infos = collection.load_all()?;
        for (index, (video, info)) in collection.videos().iter().zip(infos).enumerate() {
            log::debug!("[#{index}] {} ({info:?})", video.path().display());
        }
    }

    let options = PlanOptions {
        output: cli.output.clone(),
        preset: cli.preset.clone(),
        list_dir: None,
    };
    let plan = plan_concat(&collection, cli.mode.strategy(), &options)?;
    let command = ffmpeg::command_for_plan(&plan);

    if cli.print {
        println!("{}", ffmpeg::render(&command));
        return Ok(());
    }

    overwrite::ensure_overwrite(&cli.output, cli.yes)?;

    log::info!("Concatenating {} video(s)...", collection.len());
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Running ffmpeg...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = ffmpeg::run(command);
    spinner.finish_and_clear();
    result?;

    println!(
        "{}",
        style(format!(
            "Videos concatenated successfully into {}",
            cli.output.display()
        ))
        .green()
    );
    Ok(())
}

/// Uses the given files, or every video file in the current directory when
/// none are given. The output path never counts as an input.
fn resolve_inputs(cli: &Cli) -> CoreResult<Vec<PathBuf>> {
    let mut files = if cli.files.is_empty() {
        log::info!("No files were provided, using all video files in current directory.");
        find_video_files(Path::new("."))?
    } else {
        cli.files.clone()
    };

    files.retain(|file| file != &cli.output);
    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }
    Ok(files)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
