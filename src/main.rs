use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use ppm_raytracer::config::SceneConfig;
use ppm_raytracer::error::Result;
use ppm_raytracer::output::save_png;
use ppm_raytracer::render::render;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.log_level.clone().into());

    info!("ppm-raytracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Render failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut scene = match &args.scene {
        Some(path) => SceneConfig::load(path)?,
        None => {
            info!("No scene file given, rendering the classic two-sphere scene");
            SceneConfig::classic()
        }
    };

    // Command line values win over the scene file.
    if let Some(width) = args.width {
        scene.image.width = width;
    }
    if let Some(samples) = args.samples_per_pixel {
        scene.image.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        scene.image.max_depth = max_depth;
    }
    if args.no_gamma {
        scene.image.gamma_correction = false;
    }

    let mut settings = scene.render_settings()?;
    settings.seed = args.seed;
    settings.parallel = !args.single_threaded;
    settings.show_progress = args.progress;

    let camera = scene.camera()?;
    let world = scene.world()?;
    info!("Scene has {} object(s)", world.len());

    let image = render(&settings, &camera, &world)?;

    if args.output == "-" {
        image.write_ppm(BufWriter::new(io::stdout().lock()))?;
    } else if args.output.ends_with(".png") {
        save_png(&image.pixels, Path::new(&args.output), image.width, image.height)?;
    } else {
        let file = std::fs::File::create(&args.output)?;
        image.write_ppm(BufWriter::new(file))?;
        info!("Image saved as {}", args.output);
    }
    Ok(())
}
