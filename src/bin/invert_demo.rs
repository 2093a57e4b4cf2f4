use grid_par::config::invert::load_config;
use grid_par::diagnostics::{RunSummary, TimingBreakdown};
use grid_par::engine::Engine;
use grid_par::image::io::{load_nrgba_image, save_nrgba_image, write_json_file};
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let engine = Engine::new(config.engine).map_err(|e| format!("Invalid engine options: {e}"))?;

    let mut timing = TimingBreakdown::default();
    let mut image = timing.measure("load", || load_nrgba_image(&config.input))?;
    let partition = engine.plan(image.width(), image.height());
    info!(
        "Inverting {}x{} image with {:?} ({} tasks)",
        image.width(),
        image.height(),
        config.engine.strategy,
        partition.task_count()
    );

    let keep_alpha = config.keep_alpha;
    timing.measure("invert", || {
        engine.read_write(&mut image.view_mut(), |_, _, [r, g, b, a]| {
            let a = if keep_alpha { a } else { 255 - a };
            [255 - r, 255 - g, 255 - b, a]
        })
    });
    timing.measure("save", || save_nrgba_image(&image, &config.output.image))?;
    info!("Saved inverted image to {}", config.output.image.display());

    if let Some(path) = &config.output.summary_json {
        let summary = RunSummary::new(config.engine, &partition, timing);
        write_json_file(path, &summary)?;
        info!("Saved run summary to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: invert_demo <config.json>".to_string()
}
