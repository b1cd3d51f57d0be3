use std::{path::Path, time::Instant};

use anyhow::{Context, Result};
use clap::{App, Arg};

use raytracer::texture::SamplingMode;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("Raytracing Study")
        .version("0.1")
        .about("Renders two spheres inside a textured box with a recursive Whitted raytracer")
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .default_value("1280"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .default_value("720"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .short("d")
                .help("Reflection/refraction bounces allowed past the primary ray")
                .default_value("5"),
        )
        .arg(
            Arg::with_name("textures")
                .long("textures")
                .short("t")
                .value_name("DIR")
                .help("Directory holding negy/posz/posx/negz/negx/posy.jpg; checkerboards are used when omitted"),
        )
        .arg(
            Arg::with_name("sampling")
                .long("sampling")
                .possible_values(&["point", "linear"])
                .default_value("linear"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("FILE")
                .default_value("render.png"),
        )
        .get_matches();

    let width: u32 = matches
        .value_of("width")
        .unwrap_or_default()
        .parse()
        .context("--width must be a positive integer")?;
    let height: u32 = matches
        .value_of("height")
        .unwrap_or_default()
        .parse()
        .context("--height must be a positive integer")?;
    let depth: i32 = matches
        .value_of("depth")
        .unwrap_or_default()
        .parse()
        .context("--depth must be an integer")?;
    let output = matches.value_of("output").unwrap_or("render.png");

    let start = Instant::now();
    let mut scene = raytracer::scenes::study(matches.value_of("textures").map(Path::new))
        .context("failed to build the scene")?;
    scene.options.sampling = match matches.value_of("sampling") {
        Some("point") => SamplingMode::Point,
        _ => SamplingMode::Linear,
    };
    log::info!("Scene constructed in {:.3}s", start.elapsed().as_secs_f32());

    scene
        .render_to(output, width, height, depth)
        .with_context(|| format!("failed to render to {}", output))?;

    log::info!("Operation complete in {:.3}s", start.elapsed().as_secs_f32());

    Ok(())
}
