#[macro_use]
extern crate log;

use std::path::PathBuf;

use ::clap::Parser;
use ::simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use texcloud::ConversionBuilder;

/// Samples random points on the surface of a textured OBJ mesh and writes
/// them as an `x y z r g b` point list.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// OBJ file to convert, materials and textures are resolved relative to it
    input: PathBuf,

    /// Where to write the XYZRGB point list, overwritten if it exists
    #[arg(short, long)]
    output: PathBuf,

    /// Points per square unit of surface area
    #[arg(short, long, default_value_t = 1000.0)]
    density: f64,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Image to use for all surfaces instead of the diffuse textures of the materials
    #[arg(short, long)]
    texture: Option<PathBuf>,

    /// Do not place points on triangles with zero area
    #[arg(long)]
    skip_degenerate: bool,

    /// Sample on a single thread
    #[arg(long)]
    serial: bool,

    /// Additionally write the points as OBJ with vertex colors
    #[arg(long)]
    obj_dump: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("Logger could not be initialized");
    }

    let mut builder = ConversionBuilder::new()
        .scene(args.input)
        .density(args.density)
        .skip_degenerate(args.skip_degenerate)
        .parallel(!args.serial)
        .add_sink_xyz(args.output);

    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    if let Some(texture) = args.texture {
        builder = builder.texture_override(texture);
    }

    if let Some(obj_dump) = args.obj_dump {
        builder = builder.add_sink_obj(obj_dump);
    }

    // Bad input is reported, but is not a crash
    match builder.build().and_then(|conversion| conversion.run()) {
        Ok(cloud) => info!("Done, wrote {} points", cloud.len()),
        Err(err) => error!("No point cloud written: {}", err)
    }
}
