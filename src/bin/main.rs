//! tiny-planet CLI
//!
//! Generate planet meshes, apply edits and query the field from the shell.

#![allow(clippy::needless_pass_by_value, clippy::uninlined_format_args)]

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use log::{error, info};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tiny_planet::io::{load_modifications, save_modifications};
#[cfg(feature = "cli")]
use tiny_planet::prelude::*;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tiny-planet")]
#[command(version = tiny_planet::VERSION)]
#[command(about = "Signed-distance planet terrain with surface nets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Mesh a planet and write it as OBJ
    Generate {
        /// Planet config (.json); defaults are used if omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output OBJ file
        #[arg(short, long)]
        output: PathBuf,
        /// Lattice samples per axis (overrides the config)
        #[arg(short, long)]
        resolution: Option<usize>,
        /// Noise permutation seed (overrides the config)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Edit list (.json) applied before --mine/--place
        #[arg(long)]
        edits: Option<PathBuf>,
        /// Carve a sphere: x,y,z,radius (repeatable)
        #[arg(long, value_parser = parse_brush, allow_hyphen_values = true)]
        mine: Vec<[f32; 4]>,
        /// Deposit a sphere: x,y,z,radius (repeatable, applied after --mine)
        #[arg(long, value_parser = parse_brush, allow_hyphen_values = true)]
        place: Vec<[f32; 4]>,
        /// Write field-gradient normals
        #[arg(long)]
        normals: bool,
        /// Write height-banded vertex colors
        #[arg(long)]
        colors: bool,
        /// Save the final edit list to this file
        #[arg(long)]
        save_edits: Option<PathBuf>,
    },

    /// Print distance and gravity direction at a point
    Sample {
        /// Point coordinates
        #[arg(allow_hyphen_values = true)]
        x: f32,
        #[arg(allow_hyphen_values = true)]
        y: f32,
        #[arg(allow_hyphen_values = true)]
        z: f32,
        /// Planet config (.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default planet config
    DefaultConfig {
        /// Output file
        #[arg(short, long, default_value = "planet.json")]
        output: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config,
            output,
            resolution,
            seed,
            edits,
            mine,
            place,
            normals,
            colors,
            save_edits,
        } => cmd_generate(GenerateArgs {
            config,
            output,
            resolution,
            seed,
            edits,
            mine,
            place,
            normals,
            colors,
            save_edits,
        }),
        Commands::Sample { x, y, z, config } => cmd_sample(Vec3::new(x, y, z), config),
        Commands::DefaultConfig { output } => cmd_default_config(output),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
struct GenerateArgs {
    config: Option<PathBuf>,
    output: PathBuf,
    resolution: Option<usize>,
    seed: Option<u64>,
    edits: Option<PathBuf>,
    mine: Vec<[f32; 4]>,
    place: Vec<[f32; 4]>,
    normals: bool,
    colors: bool,
    save_edits: Option<PathBuf>,
}

#[cfg(feature = "cli")]
fn parse_brush(s: &str) -> Result<[f32; 4], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f32>().map_err(|e| format!("{}: {}", v, e)))
        .collect::<Result<Vec<f32>, String>>()?;
    match values.as_slice() {
        [x, y, z, r] if *r > 0.0 => Ok([*x, *y, *z, *r]),
        [_, _, _, r] => Err(format!("radius must be positive, got {}", r)),
        _ => Err(format!("expected x,y,z,radius, got '{}'", s)),
    }
}

#[cfg(feature = "cli")]
fn load_or_default(path: Option<PathBuf>) -> Result<PlanetConfig, IoError> {
    match path {
        Some(path) => {
            info!("Loading config {}", path.display());
            load_config(&path)
        }
        None => Ok(PlanetConfig::default()),
    }
}

#[cfg(feature = "cli")]
fn cmd_generate(args: GenerateArgs) -> Result<(), IoError> {
    let mut config = load_or_default(args.config)?;
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    info!(
        "Generating planet: radius {}, resolution {}",
        config.radius, config.resolution
    );
    let mut planet = Planet::new(config)?;

    if let Some(path) = &args.edits {
        for edit in load_modifications(path)? {
            planet.apply(edit)?;
        }
    }
    for [x, y, z, r] in args.mine {
        planet.mine(Vec3::new(x, y, z), r)?;
    }
    for [x, y, z, r] in args.place {
        planet.place(Vec3::new(x, y, z), r)?;
    }

    let mesh = planet.mesh();
    let field = planet.field();
    let obj = ObjConfig {
        name: None,
        normals: args
            .normals
            .then(|| vertex_normals(|p| field.distance(p), mesh, 1e-3 * field.radius())),
        colors: args
            .colors
            .then(|| height_colors(mesh, field.center(), field.radius())),
    };
    export_obj(mesh, &args.output, &obj)?;
    info!(
        "Wrote {} ({} vertices, {} triangles)",
        args.output.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    if let Some(path) = &args.save_edits {
        save_modifications(planet.modifications(), path)?;
        info!("Saved {} edits to {}", planet.modifications().len(), path.display());
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_sample(point: Vec3, config: Option<PathBuf>) -> Result<(), IoError> {
    let config = load_or_default(config)?;
    let field = TerrainField::from_config(&config);
    let g = field.gravity_direction(point);

    println!("distance: {}", field.distance(point));
    println!("gravity:  ({}, {}, {})", g.x, g.y, g.z);
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_default_config(output: PathBuf) -> Result<(), IoError> {
    save_config(&PlanetConfig::default(), &output)?;
    println!("Wrote {}", output.display());
    Ok(())
}
