//! `pathmesh` CLI: triangulate one SVG path and print its vertices as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::info;

use pathmesh_core::triangulate::TriangulationEngine;
use pathmesh_core::{
    EarcutEngine, ErrorKind, HoleOptions, HoleStrategy, Mesh, MissingHolePolicy, Pipeline,
    PipelineError, PipelineOptions, PipelineResult,
};
use pathmesh_svg::{LookupOptions, read_paths, select_path};

#[derive(Parser)]
#[command(version, about = "Triangulate an SVG path into a flat vertex list")]
struct Cli {
    /// SVG file to read
    file: PathBuf,

    /// Id of the path to mesh; required when the file has several paths
    id: Option<String>,

    /// Samples per curve, endpoints included
    #[arg(long, value_name = "N", default_value_t = 5, value_parser = clap::value_parser!(u32).range(2..))]
    segments: u32,

    /// Seed for the random hole search
    #[arg(long, value_name = "S")]
    seed: Option<u64>,

    /// Ray origin distance from a hole's bounding box, as a fraction of its size
    #[arg(long, value_name = "F")]
    margin: Option<f64>,

    /// Distance below which a ray or scanline counts as hitting a vertex
    #[arg(long, value_name = "E")]
    vertex_epsilon: Option<f64>,

    /// Rays or scanlines per hole before giving up
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// How hole seeds are searched: "random" (default) or "scanline"
    #[arg(long, default_value = "random", value_parser = parse_hole_strategy)]
    hole_strategy: HoleStrategy,

    /// Mesh holes without a seed as filled instead of failing
    #[arg(long)]
    omit_missing_holes: bool,

    /// Start the path at the origin instead of at its first absolute moveto
    #[arg(long)]
    ignore_first_moveto: bool,

    /// Also write the planar straight-line graph in .poly format
    #[arg(long, value_name = "OUT")]
    poly: Option<PathBuf>,

    /// Do not look for paths inside elements with this name (repeatable)
    #[arg(long = "skip-element", value_name = "NAME")]
    skip_elements: Vec<String>,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_hole_strategy(s: &str) -> Result<HoleStrategy, String> {
    match s.to_lowercase().as_str() {
        "random" => Ok(HoleStrategy::Random),
        "scanline" => Ok(HoleStrategy::Scanline),
        _ => Err(format!(
            "unknown hole strategy \"{s}\": expected \"random\" or \"scanline\""
        )),
    }
}

impl Cli {
    fn pipeline_options(&self) -> PipelineOptions {
        let defaults = HoleOptions::default();
        PipelineOptions {
            segments_per_curve: self.segments as usize,
            ignore_first_moveto: self.ignore_first_moveto,
            hole: HoleOptions {
                strategy: self.hole_strategy,
                margin: self.margin.unwrap_or(defaults.margin),
                vertex_epsilon: self.vertex_epsilon.unwrap_or(defaults.vertex_epsilon),
                max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
                seed: self.seed.unwrap_or(defaults.seed),
                ..defaults
            },
            missing_hole: if self.omit_missing_holes {
                MissingHolePolicy::Omit
            } else {
                MissingHolePolicy::Abort
            },
            ..PipelineOptions::default()
        }
    }

    fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            skip_elements: self.skip_elements.iter().cloned().collect(),
        }
    }
}

fn io_error(what: &str, path: &Path, e: &io::Error) -> PipelineError {
    PipelineError::new(ErrorKind::Io, format!("{what} {}: {e}", path.display()))
}

fn run(cli: &Cli) -> PipelineResult<Mesh> {
    let content = fs::read_to_string(&cli.file).map_err(|e| io_error("cannot read", &cli.file, &e))?;
    let paths = read_paths(&content, &cli.lookup_options())?;
    let path = select_path(&paths, cli.id.as_deref())?;
    info!("meshing path {}", path.id.as_deref().unwrap_or("<unnamed>"));

    let pslg = Pipeline::run(&path.d, &cli.pipeline_options())?;
    if let Some(out) = &cli.poly {
        fs::write(out, pslg.poly().to_string()).map_err(|e| io_error("cannot write", out, &e))?;
        info!("wrote {}", out.display());
    }

    let output = EarcutEngine.triangulate(&pslg.to_triangulation_input())?;
    let mesh = Mesh::from_output(&output)?;
    info!("{} triangles", mesh.triangle_count());
    Ok(mesh)
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mesh = match run(&cli) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let json = match serde_json::to_string(&mesh) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: cannot encode mesh: {e}");
            process::exit(1);
        }
    };
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{json}") {
        eprintln!("Error: cannot write output: {e}");
        process::exit(1);
    }
}
