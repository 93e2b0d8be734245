pub mod catalog;
pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod tree;
pub mod writer;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use crate::model::Catalog;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    // 1. ── Catalog ────────────────────────────────────────────────────
    let catalog = match &args.catalog_file {
        Some(path) => load_catalog_file(path)?,
        None => catalog::builtin(args.game_version),
    };

    if args.list {
        print_catalog(&catalog);
        return Ok(());
    }

    // 2. ── Resolve input ──────────────────────────────────────────────
    // clap only lets these be absent together with --list
    let input = args.input.as_deref().context("INPUT is required")?;
    let output = args.output.clone().context("OUTPUT is required")?;
    let mut tree =
        tree::open(input).with_context(|| format!("Opening {}", input.display()))?;

    // 3. ── Slice ──────────────────────────────────────────────────────
    let outputs = processor::Outputs {
        output_root: output,
        leftover_root: args.leftover.clone(),
    };
    processor::run(&catalog, &mut *tree, &outputs)
        .with_context(|| format!("Slicing with catalog {}", catalog.name))?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog_file(path: &Path) -> anyhow::Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("custom");
    parser::load_from_json(&json, stem).with_context(|| format!("Parsing {}", path.display()))
}

fn print_catalog(catalog: &Catalog) {
    println!(
        "catalog {}: {} atlases, {} sprites",
        catalog.name,
        catalog.atlases.len(),
        catalog.target_count()
    );
    for atlas in &catalog.atlases {
        println!("{}", atlas.path);
        for t in &atlas.targets {
            let r = &t.region;
            println!(
                "  {} ({},{} {}x{} of {}x{})",
                t.path, r.x, r.y, r.w, r.h, r.ref_w, r.ref_h
            );
        }
    }
}
