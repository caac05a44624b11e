pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::processor::{hitbox, strip, tiles};

pub fn run() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Hitbox { inputs, output } => {
            convert_hitboxes(&inputs, output.as_deref())?;
        }
        Command::Tiles { input, output } => {
            convert_tiles(&input, &output)?;
        }
        Command::Strips {
            config,
            source,
            dest,
            manifests,
        } => {
            let dirs = StripDirs {
                source: &source,
                dest: &dest,
                manifests: &manifests,
            };
            build_strips(&config, &dirs)?;
        }
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Outcome of a `hitbox` batch.
#[derive(Debug, Default)]
pub struct HitboxBatch {
    pub converted: usize,
    /// Inputs that could not be loaded; the rest of the batch still ran.
    pub failed: Vec<PathBuf>,
}

/// Convert each hitbox document independently.
///
/// With `output`, every mapping lands in `<output>/<stem>.grid.json`;
/// otherwise it is printed to stdout. Fails only when nothing converted.
pub fn convert_hitboxes(inputs: &[PathBuf], output: Option<&Path>) -> Result<HitboxBatch> {
    if let Some(dir) = output {
        fs::create_dir_all(dir).with_context(|| format!("Creating {}", dir.display()))?;
    }

    let mut batch = HitboxBatch::default();

    for input in inputs {
        // 1. ── Parse ──────────────────────────────────────────────────────
        let doc = match parser::load_hitbox_document(input) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("{e}");
                batch.failed.push(e.path().to_path_buf());
                continue;
            }
        };

        // 2. ── Process ────────────────────────────────────────────────────
        let extraction = hitbox::extract_hitboxes(&doc.frame, &doc.hitboxes);

        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        info!(
            file = %name,
            frames = extraction.frames.len(),
            boxes = extraction.frames.box_count(),
            discarded = extraction.discarded,
            "hitboxes extracted"
        );
        for (frame, boxes) in extraction.frames.iter() {
            for b in boxes {
                debug!(frame, grid_box = %b, kind = hitbox::type_name(b.kind));
            }
        }

        // 3. ── Write outputs ──────────────────────────────────────────────
        match output {
            Some(dir) => {
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| name.clone());
                let path = dir.join(format!("{stem}.grid.json"));
                writer::grid::emit(&extraction.frames, &path)?;
                debug!(path = %path.display(), "grid hitboxes written");
            }
            None => println!("{name}: {}", writer::grid::to_string(&extraction.frames)?),
        }

        batch.converted += 1;
    }

    if batch.converted == 0 && !batch.failed.is_empty() {
        bail!("none of the {} hitbox documents could be loaded", batch.failed.len());
    }

    Ok(batch)
}

/// Tile metadata → TSV. Returns the number of rows written.
pub fn convert_tiles(input: &Path, output: &Path) -> Result<usize> {
    let doc = parser::load_tile_document(input)?;
    let rows = tiles::tile_rows(&doc);

    writer::tsv::emit(&rows, output).with_context(|| format!("Writing {}", output.display()))?;
    info!(rows = rows.len(), path = %output.display(), "tile rows written");

    Ok(rows.len())
}

/// Directories used by [`build_strips`].
#[derive(Debug, Clone, Copy)]
pub struct StripDirs<'a> {
    pub source: &'a Path,
    pub dest: &'a Path,
    pub manifests: &'a Path,
}

/// Build strip sheets (plus shadow variants) for every monster not marked
/// `skip`, and one manifest per monster. Returns the manifest paths.
pub fn build_strips(config: &Path, dirs: &StripDirs<'_>) -> Result<Vec<PathBuf>> {
    let cfg = parser::load_strip_config(config)?;

    fs::create_dir_all(dirs.manifests)
        .with_context(|| format!("Creating {}", dirs.manifests.display()))?;

    let mut written = Vec::new();

    for monster in &cfg.monsters {
        if monster.skip {
            debug!(monster = %monster.name, "skipped");
            continue;
        }
        info!(monster = %monster.name, layers = ?monster.layers, "building strips");

        let out_dir = dirs.dest.join(monster.name.to_lowercase());
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Creating {}", out_dir.display()))?;

        let shadow = strip::shadow_layers(&monster.layers);
        let mut lines = Vec::new();

        for seq in &cfg.sequences {
            let basename = format!("{}_{}", monster.name, seq.name).to_lowercase();

            let composed =
                strip::compose_sequence(dirs.source, &monster.name, seq, &monster.layers, &cfg)
                    .with_context(|| format!("Compositing {} {}", monster.name, seq.name))?;
            let Some(main) = composed else {
                warn!(monster = %monster.name, seq = %seq.name, "no parts found, sequence skipped");
                continue;
            };

            let file_name = format!("{basename}.png");
            let path = out_dir.join(&file_name);
            writer::png::emit(&main.image, &path)?;
            info!(path = %path.display(), frames = main.frames, "strip written");

            lines.extend(strip::manifest_block(
                &monster.name,
                seq,
                cfg.strip_height,
                main.frames,
                cfg.strip_order.len(),
                &file_name,
            ));

            let composed = strip::compose_sequence(dirs.source, &monster.name, seq, &shadow, &cfg)
                .with_context(|| format!("Compositing {} {} shadow", monster.name, seq.name))?;
            if let Some(shadowed) = composed {
                let path = out_dir.join(format!("{basename}s.png"));
                writer::png::emit(&shadowed.image, &path)?;
                info!(path = %path.display(), "shadow strip written");
            }
        }

        let manifest = writer::manifest::emit(&monster.name, &lines, dirs.manifests)
            .with_context(|| format!("Writing manifest for {}", monster.name))?;
        info!(path = %manifest.display(), "manifest written");
        written.push(manifest);
    }

    Ok(written)
}
