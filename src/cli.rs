use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert hitbox editor .json files into per-frame grid boxes
    Hitbox {
        /// Hitbox .json files, each converted independently
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Write `<stem>.grid.json` here instead of printing to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert tile editor .json metadata into tab-separated rows
    Tiles {
        /// Tile metadata .json file
        input: PathBuf,
        /// Output .tsv file
        output: PathBuf,
    },
    /// Composite layered PNG parts into reordered animation strips
    Strips {
        /// Strip config .json (monsters, layers, sequences)
        config: PathBuf,
        /// Root of the `<Monster>/<Seq>/<Monster>_<Seq>_<layer>.png` parts
        #[arg(long)]
        source: PathBuf,
        /// Strip sheets go to `<dest>/<monster>/`
        #[arg(long)]
        dest: PathBuf,
        /// Directory for the `<monster>.txt` manifests
        #[arg(long)]
        manifests: PathBuf,
    },
}
