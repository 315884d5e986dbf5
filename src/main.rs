#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "sfjmesh", about = "SFJ binary mesh inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info {
		path: PathBuf,
		#[arg(long)]
		scheme: String,
		#[arg(long)]
		faces: bool,
	},
	Verts {
		path: PathBuf,
		#[arg(long)]
		scheme: String,
		#[arg(long)]
		faces: bool,
		#[arg(long, default_value_t = 16)]
		limit: usize,
	},
	Dump {
		path: PathBuf,
		#[arg(long)]
		scheme: String,
		#[arg(long)]
		faces: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> sfjmesh::mesh::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info { path, scheme, faces } => cmd::info::run(path, &scheme, faces),
		Commands::Verts {
			path,
			scheme,
			faces,
			limit,
		} => cmd::verts::run(path, &scheme, faces, limit),
		Commands::Dump { path, scheme, faces } => cmd::dump::run(path, &scheme, faces),
	}
}
