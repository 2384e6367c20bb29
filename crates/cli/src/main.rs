use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use clap::Parser;
use dyngraph_cli::error::Error;
use dyngraph_cli::script::write_generated;
use dyngraph_cli::session::{Session, SessionOptions};
use dyngraph_cli::{App, Command, GenerateArgs, MenuArgs};
use dyngraph_testgen::generator::{generate_single_graph, GraphParams};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let app = App::parse();
    let result = match app.command.unwrap_or_default() {
        Command::Menu(args) => menu(&args),
        Command::Generate(args) => generate(&args),
    };

    if let Err(e) = result {
        eprintln!("dyngraph: {e}");
        process::exit(1);
    }
}

fn menu(args: &MenuArgs) -> Result<(), Error> {
    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(fs::File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let options = SessionOptions {
        json: args.json,
        quiet: args.quiet,
    };
    tracing::debug!(?options, input = ?args.input, "starting menu session");

    let mut session = Session::new(input, io::stdout().lock(), options);
    session.run()
}

fn generate(args: &GenerateArgs) -> Result<(), Error> {
    let params = GraphParams::builder()
        .n_vertex(args.n_vertex)
        .n_edge(args.n_edge)
        .max_weight(args.max_weight)
        .build();
    let generated = generate_single_graph(&params);
    tracing::debug!(
        vertices = generated.get_vertices().len(),
        edges = generated.get_edges().len(),
        "generated graph"
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    write_generated(&generated, &mut out, args.json)?;
    out.flush()?;
    Ok(())
}
