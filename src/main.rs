use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use kysely_rizzolver_codegen::{emit, extract, parser, paths};

#[derive(Parser)]
#[command(name = "kysely-rizzolver-codegen")]
#[command(about = "Generate KyselyRizzolver registration code from a kysely-codegen DB schema")]
struct Args {
    /// The path the kysely-codegen tool wrote the DB interface to
    #[arg(long)]
    input: PathBuf,

    /// The output file to write the generated code to
    #[arg(long)]
    output: PathBuf,

    /// The path used in the generated code to import the DB interface from;
    /// defaults to the relative path between the output and input files
    #[arg(long)]
    import_from: Option<String>,

    /// The name for the exported KyselyRizzolver instance
    #[arg(long, default_value = "rizzolver")]
    export_as: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("📖 Reading schema: {}", args.input.display());
    let input = fs::read_to_string(&args.input)?;

    println!("🔍 Extracting tables...");
    let module = parser::parse(&input);
    let tables = extract::extract_tables(&module)?;

    let import_from = match args.import_from {
        Some(path) => path,
        None => paths::default_import_path(&args.input, &args.output)?,
    };

    match emit::generate(&tables, &import_from, &args.export_as) {
        Some(code) => {
            println!("💾 Writing to: {}", args.output.display());
            fs::write(&args.output, code)?;
            println!("✅ Registered {} table(s)", tables.len());
        }
        None => println!("⚠️  No tables on the DB interface; output left untouched"),
    }

    Ok(())
}
