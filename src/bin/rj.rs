//! recordjar CLI
//!
//! Loads a record-jar file, dumps it, queries it or applies one mutation and
//! saves it back in place.

use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use recordjar::{Config, Direction, FieldInfo, Query, RecordJar};
use tracing_subscriber::{fmt, EnvFilter};

/// recordjar CLI
#[derive(Parser, Debug)]
#[command(name = "rj")]
#[command(about = "Inspect and edit record-jar files")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Search arguments shared by the query commands
#[derive(ClapArgs, Debug)]
struct Target {
    /// Selector field name
    #[arg(short, long)]
    key: Option<String>,

    /// Selector field value
    #[arg(short = 'v', long)]
    keyval: Option<String>,

    /// Target field name
    #[arg(short, long)]
    field: Option<String>,

    /// Search direction: this, next, prev or only
    #[arg(short, long, default_value = "this")]
    direction: Direction,
}

impl Target {
    fn query(&self) -> Query<'_> {
        Query {
            key: self.key.as_deref(),
            keyval: self.keyval.as_deref(),
            field: self.field.as_deref(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every record and field
    Dump {
        file: PathBuf,
    },

    /// Report lines that would be skipped on load
    Check {
        file: PathBuf,

        /// Fail on the first malformed line
        #[arg(long)]
        strict: bool,
    },

    /// Print the value of a field
    Get {
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        /// Printed when nothing matches
        #[arg(long)]
        default: Option<String>,
    },

    /// Replace the value of a field
    Set {
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        value: String,
    },

    /// Append to the value of a field
    Append {
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        value: String,

        /// Inserted between the old and the new value
        #[arg(long)]
        delim: Option<String>,
    },

    /// Add a field, creating the record when nothing matches
    Add {
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        value: String,
    },

    /// Delete a field
    DelField {
        file: PathBuf,

        #[command(flatten)]
        target: Target,
    },

    /// Delete a record
    DelRecord {
        file: PathBuf,

        #[command(flatten)]
        target: Target,
    },

    /// Rewrite a file in canonical form
    Fmt {
        file: PathBuf,

        /// Write here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep multi-line values on one escaped line
        #[arg(long)]
        no_fold: bool,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,recordjar=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    }
}

/// Run one command; `Ok(false)` means the query matched nothing
fn run(args: Args) -> recordjar::Result<bool> {
    match args.command {
        Commands::Dump { file } => {
            let store = RecordJar::load(&file)?;
            dump(&store);
            Ok(true)
        }
        Commands::Check { file, strict } => {
            let config = Config::builder().strict(strict).build();
            let store = RecordJar::load_with(&file, config)?;
            for warning in store.warnings() {
                println!("{}:{}: {}", file.display(), warning.line, warning.kind);
            }
            println!("{} records, {} warnings", store.size(), store.warnings().len());
            Ok(store.warnings().is_empty())
        }
        Commands::Get {
            file,
            target,
            default,
        } => {
            let mut store = RecordJar::load(&file)?;
            match store.get(target.direction, &target.query()).or(default) {
                Some(value) => {
                    println!("{}", value);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        Commands::Set {
            file,
            target,
            value,
        } => mutate(&file, |store| store.set(target.direction, &target.query(), &value)),
        Commands::Append {
            file,
            target,
            value,
            delim,
        } => mutate(&file, |store| {
            store.append(target.direction, &target.query(), &value, delim.as_deref())
        }),
        Commands::Add {
            file,
            target,
            value,
        } => mutate(&file, |store| store.add(target.direction, &target.query(), &value)),
        Commands::DelField { file, target } => mutate(&file, |store| {
            store.delete_field(target.direction, &target.query()).is_some()
        }),
        Commands::DelRecord { file, target } => mutate(&file, |store| {
            store.delete_record(target.direction, &target.query()).is_some()
        }),
        Commands::Fmt {
            file,
            output,
            no_fold,
        } => {
            let config = Config::builder().fold_newlines(!no_fold).build();
            let store = RecordJar::load_with(&file, config)?;
            store.save(output.as_ref().unwrap_or(&file))?;
            Ok(true)
        }
    }
}

/// Load `file`, apply `change` and save when it matched
fn mutate<F>(file: &Path, change: F) -> recordjar::Result<bool>
where
    F: FnOnce(&mut RecordJar) -> bool,
{
    let mut store = RecordJar::load(file)?;
    if !change(&mut store) {
        tracing::info!("no match in {}", file.display());
        return Ok(false);
    }
    store.save(file)?;
    Ok(true)
}

fn dump(store: &RecordJar) {
    println!("{} records\n", store.size());

    let mut record = 0;
    let mut field = 0;
    for (info, f) in store.iter() {
        let FieldInfo { field_first, .. } = info;
        if field_first {
            record += 1;
            field = 0;
            println!("record {}:", record);
        }
        field += 1;
        println!("    field {}: {}: {}", field, f.name, f.value);
    }
}
