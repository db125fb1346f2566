//! A program that creates the tracking tables in a new, empty SQLite file.
//!
//! Example usage:
//!
//!   create_db --dbpath ./testdb.db
//!

/**
 *     /\
 *    ( /   @ @    ()
 *     \  __| |__  /
 *      -/   "   \-
 *     /-|       |-\
 *    / /-\     /-\ \
 *     / /-`---'-\ \
 *      /         \ CRABCAVE
 *
 *   create_db.rs - materialize the schema
 *
*/
use clap::Parser;
use crabcave::db::establish_connection;
use crabcave::error::Error;
use crabcave::ops::DbOps;
use crabcave::tables::materialize;
use log::{error, info};
use std::process;
use std::time::SystemTime;

fn run(ops: &DbOps) -> Result<(), Error> {
    let mut conn = establish_connection(&ops.db_path)?;
    materialize(&mut conn)?;
    info!("Schema written to {}", ops.db_path);
    Ok(())
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    dbpath: Option<String>,
    #[arg(long, default_value_t = String::from("none"))]
    logfile: String,
}

fn setup_logger(ops: &DbOps) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout());

    if let Some(path) = &ops.log_path {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    let ops = DbOps::new(args.dbpath, &args.logfile);

    if let Err(e) = setup_logger(&ops) {
        eprintln!("Unable to start logging: {}", e);
        process::exit(1);
    }

    info!("Args:{:?}", ops);

    if let Err(e) = run(&ops) {
        error!("create_db failed: {}", e);
        process::exit(1);
    }
}
