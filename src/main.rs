//! The `vitrine` command line entry point. Parses arguments, locates the
//! project configuration, and builds the site.

use anyhow::Context;
use clap::{crate_version, App, Arg};
use std::path::Path;
use vitrine::build::build_site;
use vitrine::config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = App::new("vitrine")
        .version(crate_version!())
        .about("Builds the portfolio site and blog into a directory of static files")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("DIR")
                .help("The directory the site is written into")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("project-directory")
                .short("C")
                .long("project-directory")
                .value_name("DIR")
                .help("The directory to search for the project file")
                .default_value("."),
        )
        .get_matches();

    // `output` is required and `project-directory` has a default, so clap
    // guarantees both are present.
    let output = matches.value_of("output").unwrap();
    let project_directory = matches.value_of("project-directory").unwrap();

    // Canonicalize so the project-file search can walk up real ancestors
    // even when the argument is a relative path like `.`.
    let project_directory = std::fs::canonicalize(project_directory)
        .with_context(|| format!("Locating project directory '{}'", project_directory))?;
    let config = Config::from_directory(&project_directory, Path::new(output))?;
    build_site(&config)?;
    Ok(())
}
