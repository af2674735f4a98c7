//! Command-line interface for rolemark
//! This binary parses rolemark documents (model output with role headers, file blocks and
//! fenced code) and prints the parsed tree, the tokens, or writes out the declared files.
//!
//! Usage:
//!   rolemark `<path|->` [--format `<format>`] [--config `<file>`]   - Print a document in some format
//!   rolemark `<path|->` --extract `<dir>` [--role `<name>`]          - Write the document's files to a directory
//!   rolemark `<path|->` --role `<name>`                            - Print the prose of one role
//!   rolemark --list-formats                                      - List all available formats

mod errors;
mod extract;

use clap::{Arg, ArgAction, ArgMatches, Command};
use errors::CliError;
use rolemark_config::{Loader, RolemarkConfig};
use rolemark_parser::rolemark::extraction::{extract_files, sections_for_role};
use rolemark_parser::rolemark::parsing::parse;
use rolemark_parser::{ExtractedFile, Lexer, OutputFormat, Root};
use std::io::Read;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USER_CONFIG: &str = "rolemark.toml";

fn main() {
    let matches = Command::new("rolemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting rolemark documents and extracting their files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the document, or '-' to read standard input")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: output.format from the configuration)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults (default: ./rolemark.toml if present)"),
        )
        .arg(
            Arg::new("extract")
                .long("extract")
                .short('x')
                .value_name("DIR")
                .help("Write every file block to DIR instead of printing the document"),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .short('r')
                .value_name("NAME")
                .conflicts_with("format")
                .help("Print the prose of this role's sections, or with --extract only write their files"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = handle_execute_command(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<RolemarkConfig, CliError> {
    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(USER_CONFIG),
    };
    Ok(loader.build()?)
}

fn read_source(path: &str) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}

/// Handle the execute command
fn handle_execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let config = load_config(matches)?;
    let format: OutputFormat = match matches.get_one::<String>("format") {
        Some(name) => name.parse()?,
        None => config.output.format.parse()?,
    };
    let lexer = Lexer::new(config.lexer.into())?;

    let source = read_source(path)?;
    let mut stream = lexer.lex(&source);
    debug!(path, tokens = stream.len(), "lexed input");

    let role = matches.get_one::<String>("role");

    if let Some(dir) = matches.get_one::<String>("extract") {
        let root = parse(&mut stream);
        let files = match role {
            Some(name) => role_files(&root, name),
            None => extract_files(&root),
        };
        for written in extract::write_files(Path::new(dir), &files)? {
            println!("{}", written.display());
        }
        return Ok(());
    }

    if let Some(name) = role {
        let root = parse(&mut stream);
        for section in sections_for_role(&root, name) {
            print!("{}", section.prose);
            if !section.prose.ends_with('\n') {
                println!();
            }
        }
        return Ok(());
    }

    let output = if format.is_token_format() {
        format.render_tokens(stream.tokens())?
    } else {
        format.render_tree(&parse(&mut stream))?
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn role_files(root: &Root, name: &str) -> Vec<ExtractedFile> {
    sections_for_role(root, name)
        .into_iter()
        .flat_map(|section| section.files)
        .collect()
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");

    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
