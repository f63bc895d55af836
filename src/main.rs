//! gocq: jump from Go commands and queries to their handlers
//!
//! Usage:
//!   gocq lenses <file> [--json]   List declarations in a Go file
//!   gocq goto <TypeName> [path]   Find the handler for FooCommand / FooQuery
//!   gocq find <Handler> [path]    Find a handler struct by name
//!   gocq check [path]             Report commands/queries without a handler
//!   gocq serve [--port 8080]      Start the MCP server

mod server;

use std::env;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gocq::cli::{check_command, find_command, goto_command, lenses_command};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "serve" => {
            // Check for --port flag
            let port = args
                .iter()
                .position(|a| a == "--port")
                .and_then(|i| args.get(i + 1))
                .and_then(|p| p.parse::<u16>().ok());

            if let Some(port) = port {
                server::start_http(port)?;
            } else {
                server::start_stdio()?;
            }
        }
        "lenses" => {
            setup_logging(Level::INFO);
            let json = args.iter().any(|a| a == "--json");
            let Some(file) = args[2..].iter().find(|a| !a.starts_with("--")) else {
                eprintln!("Usage: gocq lenses <file> [--json]");
                return Ok(());
            };
            lenses_command(file, json)?;
        }
        "goto" => {
            setup_logging(Level::INFO);
            if args.len() < 3 {
                eprintln!("Usage: gocq goto <TypeName> [path]");
                return Ok(());
            }
            let path = args.get(3).map(|s| s.as_str()).unwrap_or(".");
            goto_command(&args[2], path)?;
        }
        "find" => {
            setup_logging(Level::INFO);
            if args.len() < 3 {
                eprintln!("Usage: gocq find <HandlerName> [path]");
                return Ok(());
            }
            let path = args.get(3).map(|s| s.as_str()).unwrap_or(".");
            find_command(&args[2], path)?;
        }
        "check" => {
            setup_logging(Level::INFO);
            let path = args.get(2).map(|s| s.as_str()).unwrap_or(".");
            check_command(path)?;
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "--version" | "-V" | "version" => {
            print_version();
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
        }
    }

    Ok(())
}

fn print_usage() {
    println!(
        r#"gocq: Navigate from Go commands and queries to their handlers

USAGE:
    gocq <COMMAND> [OPTIONS]

COMMANDS:
    lenses <file> [--json]    List Command/Query declarations in a Go file
    goto <TypeName> [path]    Find the handler for a FooCommand or FooQuery type
    find <Handler> [path]     Find a handler struct by name (tries lower-camel too)
    check [path]              Report commands/queries without a handler
    serve                     Start the MCP server (stdio transport)
    serve --port <PORT>       Start the MCP server (HTTP transport)
    help                      Show this help message

ENVIRONMENT:
    GOCQ_ROOT                 Workspace root for the MCP server (default: current directory)
    RUST_LOG                  Log filter, e.g. gocq=debug

EXAMPLES:
    gocq lenses internal/user/commands.go
    gocq goto CreateUserCommand            # -> internal/user/handlers.go:12
    gocq find GetUserQueryHandler ~/src/app
    gocq check
    gocq serve --port 8080
"#
    );
}

fn print_version() {
    println!("gocq {}", env!("CARGO_PKG_VERSION"));
}

/// Log to stderr at `level` unless `RUST_LOG` says otherwise
pub(crate) fn setup_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
