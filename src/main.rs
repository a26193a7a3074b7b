use std::{fs::read_to_string, io, path::PathBuf, process, time::Instant};

use clap::Parser as ClapParser;
use teenytiny::{display_error, lexer::{scanner::Scanner, tokens::TokenKind}};

#[derive(ClapParser)]
#[command(author, version, about = "Teeny Tiny lexical scanner")]
struct Cli {
    /// Source file to scan; stdin is read when neither a file nor --source is given
    path: Option<PathBuf>,
    /// Scan this text instead of a file
    #[arg(short = 'e', long = "source", conflicts_with = "path")]
    source: Option<String>,
    /// Print how long scanning took
    #[arg(long)]
    timings: bool,
}

fn read_source(cli: &Cli) -> io::Result<(String, Option<String>)> {
    if let Some(source) = &cli.source {
        return Ok((source.clone(), None));
    }

    match &cli.path {
        Some(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            Ok((read_to_string(path)?, file_name))
        }
        None => Ok((io::read_to_string(io::stdin())?, Some(String::from("<stdin>")))),
    }
}

fn main() {
    let cli = Cli::parse();

    let (source, file_name) = match read_source(&cli) {
        Ok(read) => read,
        Err(err) => {
            eprintln!("Failed to read source: {}", err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut scanner = Scanner::new(&source, file_name);

    scanner.advance();
    loop {
        match scanner.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => break,
            Ok(token) => token.debug(),
            Err(error) => {
                display_error(&error, scanner.source());
                process::exit(1);
            }
        }
        scanner.advance();
    }

    if cli.timings {
        println!("Tokenized in {:?}", start.elapsed());
    }
}
