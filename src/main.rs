// scriptfront: dump the token stream or AST of a script file

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use scriptfront::parser::lexer::tokenize;
use scriptfront::parser::parse::ParseError;
use scriptfront::parse_source;

#[derive(Parser)]
#[command(name = "scriptfront")]
#[command(about = "Tokenize and parse a script, printing the tokens or the AST", version)]
struct Cli {
    /// Script source file
    file: PathBuf,

    /// Print the token stream instead of the AST
    #[arg(short, long)]
    tokens: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.file.exists() {
        eprintln!("Error: File '{}' not found", cli.file.display());
        process::exit(1);
    }

    let source = fs::read_to_string(&cli.file)?;

    if cli.tokens {
        let tokens = match tokenize(&source) {
            Ok(tokens) => tokens,
            Err(e) => fail(ParseError::from(e)),
        };
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    eprintln!("Parsing {}...", cli.file.display());
    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(e) => fail(e),
    };

    eprintln!(
        "Parsed successfully. Found {} top-level declarations.",
        program.nodes.len()
    );
    println!("{:#?}", program);

    Ok(())
}

fn fail(err: ParseError) -> ! {
    eprintln!("error: {}", err);
    process::exit(1);
}
