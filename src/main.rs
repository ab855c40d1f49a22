use clap::Parser;
use log::{debug, info};
use stackcalc_rs::{Prompt, Session, SessionError};
use std::io;
use std::process::ExitCode;

/// Evaluates arithmetic expressions with variables. Unbound variables are
/// asked for once and remembered for the rest of the run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Without it, expressions are read line by line
    /// from standard input.
    expression: Option<String>,

    /// Binds a variable before evaluating, e.g. `--var rate=0.25`.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,
}

fn parse_binding(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", text))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for {}: {}", name.trim(), e))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let mut session = Session::new();
    for (name, value) in args.vars {
        session.bind(name, value);
    }

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    if let Some(expression) = args.expression {
        return if run(&mut session, &mut prompt, &expression) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    loop {
        match prompt.read_line("Enter an expression: ") {
            Ok(Some(line)) if line.trim().is_empty() => continue,
            Ok(Some(line)) => {
                run(&mut session, &mut prompt, &line);
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    info!("Session ended with {} bound variables", session.variables().len());
    ExitCode::SUCCESS
}

fn run<R, W>(session: &mut Session, prompt: &mut Prompt<R, W>, expression: &str) -> bool
where
    R: io::BufRead,
    W: io::Write,
{
    match session.evaluate(expression, prompt) {
        Ok(result) => {
            println!("Result: {}", result);
            true
        }
        Err(SessionError::Io(e)) => {
            eprintln!("Error: could not read input: {}", e);
            false
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            false
        }
    }
}
