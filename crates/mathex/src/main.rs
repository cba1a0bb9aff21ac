use std::io::{self, Read};

use clap::{Args, Parser as ClapParser, Subcommand};
use mathex_eval::{eval_tree, Bindings};
use mathex_parser::{Parser, ParserConfig};

#[derive(Debug, ClapParser)]
#[command(
    name = "mathex",
    version,
    about = "Parse and evaluate infix math expressions",
    long_about = "mathex parses infix math expressions into syntax trees and\n\
        optionally evaluates them.\n\n\
        EXAMPLES:\n\
        \n  mathex parse '3x + sin(y)'            Print the parsed tree\n\
        \n  mathex parse --json '(1 + 2) * 3'     Print the tree as JSON\n\
        \n  mathex eval -b x=2 '3x + 1'           Evaluate with x bound to 2\n\
        \n  echo '1 + 2' | mathex eval            Evaluate from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an expression and print its tree
    Parse(ParseArgs),

    /// Parse an expression and evaluate it to a number
    Eval(EvalArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// The expression to parse (reads from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expr: Option<String>,

    /// Print the tree as JSON instead of infix notation
    #[arg(long)]
    json: bool,

    /// Do not insert implicit multiplication between adjacent operands
    #[arg(long = "no-implicit-multiply")]
    no_implicit_multiply: bool,

    /// Group equal-precedence operators rightmost-first
    #[arg(long = "right-associative")]
    right_associative: bool,

    /// Restrict variables to these names (repeatable)
    #[arg(long = "variable", value_name = "NAME")]
    variables: Vec<String>,
}

#[derive(Debug, Args)]
struct EvalArgs {
    /// The expression to evaluate (reads from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expr: Option<String>,

    /// Bind a variable, e.g. -b x=2 (repeatable)
    #[arg(short = 'b', long = "bind", value_name = "NAME=VALUE")]
    bindings: Vec<String>,
}

fn read_expression(expr: &Option<String>) -> io::Result<String> {
    match expr {
        Some(expr) => Ok(expr.clone()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn build_parser(args: &ParseArgs) -> Parser {
    Parser::with_config(ParserConfig {
        implicit_multiply: !args.no_implicit_multiply,
        left_associative: !args.right_associative,
        valid_variables: if args.variables.is_empty() {
            None
        } else {
            Some(args.variables.clone())
        },
    })
}

/// Parses one `name=value` binding from the command line.
fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("binding `{raw}` is not of the form NAME=VALUE"))?;
    let value = value
        .parse::<f64>()
        .map_err(|_| format!("binding `{raw}` has a non-numeric value"))?;
    Ok((name.to_string(), value))
}

fn run_parse(args: &ParseArgs) -> i32 {
    let source = match read_expression(&args.expr) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    match build_parser(args).parse(&source) {
        Ok(tree) => {
            if args.json {
                match mathex_ast::to_json(&tree) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return 2;
                    }
                }
            } else {
                println!("{tree}");
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn run_eval(args: &EvalArgs) -> i32 {
    let source = match read_expression(&args.expr) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let mut bindings = Bindings::new();
    for raw in &args.bindings {
        match parse_binding(raw) {
            Ok((name, value)) => {
                bindings.insert(name, value);
            }
            Err(message) => {
                eprintln!("error: {message}");
                return 2;
            }
        }
    }
    let tree = match mathex_parser::parse(&source) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match eval_tree(&tree, &bindings) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Eval(args) => run_eval(args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
