use clap::Parser;
use exprkit::{
    eval,
    interpreter::{environment::MapEnvironment, value::Value},
    parse_with_tokens,
};

/// exprkit evaluates a single expression against optional variable
/// bindings and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream (for syntax-highlighting frontends) instead
    /// of the result.
    #[arg(short, long)]
    tokens: bool,

    /// Bind a variable, e.g. `--var x=4.2`. Values parse as numbers or
    /// true/false; anything else binds as a string.
    #[arg(short, long, value_name = "NAME=VALUE")]
    var: Vec<String>,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let mut environment = MapEnvironment::new();
    for binding in &args.var {
        let Some((name, value)) = binding.split_once('=') else {
            eprintln!("Invalid variable binding '{binding}'. Expected NAME=VALUE.");
            std::process::exit(1);
        };
        environment.set(name, parse_binding_value(value));
    }

    if args.tokens {
        print_tokens(&args.expression);
        return;
    }

    match eval(&args.expression, Some(&environment)) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Interprets a `--var` value: number, boolean, or fallback string.
fn parse_binding_value(raw: &str) -> Value {
    if let Ok(number) = raw.parse::<f64>() {
        return Value::Number(number);
    }
    match raw {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => Value::String(raw.to_owned()),
    }
}

/// Dumps the token stream of the expression, one token per line.
///
/// Tokens are printed even when parsing fails, so the dump shows what a
/// highlighter would see for partially-typed input.
fn print_tokens(expression: &str) {
    let mut tokens = Vec::new();
    let result = parse_with_tokens(expression, &mut tokens);

    for token in &tokens {
        println!("{:>4}..{:<4} {:<12} {:?}",
                 token.start,
                 token.start + token.length,
                 format!("{:?}", token.kind),
                 token.text);
    }

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
