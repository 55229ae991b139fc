use clap::Parser;

/// termcalc evaluates an arithmetic expression with the operators
/// `+ - * / % ^`, parentheses, and implicit multiplication.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate, e.g. "1-(12*3-(11+5))/8".
    #[arg(short, long)]
    term: String,
}

fn main() {
    let args = Args::parse();

    match termcalc::evaluate(&args.term) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
