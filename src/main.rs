// src/main.rs

// DeltaLambda
// A normal-order λ-calculus evaluator with δ-reduction over a fixed
// primitive set, printing every intermediate term.

use clap::Parser as ClapParser;

use delta_lambda::{
    church::abstract_numerals,
    defs::{Defs, DEFS},
    parser::parse,
    printer::{format_expr, highlight_diff, plain_expr, PrintOptions},
    reduce::reduce_once,
};

#[derive(ClapParser, Debug)]
#[command(version, about = "Normal-order λ-calculus evaluator with δ-primitives", long_about = None)]
struct Cli {
    /// The λ-expression to evaluate. If not provided, launches the REPL.
    expr: Vec<String>,

    /// Maximum number of reduction steps (unlimited if omitted).
    #[arg(long)]
    limit: Option<usize>,

    /// Disable all ANSI coloring.
    #[arg(long)]
    plain: bool,

    /// Highlight the changed subterm of each step.
    #[arg(long)]
    diff: bool,

    /// Keep spaces in printed terms.
    #[arg(long)]
    spaced: bool,

    /// Omit the (β)/(δ) label after each step.
    #[arg(long)]
    no_step_type: bool,

    /// Skip the δ-abstracted summary (Church numerals shown as digits).
    #[arg(long)]
    no_numerals: bool,
}

struct Session {
    opts: PrintOptions,
    show_step_type: bool,
    show_numerals: bool,
    limit: usize,
}

impl Session {
    fn from_cli(cli: &Cli) -> Self {
        Session {
            opts: PrintOptions {
                compact: !cli.spaced,
                color_parens: !cli.plain,
                color_diff: cli.diff && !cli.plain,
            },
            show_step_type: !cli.no_step_type,
            show_numerals: !cli.no_numerals,
            // "no limit" still has to be a finite bound so the driver
            // loop itself always terminates.
            limit: cli.limit.unwrap_or(usize::MAX),
        }
    }

    /// Parse the input, print every reduction step, and finish with the
    /// δ-abstracted rendering of the result.
    fn evaluate(&self, input: &str, defs: &Defs) -> Result<(), String> {
        let mut term = parse(input).map_err(|e| e.to_string())?;

        let mut prev = plain_expr(&term, &self.opts);
        println!("Step 0: {}", format_expr(&term, &self.opts));

        let mut step = 0usize;
        let mut cut_off = false;
        while let Some((next, rule)) = reduce_once(&term, defs) {
            if step >= self.limit {
                cut_off = true;
                break;
            }
            term = next;
            step += 1;

            let curr = plain_expr(&term, &self.opts);
            let shown = if self.opts.color_diff {
                highlight_diff(&prev, &curr)
            } else {
                format_expr(&term, &self.opts)
            };
            let label = if self.show_step_type {
                format!(" ({})", rule)
            } else {
                String::new()
            };
            println!("Step {}{}: {}", step, label, shown);
            prev = curr;
        }

        if cut_off {
            println!("→ step limit reached after {} steps (divergence suspected).", step);
        } else {
            println!("→ normal form reached.");
        }

        if self.show_numerals {
            let abstracted = abstract_numerals(&term);
            println!("\nδ-abstracted: {}\n", format_expr(&abstracted, &self.opts));
        }
        Ok(())
    }
}

fn show_examples() {
    println!("\n--- DeltaLambda Examples ---\n");

    let examples = [
        ("Identity application", "(λx.x) (λy.y)"),
        ("Church numeral arithmetic", "+ 2 2"),
        ("Multiplication", "* 2 3"),
        ("Zero test", "is0 0"),
        ("Boolean logic", "∧ ⊤ ⊥"),
        ("Predecessor", "↓ 3"),
        ("Pairs", "fst (pair 1 2)"),
        ("Comparison", "≤ 1 2"),
    ];

    for (description, code) in examples.iter() {
        println!("// {}", description);
        println!("{}\n", code);
    }
    println!("----------------------------\n");
}

// Simple REPL
fn repl(session: &Session) {
    println!("DeltaLambda REPL");
    println!("Enter a λ-expression, 'quit', or ':examples'");

    loop {
        print!("λ-expr> ");
        if std::io::Write::flush(&mut std::io::stdout()).is_err() {
            break;
        }
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
            break;
        }
        let input_str = input.trim();

        if input_str == "quit" || input_str == "exit" {
            break;
        }
        if input_str.is_empty() {
            continue;
        }
        if input_str == ":examples" {
            show_examples();
            continue;
        }

        if let Err(e) = session.evaluate(input_str, &DEFS) {
            println!("Error: {}", e);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let session = Session::from_cli(&cli);

    if cli.expr.is_empty() {
        repl(&session);
    } else {
        let input = cli.expr.join(" ");
        if let Err(e) = session.evaluate(&input, &DEFS) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
