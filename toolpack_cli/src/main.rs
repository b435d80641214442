//! # Toolpack CLI Application
//!
//! Terminal front end for the everyday calculator engine. Prompts with
//! defaults, runs a calculation, and prints the formatted block plus the
//! JSON form of the result (handy when piping into other tools).

use std::io::{self, BufRead, Write};

use rand::thread_rng;

use toolpack_core::format::{currency, parse_count, parse_or};
use toolpack_core::formulas::tip::{calculate, TipInput};
use toolpack_core::random::dice::{sample, DiceInput, DieKind};

fn prompt(text: &str) -> String {
    print!("{}", text);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input
}

fn prompt_f64(text: &str, default: f64) -> f64 {
    parse_or(&prompt(text), default)
}

fn prompt_count(text: &str, default: u32) -> u32 {
    parse_count(&prompt(text), default)
}

fn main() {
    println!("Toolpack CLI - Everyday Calculators");
    println!("===================================");
    println!();

    let bill = prompt_f64("Enter bill amount [50.00]: ", 50.0);
    let tip_percent = prompt_f64("Enter tip percentage [20]: ", 20.0);
    let people = prompt_count("Enter number of people [2]: ", 2);

    let input = TipInput {
        bill_amount: bill,
        tip_percent,
        people,
    };
    let result = calculate(&input);

    println!();
    println!("═══════════════════════════════════════");
    println!("  TIP CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Bill:       {}", currency(input.bill()));
    println!("  Tip:        {:.0}%", input.tip());
    println!("  People:     {}", input.party_size());
    println!();
    println!("Result:");
    println!("  Tip amount: {}", currency(result.tip_amount));
    println!("  Total:      {}", currency(result.total));
    println!("  Per person: {}", currency(result.per_person));
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for piping):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }

    // Bonus roll to show off the random side of the engine
    let dice = sample(
        &DiceInput {
            die: DieKind::D6,
            count: 2,
        },
        &mut thread_rng(),
    );
    println!();
    println!(
        "And a 2d6 roll for luck: {:?} (total {})",
        dice.rolls, dice.total
    );
}
