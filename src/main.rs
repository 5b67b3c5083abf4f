use budget_ledger::category::CategoriesRepository;
use budget_ledger::chart::render_spend_chart;
use budget_ledger::engine::Engine;
use budget_ledger::parser::Parser;
use std::process;

const USAGE: &str = "USAGE: budget-ledger <operations.csv> [--summary]";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| {
        println!("{}", USAGE);
        process::exit(1);
    });
    let summary = match args.next().as_deref() {
        None => false,
        Some("--summary") => true,
        Some(other) => {
            println!("unknown argument: {}\n{}", other, USAGE);
            process::exit(1);
        }
    };

    let operations = Parser::parse(&path).unwrap_or_else(|err| {
        println!("could not parse input: {}", err);
        process::exit(1);
    });
    let mut categories = CategoriesRepository::default();
    let mut engine = Engine::new(&mut categories);
    engine.process(&operations);

    if summary {
        categories.display_all().unwrap_or_else(|err| {
            println!("could not display output: {}", err);
            process::exit(1);
        });
        return;
    }

    for category in categories.categories() {
        println!("{}\n", category);
    }
    println!("{}", render_spend_chart(categories.categories()));
}
