//! Expense Report Example
//!
//! Demonstrates collection pipelines: filtering and limiting with std
//! adaptors, sorting and grouping with `PipelineExt`, and feeding the
//! result into the mailer send DSL.

use meander::{Mailer, PipelineExt};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
struct Expense {
    year: u16,
    amount: u32,
    tags: Vec<&'static str>,
}

fn ledger() -> Vec<Expense> {
    vec![
        Expense { year: 2024, amount: 120, tags: vec!["travel", "work"] },
        Expense { year: 2025, amount: 40, tags: vec!["food"] },
        Expense { year: 2024, amount: 300, tags: vec!["travel", "family"] },
        Expense { year: 2025, amount: 80, tags: vec!["work"] },
        Expense { year: 2023, amount: 15, tags: vec![] },
    ]
}

/// Example 1: group tags by year, merging duplicates into sets.
fn example_tags_by_year() {
    println!("\n=== Example 1: Tags by Year ===");

    let tags_by_year: BTreeMap<u16, BTreeSet<&str>> = ledger()
        .into_iter()
        .grouped_with(|e| e.year, |e| e.tags);

    for (year, tags) in &tags_by_year {
        println!("{year}: {tags:?}");
    }
}

/// Example 2: sort, limit, and collect with std adaptors in the chain.
fn example_largest_expenses() {
    println!("\n=== Example 2: Largest Expenses ===");

    let largest: Vec<u32> = ledger()
        .into_iter()
        .map(|e| e.amount)
        .sorted()
        .rev()
        .take(3)
        .collect();

    println!("three largest amounts: {largest:?}");
}

/// Example 3: pipeline output becomes mail input.
fn example_mailed_summaries() {
    println!("\n=== Example 3: Mailed Summaries ===");

    let totals: BTreeMap<u16, u32> = ledger()
        .into_iter()
        .grouped_by(|e| e.year)
        .into_iter()
        .map(|(year, expenses)| (year, expenses.iter().map(|e| e.amount).sum()))
        .collect();

    for (year, total) in totals {
        Mailer::send(|mail| {
            mail.with_from("reports@example.com")
                .with_to("finance@example.com")
                .with_subject(format!("Expenses {year}"))
                .with_body(format!("Total spent: {total}"))
        });
        println!("---");
    }
}

fn main() {
    example_tags_by_year();
    example_largest_expenses();
    example_mailed_summaries();
}
