//! Integration tests exercising the idioms together through the public API

use meander::prelude::*;
use meander::{compose, curry2, partial, pipe, Mailer};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Expense {
    year: u16,
    amount: u32,
    tags: Vec<&'static str>,
}

fn ledger() -> Vec<Expense> {
    vec![
        Expense {
            year: 2024,
            amount: 120,
            tags: vec!["travel", "work"],
        },
        Expense {
            year: 2025,
            amount: 40,
            tags: vec!["food"],
        },
        Expense {
            year: 2024,
            amount: 300,
            tags: vec!["travel", "family"],
        },
        Expense {
            year: 2025,
            amount: 80,
            tags: vec!["work"],
        },
    ]
}

#[test]
fn composed_color_pipeline_matches_stepwise_application() {
    let base = Color::new(60, 90, 120);

    let stylize = compose!(negate, brighten(20), grayscale);
    let stepwise = negate(brighten(20)(grayscale(base)));

    assert_eq!(stylize(base), stepwise);
    assert_eq!(pipe!(base, grayscale, brighten(20), negate), stepwise);
}

#[test]
fn curried_converters_share_one_definition() {
    fn convert(rate: f64, value: f64) -> f64 {
        value * rate
    }

    let curried = curry2!(convert);
    let km_to_miles = curried(0.621_371);
    let hours_to_minutes = curried(60.0);

    assert!((km_to_miles(42.195) - 26.218_749_345).abs() < 1e-6);
    assert_eq!(hours_to_minutes(1.5), 90.0);
}

#[test]
fn partial_application_builds_named_helpers() {
    fn between(low: u32, high: u32, value: u32) -> bool {
        low <= value && value <= high
    }

    let is_affordable = partial!(between, 0, 100, __);

    let affordable: Vec<u32> = ledger()
        .into_iter()
        .map(|e| e.amount)
        .filter(|amount| is_affordable(*amount))
        .collect();

    assert_eq!(affordable, vec![40, 80]);
}

#[test]
fn expense_report_pipeline_groups_tags_by_year() {
    let tags_by_year: BTreeMap<u16, BTreeSet<&str>> = ledger()
        .into_iter()
        .grouped_with(|e| e.year, |e| e.tags);

    assert_eq!(
        tags_by_year,
        BTreeMap::from([
            (2024, BTreeSet::from(["family", "travel", "work"])),
            (2025, BTreeSet::from(["food", "work"])),
        ]),
    );
}

#[test]
fn pipeline_sorting_composes_with_std_adaptors() {
    let largest_two: Vec<u32> = ledger()
        .into_iter()
        .map(|e| e.amount)
        .sorted()
        .rev()
        .take(2)
        .collect();

    assert_eq!(largest_two, vec![300, 120]);
}

#[test]
fn yearly_totals_feed_the_send_dsl() {
    let totals: BTreeMap<u16, u32> = ledger()
        .into_iter()
        .grouped_by(|e| e.year)
        .into_iter()
        .map(|(year, expenses)| (year, expenses.iter().map(|e| e.amount).sum()))
        .collect();

    let mut outbox = Vec::new();
    for (year, total) in totals {
        Mailer::send_to(
            |mail| {
                mail.with_to("finance@example.com")
                    .with_subject(format!("Expenses {year}"))
                    .with_body(format!("Total: {total}"))
            },
            |mail| outbox.push(mail),
        );
    }

    assert_eq!(outbox.len(), 2);
    assert_eq!(outbox[0].subject(), "Expenses 2024");
    assert_eq!(outbox[0].body(), "Total: 420");
    assert_eq!(outbox[1].subject(), "Expenses 2025");
    assert_eq!(outbox[1].body(), "Total: 120");
    // the untouched sender field defaulted to empty in both sends
    assert!(outbox.iter().all(|mail| mail.from().is_empty()));
}

#[test]
fn display_rendering_flows_through_a_string_pipeline() {
    let mut rendered = String::new();
    Mailer::send_to(
        |mail| {
            mail.with_from("ava@example.com")
                .with_to("ben@example.com")
                .with_subject("Lunch?")
        },
        |mail| rendered = mail.to_string(),
    );

    let subject_line = pipe!(
        rendered,
        |text: String| {
            text.lines()
                .find(|line| line.starts_with("Subject:"))
                .map(str::to_owned)
                .unwrap_or_default()
        },
        |line: String| line.to_uppercase()
    );

    assert_eq!(subject_line, "SUBJECT: LUNCH?");
}

#[test]
fn constant_and_identity_round_out_pipelines() {
    let unchanged: Vec<i32> = vec![1, 2, 3].into_iter().map(identity).collect();
    assert_eq!(unchanged, vec![1, 2, 3]);

    let masked: Vec<&str> = vec![1, 2, 3].into_iter().map(constant("x")).collect();
    assert_eq!(masked, vec!["x", "x", "x"]);
}

#[test]
fn flip_reorders_arguments_for_partial_application() {
    fn repeat(text: &str, times: usize) -> String {
        text.repeat(times)
    }

    let times_first = flip(repeat);
    assert_eq!(times_first(3, "ab"), "ababab");
}
