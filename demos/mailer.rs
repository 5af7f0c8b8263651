//! Mailer Example
//!
//! Demonstrates the fluent immutable builder DSL: a value that can only be
//! assembled inside the closure that receives it, and only consumed by the
//! terminal action that ends the chain.
//!
//! Patterns covered:
//! - Chaining transformations on the hidden seed
//! - The stdout terminal action vs a delegate sink
//! - Silent normalization of absent input
//! - Fresh seeds across sends

use meander::Mailer;

/// Example 1: the default terminal action prints the rendered mail.
fn example_stdout_send() {
    println!("\n=== Example 1: Send to Standard Output ===");

    Mailer::send(|mail| {
        mail.with_from("ava@example.com")
            .with_to("ben@example.com")
            .with_subject("Lunch?")
            .with_body("Noon at the usual place.")
    });
}

/// Example 2: the embedding application decides what "sending" means.
fn example_delegate_sink() {
    println!("\n=== Example 2: Delegate Sink ===");

    let mut outbox = Vec::new();
    Mailer::send_to(
        |mail| {
            mail.with_from("ava@example.com")
                .with_to("ops@example.com")
                .with_subject("Deploy done")
        },
        |mail| outbox.push(mail),
    );

    println!("outbox holds {} mail(s)", outbox.len());
    println!("first subject: {:?}", outbox[0].subject());
}

/// Example 3: absent input degrades to the empty string, never an error.
fn example_normalization() {
    println!("\n=== Example 3: Normalization ===");

    let reply_to: Option<String> = None;
    Mailer::send_to(
        |mail| mail.with_from(reply_to).with_to("ben@example.com"),
        |mail| println!("from field is {:?} (empty, not missing)", mail.from()),
    );
}

/// Example 4: every send starts from a fresh, empty seed.
fn example_fresh_seeds() {
    println!("\n=== Example 4: Fresh Seeds ===");

    Mailer::send_to(
        |mail| mail.with_subject("first chain"),
        |mail| println!("first send subject: {:?}", mail.subject()),
    );
    Mailer::send_to(
        |mail| mail,
        |mail| println!("second send subject: {:?} (untouched seed)", mail.subject()),
    );
}

fn main() {
    example_stdout_send();
    example_delegate_sink();
    example_normalization();
    example_fresh_seeds();
}
