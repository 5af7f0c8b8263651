//! Color Pipeline Example
//!
//! Demonstrates replacing the decorator pattern with function composition:
//! instead of wrapping a color in layer after layer of decorator objects,
//! each effect is a plain `Color -> Color` function and the stack is a
//! `compose!` or `pipe!` expression.

use meander::transform::{brighten, darken, grayscale, negate, Color};
use meander::{compose, pipe};

/// Example 1: configured transformers compose like decorator layers.
fn example_composed_stack() {
    println!("\n=== Example 1: Composed Stack ===");

    let base = Color::new(60, 90, 120);

    // reads inside-out, like nested decorators: negate(brighten(base))
    let night_mode = compose!(negate, brighten(20));
    println!("base:       {base}");
    println!("night mode: {}", night_mode(base));
}

/// Example 2: the same stack in flow order.
fn example_flow_order() {
    println!("\n=== Example 2: Flow Order ===");

    let base = Color::new(60, 90, 120);
    let result = pipe!(base, grayscale, brighten(20), negate);
    println!("{base} -> grayscale -> brighten(20) -> negate = {result}");
}

/// Example 3: transformer stacks are values; build them from parts.
fn example_reusable_stacks() {
    println!("\n=== Example 3: Reusable Stacks ===");

    let soften = compose!(brighten(10), grayscale);
    let harden = compose!(darken(30), negate);

    for color in [Color::new(200, 40, 40), Color::new(20, 160, 90)] {
        println!("{color}: soft {} hard {}", soften(color), harden(color));
    }
}

fn main() {
    example_composed_stack();
    example_flow_order();
    example_reusable_stacks();
}
