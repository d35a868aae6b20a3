//! Product Filtering Example
//!
//! Shows why per-attribute filter methods do not scale, and how predicates
//! plus one generic filter replace them.
//!
//! Run with: cargo run --example products

use sift::filter;
use sift::predicate::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug)]
struct Product {
    name: &'static str,
    color: Color,
    size: Size,
}

/// The approach that does not scale: one method per attribute combination,
/// each duplicating the same loop.
struct ProductFilter;

impl ProductFilter {
    fn by_color<'a>(&self, items: &'a [Product], color: Color) -> Vec<&'a Product> {
        let mut result = Vec::new();
        for item in items {
            if item.color == color {
                result.push(item);
            }
        }
        result
    }

    fn by_color_and_size<'a>(
        &self,
        items: &'a [Product],
        color: Color,
        size: Size,
    ) -> Vec<&'a Product> {
        let mut result = Vec::new();
        for item in items {
            if item.color == color && item.size == size {
                result.push(item);
            }
        }
        result
    }
}

/// A criterion added later, without touching anything above.
struct ColorSpecification(Color);

impl Predicate<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

fn main() {
    println!("=== Product Filtering Example ===\n");

    let items = [
        Product {
            name: "Apple",
            color: Color::Green,
            size: Size::Small,
        },
        Product {
            name: "Tree",
            color: Color::Green,
            size: Size::Large,
        },
        Product {
            name: "House",
            color: Color::Blue,
            size: Size::Large,
        },
    ];

    hand_written_filters(&items);
    composable_predicates(&items);
}

fn hand_written_filters(items: &[Product]) {
    println!("--- One method per combination ---\n");

    let pf = ProductFilter;
    for item in pf.by_color(items, Color::Green) {
        println!("{} is green", item.name);
    }
    for item in pf.by_color_and_size(items, Color::Green, Size::Large) {
        println!("{} is green and large", item.name);
    }
    println!();
}

fn composable_predicates(items: &[Product]) {
    println!("--- Composable predicates ---\n");

    let green = ColorSpecification(Color::Green);
    for item in filter(items, &green) {
        println!("{} is green", item.name);
    }

    let large = field(|p: &Product| &p.size, eq(Size::Large));
    for item in filter(items, &(&green).and(&large)) {
        println!("{} is green and large", item.name);
    }

    let green_and_roomy = (&green).and(field(|p: &Product| &p.size, ge(Size::Medium)));
    for item in filter(items, &green_and_roomy) {
        println!("{} is green and at least medium", item.name);
    }

    let red = ColorSpecification(Color::Red);
    println!(
        "red items: {:?}",
        filter(items, &red)
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
    );

    let not_green = green.not();
    for item in filter(items, &not_green) {
        println!("{} is not green ({:?})", item.name, item);
    }
}
