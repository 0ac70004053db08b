use colored::*;

use crate::diagram::{Diagram, PathStyle};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

/// Warn about bands that render but are hard to see or not what was asked for
pub(crate) fn print_diagram_warnings(diagram: &Diagram) {
    for band in &diagram.bands {
        if band.color.fell_back {
            print_warning(&format!(
                "line {}: colour index already taken, {} uses a random palette colour",
                band.line,
                band.name.trim()
            ));
        }
        if band.geometry.width < 1.0 {
            print_warning(&format!(
                "line {}: {} is only {:.2}px wide",
                band.line,
                band.name.trim(),
                band.geometry.width
            ));
        }
    }
}

pub(crate) fn print_diagram_info(filename: &str, diagram: &Diagram) {
    let style = match diagram.style {
        PathStyle::Curve => "curve",
        PathStyle::Straight => "straight",
    };
    println!("File: {}", get_display_name(filename));
    println!("Title: {}", diagram.title);
    println!(
        "Window: {}x{} px, style: {}",
        diagram.width, diagram.height, style
    );
    println!(
        "Source: {:.1} px wide at x {:.1}, label {:?}",
        diagram.source.width, diagram.source.x, diagram.source.label
    );
    println!();
}

fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

const TABLE_WIDTH: usize = 72;

pub(crate) fn print_band_table(diagram: &Diagram) {
    println!("[Bands]");
    println!(
        "{}",
        style_label(&format!(
            "{:<4}{:<20}{:>10}{:>10}{:>20}  {}",
            "#", "NAME", "VALUE", "WIDTH", "DEST X", "COLOUR"
        ))
    );
    print_separator(TABLE_WIDTH);

    for (i, band) in diagram.bands.iter().enumerate() {
        let rgb = band.color.rgb;
        let span = format!(
            "{:.1}-{:.1}",
            band.geometry.dest_x_left, band.geometry.dest_x_right
        );
        println!(
            "{:<4}{:<20}{:>10}{:>10.1}{:>20}  {} {}",
            i + 1,
            truncate(band.name.trim(), 19),
            format_value(band.value),
            band.geometry.width,
            span,
            "██".truecolor(rgb.r, rgb.g, rgb.b),
            rgb.to_hex()
        );
    }

    print_separator(TABLE_WIDTH);
    let total: f64 = diagram.bands.iter().map(|b| b.value).sum();
    println!(
        "{:<24}{:>10}{:>10.1}",
        "TOTAL",
        format_value(total),
        diagram.source.width
    );
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(max - 1).collect();
        short.push('…');
        short
    }
}

/// Whole numbers without a decimal point, otherwise up to 2 decimals
fn format_value(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
