//! Canvas DSL CLI
//!
//! Usage:
//!   canvas-dsl [OPTIONS] [FILE]
//!
//! Reads canvas DSL from a file or stdin. By default, prints the canonical
//! form to stdout. `--check` validates instead; `--plan WxH` emits the
//! layout plan as JSON for a drawing backend.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use canvas_dsl::{
    parse, plan, validate, CharMetrics, LayoutConfig, Locale, SectionBlock,
};

#[derive(Parser)]
#[command(name = "canvas-dsl")]
#[command(about = "Line-oriented DSL for business model canvases")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Validate the input instead of formatting it
    #[arg(short, long)]
    check: bool,

    /// Compute the layout plan at WIDTHxHEIGHT and print it as JSON
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    plan: Option<String>,

    /// Locale file for section titles and placeholders (TOML format)
    #[arg(short, long)]
    locale: Option<PathBuf>,

    /// Dump block geometry to stderr (only meaningful with --plan)
    #[arg(short, long)]
    debug: bool,

    /// Show language grammar reference
    #[arg(short, long)]
    grammar: bool,

    /// Show annotated examples
    #[arg(short, long)]
    examples: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.grammar {
        print_grammar();
        return ExitCode::SUCCESS;
    }

    if cli.examples {
        print_examples();
        return ExitCode::SUCCESS;
    }

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    let locale = match &cli.locale {
        Some(path) => match Locale::from_file(path) {
            Ok(locale) => locale,
            Err(e) => {
                eprintln!("Error loading locale '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Locale::default(),
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    if cli.check {
        let result = validate(&source);
        if result.valid {
            println!("ok");
            return ExitCode::SUCCESS;
        }
        for error in &result.errors {
            eprintln!("error: {}", error);
        }
        return ExitCode::FAILURE;
    }

    if let Some(dimensions) = &cli.plan {
        let (width, height) = match parse_dimensions(dimensions) {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let doc = parse(&source);
        let config = LayoutConfig::default().with_locale(locale);
        let layout_plan = plan(&doc, width, height, &CharMetrics::default(), &config);

        if cli.debug {
            eprintln!("=== Layout Debug ===");
            eprintln!(
                "canvas {}x{} scale {:.3}",
                layout_plan.canvas_width, layout_plan.canvas_height, layout_plan.scale
            );
            for block in &layout_plan.blocks {
                print_block(block);
            }
            eprintln!("====================");
        }

        return match serde_json::to_string_pretty(&layout_plan) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing plan: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    // Default action: canonical formatting
    let doc = parse(&source);
    print!("{}", canvas_dsl::format(&doc));
    ExitCode::SUCCESS
}

fn print_block(block: &SectionBlock) {
    let lines: usize = block
        .item_runs
        .iter()
        .map(|run| run.bullet_lines.len())
        .sum();
    eprintln!(
        "[{}] x={:.1} y={:.1} w={:.1} h={:.1} items={} lines={}{}",
        block.section_key,
        block.rect.x,
        block.rect.y,
        block.rect.w,
        block.rect.h,
        block.item_runs.len(),
        lines,
        if block.truncated { " truncated" } else { "" }
    );
}

/// Parse a "WIDTHxHEIGHT" string like "1200x800"
fn parse_dimensions(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width: f64 = w
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{}'", w))?;
    let height: f64 = h
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{}'", h))?;
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(format!("dimensions must be positive, got '{}'", s));
    }
    Ok((width, height))
}

fn print_intro() {
    println!(
        r#"Canvas DSL - line-oriented language for business model canvases

USAGE:
    canvas-dsl [OPTIONS] [FILE]
    echo '<canvas text>' | canvas-dsl

OPTIONS:
    -c, --check        Validate instead of formatting
    -p, --plan WxH     Print the layout plan as JSON (e.g. -p 1200x800)
    -l, --locale FILE  Locale table for section titles (TOML file)
    -d, --debug        With --plan, dump block geometry to stderr
    -g, --grammar      Show language grammar reference
    -e, --examples     Show annotated examples
    -h, --help         Print help

QUICK START:
    printf 'bmc\ncustomer-segments:\n  - startups\n' | canvas-dsl

This parses a one-section canvas and prints its canonical form.
Run --grammar for syntax reference or --examples for full canvases."#
    );
}

fn print_grammar() {
    println!(
        r#"CANVAS DSL GRAMMAR
==================

STRUCTURE
---------
bmc | lmc                 Opens the canvas block; lines before it are ignored
title: <text>             Canvas title (optional)
description: <text>       Canvas description (optional)
<section-key>:            Opens a section
  - <item>                Adds an item to the open section ('*' also works)
# comment                 Ignored anywhere; blank lines too

Unrecognized lines are skipped silently. The grammar never fails.

BMC SECTIONS (canonical order)
------------------------------
customer-segments, value-propositions, channels, customer-relationships,
revenue-streams, key-resources, key-activities, key-partnerships,
cost-structure

LMC SECTIONS (canonical order)
------------------------------
problem, solution, unique-value-proposition, unfair-advantage,
customer-segments, key-metrics, channels, cost-structure, revenue-streams

TYPE INFERENCE
--------------
The keyword only opens the block; the canvas type is inferred from which
sections carry content. Any LMC-exclusive section makes the canvas an LMC;
otherwise any BMC-exclusive section makes it a BMC; a canvas using only
shared sections defaults to BMC."#
    );
}

fn print_examples() {
    println!(
        r#"CANVAS DSL EXAMPLES
===================

EXAMPLE 1: Business Model Canvas
--------------------------------
bmc
title: Acme Widgets
description: Industrial widgets for small manufacturers

customer-segments:
  - small manufacturers
  - hardware startups

value-propositions:
  - widgets that survive harsh environments

channels:
  - direct sales
  - distributor network

revenue-streams:
  - per-unit sales
  - maintenance contracts

EXAMPLE 2: Lean Model Canvas
----------------------------
lmc
title: Fleetly

problem:
  - fleet managers lack real-time vehicle status
  - maintenance is reactive, not planned

solution:
  - plug-in telemetry with predictive alerts

unique-value-proposition:
  - cut unplanned downtime in half

key-metrics:
  - active vehicles
  - alerts acted on within a day

EXAMPLE 3: Rendering a plan
---------------------------
canvas-dsl --plan 1200x800 my-canvas.txt > plan.json

Produces the nine-region layout plan with wrapped text lines, ready for a
drawing backend."#
    );
}
