//! Subcommand handlers.
//!
//! Handlers write to any `Write` (and `prompt` reads from any `BufRead`) so
//! they can be driven from tests as well as from the terminal.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use serde_json::json;

use calc_core::calculations::coming_soon::NOTICE;
use calc_core::inputs::{parse_assignment, FieldKind, FieldSpec};
use calc_core::{catalog, CalculatorScreen, DisplaySettings};

use crate::cli::{ComputeArgs, ListArgs, PromptArgs, ShowArgs};

pub fn run_list(args: &ListArgs, out: &mut impl Write) -> Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, catalog::all())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<26} {:<28} STATUS", "SLUG", "TITLE")?;
    for descriptor in catalog::all() {
        let status = if descriptor.is_implemented() { "ready" } else { "coming soon" };
        writeln!(out, "{:<26} {:<28} {}", descriptor.id, descriptor.title, status)?;
    }
    writeln!(out)?;
    writeln!(out, "{} of {} calculators ready", catalog::implemented().count(), catalog::all().len())?;
    Ok(())
}

pub fn run_show(args: &ShowArgs, out: &mut impl Write) -> Result<()> {
    let descriptor = catalog::get(&args.slug)?;

    writeln!(out, "{} ({})", descriptor.title, descriptor.path())?;
    writeln!(out, "{}", descriptor.description)?;
    if !descriptor.aliases.is_empty() {
        writeln!(out, "Also known as: {}", descriptor.aliases.join(", "))?;
    }
    writeln!(out)?;

    if !descriptor.is_implemented() {
        writeln!(out, "{}: {}", NOTICE.title, NOTICE.message)?;
        return Ok(());
    }

    writeln!(out, "Fields:")?;
    for field in descriptor.fields() {
        let unit = if field.unit.is_empty() { String::new() } else { format!(" [{}]", field.unit) };
        let default = if field.default.is_empty() { "required".to_string() } else { format!("default {}", field.default) };
        writeln!(out, "  {:<14} {}{} ({})", field.name, field.label, unit, default)?;
        for option in field.options() {
            writeln!(out, "  {:<14}   {} = {}", "", option.value, option.label)?;
        }
    }
    Ok(())
}

pub fn run_compute(args: &ComputeArgs, display: &DisplaySettings, out: &mut impl Write) -> Result<()> {
    let descriptor = catalog::get(&args.slug)?;
    let mut screen = CalculatorScreen::open(descriptor);

    for assignment in &args.set {
        let (name, value) = parse_assignment(assignment)?;
        if !descriptor.fields().iter().any(|f| f.name == name) {
            bail!("{} has no field named '{}' (see `calc_cli show {}`)", descriptor.id, name, descriptor.id);
        }
        screen.set_field(&name, value);
    }

    write_outcome(&screen, args.json, args.explain, display, out)
}

pub fn run_prompt(
    args: &PromptArgs,
    display: &DisplaySettings,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let descriptor = catalog::get(&args.slug)?;
    writeln!(out, "{}", descriptor.title)?;
    writeln!(out, "{}", descriptor.description)?;
    writeln!(out)?;

    let mut screen = CalculatorScreen::open(descriptor);
    for field in descriptor.fields() {
        for (i, option) in field.options().iter().enumerate() {
            writeln!(out, "  {}) {}", i + 1, option.label)?;
        }
        let prompt = if field.unit.is_empty() {
            format!("{} [{}]: ", field.label, field.default)
        } else {
            format!("{} ({}) [{}]: ", field.label, field.unit, field.default)
        };

        let value = match prompt_text(&prompt, input, out)? {
            Some(answer) => resolve_choice(field, answer),
            None => field.default.to_string(),
        };
        screen.set_field(field.name, value);
    }
    writeln!(out)?;

    write_outcome(&screen, false, true, display, out)
}

/// Print the result block, the "coming soon" notice, or (with `explain`)
/// why there is no result. No result without `explain` prints nothing.
fn write_outcome(
    screen: &CalculatorScreen,
    json: bool,
    explain: bool,
    display: &DisplaySettings,
    out: &mut impl Write,
) -> Result<()> {
    let descriptor = screen.descriptor();

    if !descriptor.is_implemented() {
        if json {
            serde_json::to_writer_pretty(&mut *out, &NOTICE)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}: {}", NOTICE.title, NOTICE.message)?;
        }
        return Ok(());
    }

    match screen.try_result() {
        Ok(estimate) if json => {
            tracing::debug!(calculator = descriptor.id, area_m2 = estimate.area_m2(), "computed");
            serde_json::to_writer_pretty(&mut *out, &estimate)?;
            writeln!(out)?;
        }
        Ok(estimate) => {
            tracing::debug!(calculator = descriptor.id, area_m2 = estimate.area_m2(), "computed");
            write!(out, "{}", estimate.result_set(display).to_plain_text())?;
        }
        Err(e) => {
            tracing::debug!(calculator = descriptor.id, error = %e, "no result");
            if explain && json {
                serde_json::to_writer_pretty(&mut *out, &json!({ "code": e.error_code(), "error": e }))?;
                writeln!(out)?;
            } else if explain {
                writeln!(out, "No result ({}): {}", e.error_code(), e)?;
                if e.is_input_error() {
                    writeln!(out, "See `calc_cli show {}` for fields, units and defaults.", descriptor.id)?;
                }
            }
        }
    }
    Ok(())
}

/// Print a prompt and read one line; blank input or end of input is `None`
fn prompt_text(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

/// A choice can be answered with its listed number
fn resolve_choice(field: &FieldSpec, answer: String) -> String {
    if let FieldKind::Choice { options } = field.kind {
        if let Ok(n) = answer.parse::<usize>() {
            if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
                return option.value.to_string();
            }
        }
    }
    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn compute(slug: &str, set: &[&str], json: bool, explain: bool) -> String {
        let args = ComputeArgs {
            slug: slug.to_string(),
            set: set.iter().map(|s| s.to_string()).collect(),
            json,
            explain,
        };
        let mut out = Vec::new();
        run_compute(&args, &DisplaySettings::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_table_and_json() {
        let mut out = Vec::new();
        run_list(&ListArgs { json: false }, &mut out).unwrap();
        let table = String::from_utf8(out).unwrap();
        assert_eq!(table.lines().count(), 23);
        assert!(table.contains("brick-wall"));
        assert!(table.ends_with("4 of 20 calculators ready\n"));
        assert!(table.contains("coming soon"));

        let mut out = Vec::new();
        run_list(&ListArgs { json: true }, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(20));
        assert_eq!(json[0]["id"], "tile-flooring");
    }

    #[test]
    fn test_show_lists_fields_and_options() {
        let mut out = Vec::new();
        run_show(&ShowArgs { slug: "dinding-bata".into() }, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Brick Wall (/calculator/brick-wall)"));
        assert!(text.contains("wall_length"));
        assert!(text.contains("concrete-block = Concrete Block (20x40 cm)"));

        assert!(run_show(&ShowArgs { slug: "nope".into() }, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_compute_text() {
        let text = compute("brick-wall", &["wall_length=4", "wall_height=3"], false, false);
        assert!(text.starts_with("Results (for 12.00 m²)"));
        assert!(text.contains("840"));
        assert!(text.contains("138.00"));
    }

    #[test]
    fn test_compute_json() {
        let text = compute("wall-painting", &["wall_length=4", "wall_height=3"], true, false);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["type"], "WallPainting");
        assert_eq!(json["gallons_5kg"], 1);
    }

    #[test]
    fn test_invalid_input_prints_nothing_unless_explained() {
        assert_eq!(compute("wall-plastering", &["wall_length=0", "wall_height=3"], false, false), "");

        let text = compute("wall-plastering", &["wall_length=0", "wall_height=3"], false, true);
        assert!(text.starts_with("No result (INVALID_INPUT)"));
        assert!(text.contains("See `calc_cli show wall-plastering`"));

        let text = compute("wall-plastering", &["wall_height=3"], true, true);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["code"], "MISSING_FIELD");
    }

    #[test]
    fn test_compute_stub_prints_notice() {
        let text = compute("roof-tiles", &[], false, false);
        assert!(text.starts_with("Coming Soon: "));
    }

    #[test]
    fn test_compute_rejects_unknown_field() {
        let args = ComputeArgs {
            slug: "brick-wall".into(),
            set: vec!["height=3".into()],
            json: false,
            explain: false,
        };
        assert!(run_compute(&args, &DisplaySettings::default(), &mut Vec::new()).is_err());
    }

    #[test]
    fn test_prompt_uses_defaults_and_option_numbers() {
        // length, height, then option 2 (concrete block)
        let mut input = Cursor::new("4\n3\n2\n");
        let mut out = Vec::new();
        run_prompt(
            &PromptArgs { slug: "brick-wall".into() },
            &DisplaySettings::default(),
            &mut input,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Brick Type [standard-red]: "));
        assert!(text.contains("132"));
        assert!(text.contains("116.16"));
    }

    #[test]
    fn test_prompt_end_of_input_explains() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        run_prompt(
            &PromptArgs { slug: "tile-flooring".into() },
            &DisplaySettings::default(),
            &mut input,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No result (MISSING_FIELD)"));
    }
}
