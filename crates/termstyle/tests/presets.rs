//! Integration tests for the process-wide preset registry and output.
//!
//! The registry is additive-only and shared by every test in this binary, so
//! each test registers presets under its own names.

use std::io::Write;
use std::thread;

use termstyle::{
    add_preset, get_preset, has_preset, load_presets, print, print_to, render, style_to,
    with_style_to, Code, Col256, ColRgb, Color, ColorMode, Config, Error, PresetConfig,
    RenderMode, StyleString,
};

fn output_of(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn basic_error_preset() {
    let error = PresetConfig::new().prefix(
        StyleString::new("[ERROR] ")
            .pre(Code::Bright)
            .pre(Code::ForegroundRed),
    );
    add_preset("error", error).unwrap();

    let out = output_of(|buf| print_to(buf, "error", "boom").unwrap());
    assert_eq!(out, "\x1b[1m\x1b[31m[ERROR] boom\x1b[0m\n");
    assert_eq!(console::strip_ansi_codes(&out), "[ERROR] boom\n");
}

#[test]
fn palette_color_bounds() {
    let top = Col256::new(ColorMode::Foreground, 255).unwrap();
    add_preset(
        "color255",
        PresetConfig::new().prefix(StyleString::new("[Color #255]").pre(top)),
    )
    .unwrap();
    let preset = get_preset("color255").unwrap();
    assert!(render(&preset, RenderMode::All).contains("\x1b[38;5;255m"));

    match Col256::new(ColorMode::Foreground, 300) {
        Err(Error::BadColorId(id)) => assert_eq!(id, 300),
        other => panic!("Expected BadColorId, got {other:?}"),
    }
    assert!(Col256::new(ColorMode::Background, -1).is_err());
    assert!(Col256::new(ColorMode::Background, 0).is_ok());
}

#[test]
fn missing_preset_is_reported_by_name() {
    match print("nonexistent", "x") {
        Err(Error::PresetNotFound(name)) => assert_eq!(name, "nonexistent"),
        other => panic!("Expected PresetNotFound, got {other:?}"),
    }
    assert!(matches!(
        style_to(Vec::new(), "nonexistent"),
        Err(Error::PresetNotFound(_))
    ));
}

#[test]
fn duplicate_registration_keeps_first() {
    let first = PresetConfig::new().prefix("first ");
    let second = PresetConfig::new().prefix("second ");
    add_preset("dup", first).unwrap();

    let err = add_preset("dup", second).unwrap_err();
    assert_eq!(err.exit_code(), termstyle::EXIT_PRESET_NAME_USED);
    assert!(err.to_string().contains("dup"));
    assert_eq!(get_preset("dup").unwrap().prefix.text, "first ");
}

#[test]
fn leading_restore_is_first_and_single() {
    let preset = PresetConfig::new()
        .prefix(
            StyleString::new("> ")
                .pre(Code::Italic)
                .pre(ColRgb::new(ColorMode::Foreground, 10, 20, 30)),
        )
        .config(Config {
            leading_restore: true,
            ..Config::default()
        });
    add_preset("leading", preset).unwrap();

    let prefix = render(&get_preset("leading").unwrap(), RenderMode::Prefix);
    assert_eq!(prefix, "\x1b[0m\x1b[3m\x1b[38;2;10;20;30m> ");
}

// ============================================================================
// Scoped output
// ============================================================================

#[test]
fn fancy_input_preset() {
    let input = PresetConfig::new()
        .prefix("Type here")
        .suffix(
            StyleString::new(" >> ")
                .pre(Code::Flash)
                .post(Code::FlashReset)
                .post(Col256::background(28).unwrap()),
        )
        .config(Config {
            trailing_restore: false,
            trailing_newline: false,
            ..Config::default()
        });
    add_preset("input", input).unwrap();

    let out = output_of(|buf| {
        let scope = style_to(buf, "input").unwrap();
        drop(scope);
    });
    assert_eq!(out, "Type here\x1b[5m >> \x1b[25m\x1b[48;5;28m");
}

#[test]
fn scoped_output_streams_values_unstyled() {
    add_preset(
        "debug",
        PresetConfig::new().prefix(
            StyleString::new("[DEBUG] ")
                .pre(Code::Dim)
                .pre(Code::ForegroundCyan)
                .post(Code::DIM_RESET),
        ),
    )
    .unwrap();

    let out = output_of(|buf| {
        with_style_to(buf, "debug", |scope| {
            scope.print("count=").unwrap().print(3).unwrap();
            writeln!(scope, "!").unwrap();
        })
        .unwrap();
    });
    assert_eq!(out, "\x1b[2m\x1b[36m[DEBUG] \x1b[22mcount=3!\n\x1b[0m\n");
}

#[test]
fn scope_closes_once_after_explicit_finish() {
    add_preset("finish-once", PresetConfig::new().suffix("#")).unwrap();
    let out = output_of(|buf| {
        let scope = style_to(&mut *buf, "finish-once").unwrap();
        scope.finish().unwrap();
    });
    assert_eq!(out.matches('#').count(), 1);
}

// ============================================================================
// Loading and concurrency
// ============================================================================

#[test]
fn yaml_presets_render_like_built_ones() {
    load_presets(
        r#"
yaml-success:
  prefix:
    text: "[SUCCESS] "
    pre: [bright, foreground_green]
"#,
    )
    .unwrap();
    add_preset(
        "built-success",
        PresetConfig::new().prefix(
            StyleString::new("[SUCCESS] ")
                .pre(Code::Bright)
                .pre(Code::ForegroundGreen),
        ),
    )
    .unwrap();

    assert_eq!(
        get_preset("yaml-success").unwrap(),
        get_preset("built-success").unwrap()
    );
}

#[test]
fn yaml_failure_registers_nothing() {
    let result = load_presets(
        r#"
yaml-ok:
  prefix: { text: "ok" }
yaml-bad:
  prefix: { pre: [{ fg: 999 }] }
"#,
    );
    assert!(matches!(result, Err(Error::BadColorId(999))));
    assert!(!has_preset("yaml-ok"));
    assert!(!has_preset("yaml-bad"));
}

#[test]
fn concurrent_registration_and_lookup() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let name = format!("thread-{i}");
                let preset = PresetConfig::new()
                    .prefix(StyleString::new("").pre(Col256::foreground(i).unwrap()));
                add_preset(&name, preset).unwrap();
                get_preset(&name).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let preset = handle.join().unwrap();
        assert_eq!(
            preset.prefix.prestyles,
            vec![Color::Col256(Col256::foreground(i as i64).unwrap())]
        );
    }
}

#[test]
fn concurrent_duplicates_admit_exactly_one() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                add_preset("contended", PresetConfig::new().prefix(format!("{i}")))
            })
        })
        .collect();
    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(Result::is_ok)
        .count();
    assert_eq!(successes, 1);
}
