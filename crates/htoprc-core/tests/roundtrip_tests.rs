use htoprc_core::{parse, serialize, Configuration, SerializeOptions};

/// Assert that parse → serialize → parse reproduces the same configuration.
fn assert_roundtrip(text: &str, options: &SerializeOptions) -> Configuration {
    let original = parse(text).config;
    let written = serialize(&original, options);
    let reparsed = parse(&written).config;
    assert_eq!(
        original, reparsed,
        "Roundtrip failed:\n  input:\n{text}\n  serialized:\n{written}"
    );
    reparsed
}

fn full() -> SerializeOptions {
    SerializeOptions::default()
}

fn diff_only() -> SerializeOptions {
    SerializeOptions {
        only_non_defaults: true,
        ..Default::default()
    }
}

#[test]
fn roundtrip_empty() {
    assert_roundtrip("", &full());
    assert_roundtrip("", &diff_only());
}

#[test]
fn roundtrip_stock_file() {
    let text = include_str!("fixtures/htop-3.2.htoprc");
    assert_roundtrip(text, &full());
    assert_roundtrip(text, &diff_only());
}

#[test]
fn roundtrip_unknown_options() {
    let config = assert_roundtrip(
        "show_cached_memory=1\nhighlight_changes=1\nweird key=with = signs\n=empty key",
        &full(),
    );
    assert_eq!(config.unknown_options.len(), 3);
    assert_eq!(config.unknown_options.get("weird key"), Some("with = signs"));
    assert_eq!(config.unknown_options.get(""), Some("empty key"));
}

#[test]
fn roundtrip_screens_with_partial_options() {
    let text = "screen:Main=PID USER\n.sort_key=PERCENT_CPU\nscreen:IO=PID\n.tree_view=1\n\
                .sort_direction=1\n.dynamic=custom";
    let config = assert_roundtrip(text, &diff_only());
    assert_eq!(config.screens[0].tree_view, None);
    assert_eq!(config.screens[1].sort_key, None);
}

#[test]
fn roundtrip_meters() {
    assert_roundtrip(
        "column_meters_0=CPU Memory Swap\ncolumn_meter_modes_0=3 99\n\
         column_meters_1=Tasks\ncolumn_meter_modes_1=4\n\
         column_meters_2=Clock\ncolumn_meter_modes_3=1 1",
        &diff_only(),
    );
}

#[test]
fn roundtrip_legacy_file() {
    // v2 files name header sides instead of numbered columns
    let text = "config_reader_min_version=2\nleft_meters=AllCPUs Memory\nleft_meter_modes=1 1\n\
                right_meters=Tasks\nright_meter_modes=2";
    let config = assert_roundtrip(text, &full());
    assert!(config.left_meters.is_empty());
    assert!(config.right_meters.is_empty());
    assert_eq!(config.legacy_meters.len(), 4);
}

#[test]
fn roundtrip_malformed_values() {
    assert_roundtrip(
        "delay=abc\nconfig_reader_min_version=x\nfields=1 two 3\ntree_view=yes\nheader_layout=",
        &full(),
    );
}

#[test]
fn roundtrip_is_stable_text() {
    let text = include_str!("fixtures/htop-3.2.htoprc");
    let once = serialize(&parse(text).config, &full());
    let twice = serialize(&parse(&once).config, &full());
    assert_eq!(once, twice);
}

#[test]
fn roundtrip_crlf_input() {
    let text = include_str!("fixtures/htop-3.2.htoprc").replace('\n', "\r\n");
    assert_eq!(
        parse(&text).config,
        parse(include_str!("fixtures/htop-3.2.htoprc")).config
    );
    assert_roundtrip(&text, &full());
}
