use ftchart_core::ChartError;
use ftchart_core::api::{ChartData, LINE_SERIES_TYPE};
use ftchart_core::render::Color;

const CHARTS: &str = r##"[
    {
        "columns": [
            ["x", 1542412800000, 1542499200000, 1542585600000],
            ["y0", 37, null, 32],
            ["y1", 22, 12, 30.5]
        ],
        "types": {"y0": "line", "y1": "line", "x": "x"},
        "names": {"y0": "#0", "y1": ""},
        "colors": {"y0": "#3DC23F", "y1": "#F34C4480"}
    },
    {
        "columns": [["x", 1, 2, 3], ["y0", 5, 6, 7]],
        "types": {"y0": "bar"}
    }
]"##;

fn charts() -> Vec<ChartData> {
    ChartData::list_from_json_str(CHARTS).expect("chart list")
}

#[test]
fn columns_split_into_header_and_nullable_values() {
    let columns = charts()[0].raw_columns().expect("columns");
    assert_eq!(columns.len(), 3);
    assert!(columns[0].is_x_axis());
    assert_eq!(columns[0].values.len(), 3);
    assert_eq!(columns[1].id, "y0");
    assert_eq!(columns[1].values, vec![Some(37.0), None, Some(32.0)]);
    assert_eq!(columns[2].values[2], Some(30.5));
}

#[test]
fn series_meta_uses_names_and_hex_colors() {
    let data = &charts()[0];
    let y0 = data.series_meta("y0", Color::BLACK).expect("meta");
    assert_eq!(y0.name, "#0");
    assert_eq!(y0.color, Color::rgba8(0x3D, 0xC2, 0x3F, 1.0));

    // Empty names fall back to the id; 8-digit hex carries alpha.
    let y1 = data.series_meta("y1", Color::BLACK).expect("meta");
    assert_eq!(y1.name, "y1");
    assert_eq!(y1.color, Color::rgba8(0xF3, 0x4C, 0x44, f64::from(0x80_u8) / 255.0));
}

#[test]
fn missing_color_uses_fallback_and_unknown_type_is_tolerated() {
    let data = &charts()[1];
    assert_ne!(data.types.get("y0").map(String::as_str), Some(LINE_SERIES_TYPE));
    let meta = data.series_meta("y0", Color::WHITE).expect("meta");
    assert_eq!(meta.name, "y0");
    assert_eq!(meta.color, Color::WHITE);
}

#[test]
fn optional_maps_default_to_empty() {
    let data = ChartData::from_json_str(r#"{"columns": [["x", 1, 2, 3]]}"#).expect("data");
    assert!(data.colors.is_empty());
    assert!(data.names.is_empty());
    assert!(data.types.is_empty());
}

#[test]
fn bad_input_is_malformed() {
    let cases = [
        r#"{"columns": [[]]}"#,
        r#"{"columns": [[1, 2, 3]]}"#,
        r#"{"columns": [["x", 1, "two", 3]]}"#,
        r#"{"columns": [["x", 1, null, 3]]}"#,
    ];
    for input in cases {
        let data = ChartData::from_json_str(input).expect("json shape is valid");
        let err = data.raw_columns().expect_err("columns must be rejected");
        assert!(matches!(err, ChartError::MalformedInput(_)), "{input}");
    }

    let err = ChartData::from_json_str(r#"{"colors": {}}"#).expect_err("columns are required");
    assert!(matches!(err, ChartError::MalformedInput(_)));
}

#[test]
fn invalid_hex_colors_are_malformed() {
    for hex in ["green", "#12345", "3DC23F", "#GG0000", "#ÿÿÿ"] {
        let err = Color::from_hex(hex).expect_err("invalid hex");
        assert!(matches!(err, ChartError::MalformedInput(_)), "{hex}");
    }
}
