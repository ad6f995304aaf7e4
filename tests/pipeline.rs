//! End-to-end checks: PNG bytes -> table -> ranking -> report.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

use colorrank::{
    extract, html_string, rank, render_json, top_n, Colour, HtmlOptions, Layout, Notation,
    RankError, SortOrder,
};

fn png(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba(f(x, y)));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn stripes(x: u32, y: u32) -> [u8; 4] {
    // Column x gets colour x % 5; rows repeat, so counts differ by column.
    let band = (x % 5) as u8;
    let alpha = if y % 4 == 0 { 128 } else { 255 };
    [band * 50, 255 - band * 50, 7, alpha]
}

#[test]
fn test_counts_sum_to_pixel_count() {
    let bytes = png(13, 9, stripes);
    let table = extract(Cursor::new(bytes)).unwrap();
    assert_eq!(table.total(), 13 * 9);
}

#[test]
fn test_ranking_covers_table() {
    let table = extract(Cursor::new(png(13, 9, stripes))).unwrap();

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let ranking = rank(&table, order);
        assert_eq!(ranking.len(), table.len());
        for entry in &ranking {
            assert_eq!(table.get(&entry.colour), Some(entry.count));
        }
    }
}

#[test]
fn test_ascending_reversed_matches_descending() {
    let table = extract(Cursor::new(png(13, 9, stripes))).unwrap();

    let reversed: Vec<u64> = rank(&table, SortOrder::Ascending)
        .reverse()
        .iter()
        .map(|e| e.count)
        .collect();
    let descending: Vec<u64> = rank(&table, SortOrder::Descending)
        .iter()
        .map(|e| e.count)
        .collect();

    assert_eq!(reversed, descending);
}

#[test]
fn test_scenario_report() {
    let pixels = [
        [255, 0, 0, 255],
        [255, 0, 0, 255],
        [0, 0, 255, 255],
        [0, 255, 0, 255],
    ];
    let table = extract(Cursor::new(png(2, 2, |x, y| pixels[(y * 2 + x) as usize]))).unwrap();
    let ranking = rank(&table, SortOrder::Descending);

    assert_eq!(ranking.first().unwrap().colour, Colour::from_rgba8([255, 0, 0, 255]));
    assert_eq!(ranking.first().unwrap().count, 2);

    let options = HtmlOptions {
        layout: Layout::Grid { columns: 10 },
        notation: Notation::Rgb,
    };
    let html = html_string(&ranking, &options);
    assert_eq!(html.matches("<tr>").count(), 1);
    assert!(html.contains("<td style=\"background-color: rgb(255,0,0);width: 10pt;\">2</td>"));
}

#[test]
fn test_single_colour_top_n() {
    let table = extract(Cursor::new(png(1, 1, |_, _| [9, 9, 9, 255]))).unwrap();
    let ranking = top_n(&table, SortOrder::Descending, table.len());
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.first().unwrap().count, 1);
}

#[test]
fn test_json_report_in_ranked_order() {
    let table = extract(Cursor::new(png(13, 9, stripes))).unwrap();
    let ranking = rank(&table, SortOrder::Descending);

    let mut out = Vec::new();
    render_json(&ranking, &mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let counts: Vec<u64> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["count"].as_u64().unwrap())
        .collect();

    assert_eq!(counts, ranking.iter().map(|e| e.count).collect::<Vec<_>>());
}

#[test]
fn test_translucent_pixel_renders_premultiplied_swatch() {
    let table = extract(Cursor::new(png(1, 1, |_, _| [255, 0, 0, 128]))).unwrap();
    assert_eq!(table.get(&Colour::from_rgba8([255, 0, 0, 128])), Some(1));

    let html = html_string(&rank(&table, SortOrder::Ascending), &HtmlOptions::default());
    assert!(html.contains("<td style=\"background-color: #800000;width: 10pt;\">1</td>"));
}

#[test]
fn test_non_image_bytes_fail_to_decode() {
    let result = extract(Cursor::new(b"GIF89a not really".to_vec()));
    assert!(matches!(result, Err(RankError::Decode { .. })));
}
