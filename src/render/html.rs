//! HTML swatch report.
//!
//! One table cell per ranked entry: the cell background is the entry's
//! colour premultiplied by alpha and down-sampled to 8 bits, the cell text
//! is its count.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rank::Ranking;
use crate::types::Colour;

/// Default cells per row for [`Layout::Grid`].
pub const DEFAULT_COLUMNS: usize = 10;

const HEAD: &str = "<!DOCTYPE html>\n<html>\n\
<head><style>td {min-width: 30pt; font-family: monospace;}</style></head>\n\
<body>\n<table>\n";

const TAIL: &str = "</table>\n</body>\n</html>\n";

/// How the cell background colour is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r,g,b)`
    Rgb,
}

impl Notation {
    pub fn format(self, colour: Colour) -> String {
        match self {
            Notation::Hex => colour.hex(),
            Notation::Rgb => colour.css_rgb(),
        }
    }
}

/// Arrangement of cells in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One cell per row.
    #[default]
    Column,
    /// Rows of up to `columns` cells.
    Grid { columns: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    pub layout: Layout,
    pub notation: Notation,
}

/// Write the full HTML document for `ranking` to `writer`.
pub fn render_html<W: Write>(ranking: &Ranking, options: &HtmlOptions, mut writer: W) -> Result<()> {
    writer.write_all(html_string(ranking, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render the full HTML document for `ranking` to a string.
pub fn html_string(ranking: &Ranking, options: &HtmlOptions) -> String {
    let mut html = String::from(HEAD);

    match options.layout {
        Layout::Column => {
            for entry in ranking {
                html.push_str("<tr>");
                html.push_str(&cell(entry.colour, entry.count, options.notation));
                html.push_str("</tr>\n");
            }
        }
        Layout::Grid { columns } => {
            let columns = columns.max(1);
            for row in ranking.as_slice().chunks(columns) {
                html.push_str("<tr>\n");
                for entry in row {
                    html.push_str("  ");
                    html.push_str(&cell(entry.colour, entry.count, options.notation));
                    html.push('\n');
                }
                html.push_str("</tr>\n");
            }
        }
    }

    html.push_str(TAIL);
    html
}

fn cell(colour: Colour, count: u64, notation: Notation) -> String {
    format!(
        "<td style=\"background-color: {};width: 10pt;\">{}</td>",
        notation.format(colour),
        count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::{Ranker, SortOrder, TieBreak};
    use crate::types::FrequencyTable;

    fn scenario() -> Ranking {
        let red = Colour::from_rgba8([255, 0, 0, 255]);
        let green = Colour::from_rgba8([0, 255, 0, 255]);
        let blue = Colour::from_rgba8([0, 0, 255, 255]);
        let table: FrequencyTable = [red, red, blue, green].into_iter().collect();
        Ranker::new(SortOrder::Descending)
            .tie_break(TieBreak::Colour)
            .rank(&table)
    }

    fn ranking_of(n: u16) -> Ranking {
        let table: FrequencyTable = (0..n).map(|i| Colour::rgb(i << 8, 0, 0)).collect();
        Ranker::new(SortOrder::Ascending)
            .tie_break(TieBreak::Colour)
            .rank(&table)
    }

    fn grid(columns: usize) -> HtmlOptions {
        HtmlOptions {
            layout: Layout::Grid { columns },
            notation: Notation::Hex,
        }
    }

    #[test]
    fn test_column_layout() {
        let html = html_string(&scenario(), &HtmlOptions::default());
        insta::assert_snapshot!(html, @r#"
        <!DOCTYPE html>
        <html>
        <head><style>td {min-width: 30pt; font-family: monospace;}</style></head>
        <body>
        <table>
        <tr><td style="background-color: #ff0000;width: 10pt;">2</td></tr>
        <tr><td style="background-color: #00ff00;width: 10pt;">1</td></tr>
        <tr><td style="background-color: #0000ff;width: 10pt;">1</td></tr>
        </table>
        </body>
        </html>
        "#);
    }

    #[test]
    fn test_rgb_notation() {
        let options = HtmlOptions {
            layout: Layout::Column,
            notation: Notation::Rgb,
        };
        let html = html_string(&scenario(), &options);
        assert!(html.contains("background-color: rgb(255,0,0);width: 10pt;\">2</td>"));
        assert!(!html.contains('#'));
    }

    #[test]
    fn test_cells_follow_ranking_order() {
        let html = html_string(&scenario(), &HtmlOptions::default());
        let red = html.find("#ff0000").unwrap();
        let blue = html.find("#0000ff").unwrap();
        assert!(red < blue);
    }

    #[test]
    fn test_empty_ranking_has_no_rows() {
        for options in [HtmlOptions::default(), grid(10)] {
            let html = html_string(&Ranking::default(), &options);
            assert!(html.contains("<table>\n</table>"));
            assert!(!html.contains("<tr>"));
            assert!(!html.contains("<td"));
        }
    }

    #[test]
    fn test_grid_wraps_after_columns() {
        let html = html_string(&ranking_of(25), &grid(10));
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<td").count(), 25);

        let rows: Vec<&str> = html.split("<tr>").skip(1).collect();
        assert_eq!(rows[0].matches("<td").count(), 10);
        assert_eq!(rows[1].matches("<td").count(), 10);
        assert_eq!(rows[2].matches("<td").count(), 5);
    }

    #[test]
    fn test_grid_exact_multiple_has_no_empty_row() {
        let html = html_string(&ranking_of(20), &grid(10));
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(!html.contains("<tr>\n</tr>"));
    }

    #[test]
    fn test_grid_zero_columns_treated_as_one() {
        let html = html_string(&ranking_of(3), &grid(0));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_sixteen_bit_colour_is_down_sampled() {
        let table: FrequencyTable = [Colour::rgb(0xABFF, 0x0100, 0x00FF)].into_iter().collect();
        let ranking = Ranker::new(SortOrder::Ascending).rank(&table);
        let html = html_string(&ranking, &HtmlOptions::default());
        assert!(html.contains("#ab0100"));
    }

    #[test]
    fn test_translucent_colour_is_premultiplied() {
        let table: FrequencyTable = [Colour::from_rgba8([255, 0, 0, 128])].into_iter().collect();
        let ranking = Ranker::new(SortOrder::Ascending).rank(&table);
        let html = html_string(&ranking, &HtmlOptions::default());
        assert!(html.contains("background-color: #800000;width: 10pt;\">1</td>"));
    }

    #[test]
    fn test_writer_output_matches_string() {
        for options in [HtmlOptions::default(), grid(3)] {
            let ranking = ranking_of(7);
            let mut out = Vec::new();
            render_html(&ranking, &options, &mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), html_string(&ranking, &options));
        }
    }
}
