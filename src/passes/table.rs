use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::Config;
use crate::passes::bearing::bearing_to_degrees;
use crate::passes::date::normalize_date;
use crate::passes::error::PassError;
use crate::passes::types::{DateGroup, Pass};

pub const PASS_TABLE_SELECTOR: &str = "table.standardTable";
pub const ROW_CELLS: usize = 12;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(PASS_TABLE_SELECTOR).expect("valid table selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid cell selector"));

pub enum TableLookup<'a> {
    Found(ElementRef<'a>),
    NotFound,
}

#[derive(Debug, PartialEq)]
pub enum RowDecision {
    Keep { date: String, pass: Pass },
    /// Too few cells to be a pass row.
    Skip { cells: usize },
}

pub fn find_table<'a>(document: &'a Html, selector: &Selector) -> TableLookup<'a> {
    match document.select(selector).next() {
        Some(table) => TableLookup::Found(table),
        None => TableLookup::NotFound,
    }
}

/// Trimmed text of every `td` in the row, in order.
pub fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL)
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect()
}

/// Map one row's cells onto a [`Pass`] and its date key.
///
/// Columns: date, magnitude, then time/altitude/azimuth for start, peak
/// and end, then pass type. Cells past the twelfth are ignored.
pub fn decode_row(cells: &[String], months: &[String], year: i32) -> Result<RowDecision, PassError> {
    if cells.len() < ROW_CELLS {
        return Ok(RowDecision::Skip { cells: cells.len() });
    }

    let date = normalize_date(&cells[0], months, year)?;
    let pass = Pass {
        magnitude: cells[1].clone(),
        start_time: cells[2].clone(),
        start_altitude_deg: parse_altitude(&cells[3])?,
        start_azimuth_deg: bearing_to_degrees(&cells[4]),
        peak_time: cells[5].clone(),
        peak_altitude_deg: parse_altitude(&cells[6])?,
        peak_azimuth_deg: bearing_to_degrees(&cells[7]),
        end_time: cells[8].clone(),
        end_altitude_deg: parse_altitude(&cells[9])?,
        end_azimuth_deg: bearing_to_degrees(&cells[10]),
        kind: cells[11].clone(),
    };

    Ok(RowDecision::Keep { date, pass })
}

/// Drop the trailing unit glyph (`°`) and parse whole degrees.
pub fn parse_altitude(cell: &str) -> Result<i32, PassError> {
    let mut chars = cell.chars();
    chars.next_back();
    chars
        .as_str()
        .trim()
        .parse()
        .map_err(|_| PassError::InvalidAltitude(cell.to_string()))
}

/// Group every pass row of the summary table by date.
///
/// A page without the table yields an empty group.
pub fn parse_passes(html: &str, config: &Config, year: i32) -> Result<DateGroup, PassError> {
    let document = Html::parse_document(html);
    let table = match find_table(&document, &TABLE) {
        TableLookup::Found(table) => table,
        TableLookup::NotFound => {
            log::warn!("No pass table ({}) found in page", PASS_TABLE_SELECTOR);
            return Ok(DateGroup::new());
        }
    };

    let mut grouped = DateGroup::new();
    for (i, row) in table.select(&ROW).enumerate().skip(1) {
        let cells = row_cells(row);
        match decode_row(&cells, &config.months, year)? {
            RowDecision::Keep { date, pass } => grouped.entry(date).or_default().push(pass),
            RowDecision::Skip { cells } => {
                log::debug!("Skipping row {} with {} cells", i, cells);
            }
        }
    }

    log::info!(
        "Parsed {} passes over {} dates",
        grouped.values().map(Vec::len).sum::<usize>(),
        grouped.len()
    );
    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<html><body>
<table class="navTable"><tr><td>menu</td></tr></table>
<table class="standardTable" cellspacing="0">
  <thead>
    <tr><th>Fecha</th><th>Brillo</th><th colspan="3">Inicio</th><th colspan="3">Punto más alto</th><th colspan="3">Fin</th><th>Tipo de paso</th></tr>
  </thead>
  <tbody>
    <tr class="clickableRow">
      <td><a href="passdetails.aspx">05 may</a></td><td>-3,1</td>
      <td>19:02:11</td><td>10°</td><td>SO</td>
      <td>19:05:20</td><td>64°</td><td>SE</td>
      <td>19:08:29</td><td>10°</td><td>NE</td>
      <td>visible</td>
    </tr>
    <tr class="clickableRow">
      <td>05 may</td><td>-1,2</td>
      <td>20:38:45</td><td>10°</td><td>ONO</td>
      <td>20:41:02</td><td>21°</td><td>NNO</td>
      <td>20:41:02</td><td>21°</td><td>XX</td>
      <td>eclipsado</td>
    </tr>
    <tr><td>mensaje</td><td>sin datos</td></tr>
    <tr class="clickableRow">
      <td>6 May</td><td>-2,0</td>
      <td>19:50:00</td><td>12°</td><td>o</td>
      <td>19:52:00</td><td>40°</td><td>n</td>
      <td>19:55:00</td><td>10°</td><td>e</td>
      <td>visible</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn months() -> Vec<String> {
        Config::default().months
    }

    #[test]
    fn parses_fixture_grouped_by_date() {
        let grouped = parse_passes(FIXTURE, &Config::default(), 2025).unwrap();
        assert_eq!(
            grouped.keys().collect::<Vec<_>>(),
            vec!["2025-05-05", "2025-05-06"]
        );

        let day = &grouped["2025-05-05"];
        assert_eq!(day.len(), 2);
        assert_eq!(
            day[0],
            Pass {
                magnitude: "-3,1".into(),
                start_time: "19:02:11".into(),
                start_altitude_deg: 10,
                start_azimuth_deg: 225,
                peak_time: "19:05:20".into(),
                peak_altitude_deg: 64,
                peak_azimuth_deg: 135,
                end_time: "19:08:29".into(),
                end_altitude_deg: 10,
                end_azimuth_deg: 45,
                kind: "visible".into(),
            }
        );
        assert_eq!(day[1].magnitude, "-1,2");
        assert_eq!(day[1].start_azimuth_deg, 292);
        assert_eq!(day[1].peak_azimuth_deg, 337);
        assert_eq!(day[1].end_azimuth_deg, -1);
        assert_eq!(day[1].kind, "eclipsado");

        let next = &grouped["2025-05-06"];
        assert_eq!(next.len(), 1);
        assert_eq!(
            (next[0].start_azimuth_deg, next[0].peak_azimuth_deg, next[0].end_azimuth_deg),
            (270, 0, 90)
        );
    }

    #[test]
    fn missing_table_is_empty() {
        let html = "<html><body><table class=\"other\"><tr><td>x</td></tr></table></body></html>";
        let document = Html::parse_document(html);
        assert!(matches!(find_table(&document, &TABLE), TableLookup::NotFound));
        assert!(parse_passes(html, &Config::default(), 2025).unwrap().is_empty());
    }

    #[test]
    fn header_only_table_is_empty() {
        let html = r#"<table class="standardTable"><tr><td>05 may</td><td>a</td><td>b</td><td>1°</td><td>N</td><td>c</td><td>2°</td><td>N</td><td>d</td><td>3°</td><td>N</td><td>visible</td></tr></table>"#;
        assert!(parse_passes(html, &Config::default(), 2025).unwrap().is_empty());
    }

    #[test]
    fn eleven_cells_are_skipped() {
        let row = cells(&[
            "05 may", "-3,1", "19:02:11", "10°", "SO", "19:05:20", "64°", "SE", "19:08:29", "10°",
            "NE",
        ]);
        assert_eq!(
            decode_row(&row, &months(), 2025).unwrap(),
            RowDecision::Skip { cells: 11 }
        );
    }

    #[test]
    fn twelve_cells_are_kept_positionally() {
        let row = cells(&[
            "1 ene", "mag", "t1", "1°", "N", "t2", "2°", "E", "t3", "3°", "S", "tipo",
        ]);
        let RowDecision::Keep { date, pass } = decode_row(&row, &months(), 2026).unwrap() else {
            panic!("row should be kept");
        };
        assert_eq!(date, "2026-01-01");
        assert_eq!(pass.magnitude, "mag");
        assert_eq!((pass.start_time.as_str(), pass.start_altitude_deg, pass.start_azimuth_deg), ("t1", 1, 0));
        assert_eq!((pass.peak_time.as_str(), pass.peak_altitude_deg, pass.peak_azimuth_deg), ("t2", 2, 90));
        assert_eq!((pass.end_time.as_str(), pass.end_altitude_deg, pass.end_azimuth_deg), ("t3", 3, 180));
        assert_eq!(pass.kind, "tipo");
    }

    #[test]
    fn bad_date_cell_is_an_error() {
        let row = cells(&[
            "mañana", "mag", "t1", "1°", "N", "t2", "2°", "E", "t3", "3°", "S", "tipo",
        ]);
        assert!(matches!(
            decode_row(&row, &months(), 2026),
            Err(PassError::InvalidDate(_))
        ));
    }

    #[test]
    fn altitude_strips_one_glyph() {
        assert_eq!(parse_altitude("42°").unwrap(), 42);
        assert_eq!(parse_altitude("7°").unwrap(), 7);
        assert_eq!(parse_altitude("42").unwrap(), 4);
        assert!(matches!(parse_altitude("°"), Err(PassError::InvalidAltitude(_))));
        assert!(matches!(parse_altitude("alto°"), Err(PassError::InvalidAltitude(_))));
    }
}
