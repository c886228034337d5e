use brent_dashboard::data::{PricePoint, PriceSeries};
use brent_dashboard::error::DashboardError;
use brent_dashboard::fetch::RawTable;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn table(rows: &[(&str, &str)]) -> RawTable {
    let mut all = vec![vec!["Data".to_string(), "Preço".to_string()]];
    for (date, price) in rows {
        all.push(vec![date.to_string(), price.to_string()]);
    }
    RawTable { rows: all }
}

#[test]
fn test_normalization_round_trip() {
    let raw = table(&[
        ("03/01/2020", "66,25"),
        ("01/01/2020", "64,10"),
        ("02/01/2020", "65,37"),
    ]);

    let series = PriceSeries::from_raw_table(&raw).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(
        series.dates(),
        vec![day(2020, 1, 1), day(2020, 1, 2), day(2020, 1, 3)]
    );
    assert_eq!(series.prices(), vec![64.10, 65.37, 66.25]);
}

#[test]
fn test_sorting_is_idempotent() {
    let raw = table(&[
        ("01/01/2020", "64,10"),
        ("02/01/2020", "65,37"),
        ("03/01/2020", "66,25"),
    ]);

    let first = PriceSeries::from_raw_table(&raw).unwrap();
    let second = PriceSeries::from_points(first.points().to_vec()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_header_row_is_promoted_not_parsed() {
    let raw = table(&[("15/06/2021", "72,50")]);
    let series = PriceSeries::from_raw_table(&raw).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series.first_date(), day(2021, 6, 15));
}

#[test]
fn test_missing_header_fails_fast() {
    let raw = RawTable {
        rows: vec![
            vec!["15/06/2021".to_string(), "72,50".to_string()],
            vec!["16/06/2021".to_string(), "73,10".to_string()],
        ],
    };

    let result = PriceSeries::from_raw_table(&raw);
    assert!(matches!(result, Err(DashboardError::MalformedInput(_))));
}

#[rstest]
#[case("32/01/2020", "50,0")]
#[case("2020-01-01", "50,0")]
#[case("", "50,0")]
#[case("01/01/2020", "fifty")]
#[case("01/01/2020", "")]
#[case("01/01/2020", "1.234,56")]
fn test_malformed_cells_fail_whole_series(#[case] date: &str, #[case] price: &str) {
    let raw = table(&[("02/01/2020", "60,0"), (date, price)]);

    let result = PriceSeries::from_raw_table(&raw);
    assert!(matches!(result, Err(DashboardError::MalformedInput(_))));
}

#[test]
fn test_empty_table_fails() {
    let raw = table(&[]);
    let result = PriceSeries::from_raw_table(&raw);
    assert!(matches!(result, Err(DashboardError::MalformedInput(_))));
}

#[test]
fn test_duplicate_dates_fail() {
    let raw = table(&[("01/01/2020", "60,0"), ("01/01/2020", "61,0")]);
    let result = PriceSeries::from_raw_table(&raw);
    assert!(matches!(result, Err(DashboardError::MalformedInput(_))));
}

#[test]
fn test_accessors() {
    let series = PriceSeries::from_points(vec![
        PricePoint { date: day(2020, 1, 1), price: 10.0 },
        PricePoint { date: day(2020, 1, 2), price: 20.0 },
        PricePoint { date: day(2020, 1, 3), price: 30.0 },
    ])
    .unwrap();

    assert_eq!(series.first_date(), day(2020, 1, 1));
    assert_eq!(series.last_date(), day(2020, 1, 3));
    assert_eq!(series.get(day(2020, 1, 2)), Some(20.0));
    assert_eq!(series.get(day(2020, 1, 4)), None);
    assert_eq!(series.tail(2).len(), 2);
    assert_eq!(series.tail(2)[0].price, 20.0);
}
