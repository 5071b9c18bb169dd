use crate::scoring::aggregator::evaluate;
use crate::scoring::domain::{Category, ScoreSheet};
use crate::scoring::import::{ScoreSheetImportError, ScoreSheetImporter};

#[test]
fn json_numbers_and_numeric_strings_both_parse() {
    let sheet: ScoreSheet = serde_json::from_str(
        r#"{
            "market_size": 8,
            "product_uniqueness": "7.5",
            "customer_validation": " 6 "
        }"#,
    )
    .expect("lenient sheet parses");

    assert_eq!(sheet.market_size, 8.0);
    assert_eq!(sheet.product_uniqueness, 7.5);
    assert_eq!(sheet.customer_validation, 6.0);
}

#[test]
fn missing_empty_and_null_fields_read_as_zero() {
    let sheet: ScoreSheet = serde_json::from_str(
        r#"{
            "market_size": "",
            "product_uniqueness": null,
            "gross_margins": "n/a"
        }"#,
    )
    .expect("lenient sheet parses");

    assert_eq!(sheet.market_size, 0.0);
    assert_eq!(sheet.product_uniqueness, 0.0);
    assert_eq!(sheet.gross_margins, 0.0);
    assert_eq!(sheet.investor_fit, 0.0);
}

#[test]
fn non_numeric_json_values_read_as_zero() {
    let sheet: ScoreSheet =
        serde_json::from_str(r#"{ "risks": true, "scalability": [1, 2] }"#)
            .expect("lenient sheet parses");

    assert_eq!(sheet.risks, 0.0);
    assert_eq!(sheet.scalability, 0.0);
}

#[test]
fn empty_string_field_scores_like_an_explicit_zero() {
    let blank: ScoreSheet =
        serde_json::from_str(r#"{ "market_size": "", "product_uniqueness": 9 }"#)
            .expect("blank sheet parses");
    let zeroed: ScoreSheet =
        serde_json::from_str(r#"{ "market_size": 0, "product_uniqueness": 9 }"#)
            .expect("zeroed sheet parses");

    assert_eq!(evaluate(&blank), evaluate(&zeroed));
}

fn full_header() -> &'static str {
    "Market Size,Product Uniqueness,Customer Validation,\
Revenue Stage,Gross Margins,Financial Projections,\
Founders Experience,Team Composition,Execution Capability,\
Scalability,Risks,Industry Trends,\
Funding Clarity,Previous Investment,Investor Fit"
}

#[test]
fn csv_rows_import_in_order() {
    let csv = format!(
        "{}\n10,10,10,10,10,10,10,10,10,10,10,10,10,10,10\n8,8,8,6,6,4,4,4,4,4,3,3,4,3,3\n",
        full_header()
    );

    let sheets = ScoreSheetImporter::from_reader(csv.as_bytes()).expect("csv imports");

    assert_eq!(sheets.len(), 2);
    assert_eq!(evaluate(&sheets[0]).total_score, 100.0);
    assert_eq!(evaluate(&sheets[1]).total_score, 72.0);
}

#[test]
fn blank_csv_cells_default_to_zero() {
    let csv = format!(
        "{}\n9, ,x,,,,,,,,,,,,\n",
        full_header()
    );

    let sheets = ScoreSheetImporter::from_reader(csv.as_bytes()).expect("csv imports");

    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].market_size, 9.0);
    assert_eq!(sheets[0].product_uniqueness, 0.0);
    assert_eq!(sheets[0].customer_validation, 0.0);
    assert_eq!(
        evaluate(&sheets[0]).category_score(Category::MarketProductFit),
        9.0
    );
}

#[test]
fn ragged_csv_rows_are_rejected() {
    let csv = format!("{}\n10,10\n", full_header());

    let result = ScoreSheetImporter::from_reader(csv.as_bytes());

    assert!(matches!(result, Err(ScoreSheetImportError::Csv(_))));
}
