use fundready::scoring::{evaluate, ScoreBand, ScoreSheetImporter};

const EXPORT: &str = "\
Market Size,Product Uniqueness,Customer Validation,Revenue Stage,Gross Margins,Financial Projections,Founders Experience,Team Composition,Execution Capability,Scalability,Risks,Industry Trends,Funding Clarity,Previous Investment,Investor Fit\n\
10,10,10,10,10,10,10,10,10,10,10,10,10,10,10\n\
3,2,1,2,1,2,3,2,2,1,2,1,2,1,2\n\
8,8,8,6,6,4,4,4,4,4,3,3,4,3,3\n";

#[test]
fn importer_scores_every_row() {
    let sheets = ScoreSheetImporter::from_reader(EXPORT.as_bytes()).expect("export imports");
    assert_eq!(sheets.len(), 3);

    let totals: Vec<f64> = sheets
        .iter()
        .map(|sheet| evaluate(sheet).total_score)
        .collect();
    assert_eq!(totals, vec![100.0, 27.0, 72.0]);

    let bands: Vec<ScoreBand> = totals.iter().map(|&t| ScoreBand::classify(t)).collect();
    assert_eq!(
        bands,
        vec![ScoreBand::Expansion, ScoreBand::NotReady, ScoreBand::Growth]
    );
}

#[test]
fn importer_tolerates_extra_columns() {
    let csv = "\
Company,Market Size,Product Uniqueness,Customer Validation,Revenue Stage,Gross Margins,Financial Projections,Founders Experience,Team Composition,Execution Capability,Scalability,Risks,Industry Trends,Funding Clarity,Previous Investment,Investor Fit\n\
Acme,5,5,5,5,5,5,5,5,5,5,5,5,5,5,5\n";

    let sheets = ScoreSheetImporter::from_reader(csv.as_bytes()).expect("export imports");
    assert_eq!(sheets.len(), 1);
    assert_eq!(evaluate(&sheets[0]).total_score, 75.0);
}
