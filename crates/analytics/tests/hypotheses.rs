use analytics::{AnalyticsError, HypothesisEngine, HypothesisOutcome, PortfolioOverview};
use chrono::NaiveDate;
use core_types::{GrowthOptions, HouseRecord, HypothesisCriteria, TransitionRange, Verdict};

const EPS: f64 = 1e-9;

/// Base record builder; tests override the fields they care about.
fn house(y: i32, m: u32, d: u32, price: f64) -> HouseRecord {
    HouseRecord {
        id: 1,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        price,
        bedrooms: 3,
        bathrooms: 2.0,
        sqft_living: 1800.0,
        sqft_lot: 1000.0,
        floors: 1.0,
        waterfront: false,
        view: 0,
        condition: 3,
        grade: 7,
        sqft_basement: 0.0,
        yr_built: 2000,
        zipcode: 98001,
        lat: 47.5,
        long: -122.2,
    }
}

fn find<'a>(outcomes: &'a [HypothesisOutcome], id: &str) -> &'a HypothesisOutcome {
    outcomes.iter().find(|o| o.id == id).unwrap()
}

fn assert_observed(outcome: &HypothesisOutcome, expected: f64, verdict: Verdict) {
    let observed = outcome
        .observed_pct
        .unwrap_or_else(|| panic!("{} undetermined: {:?}", outcome.id, outcome.note));
    assert!(
        (observed - expected).abs() < EPS,
        "{}: observed {observed}, expected {expected}",
        outcome.id
    );
    assert_eq!(outcome.verdict, verdict, "{}", outcome.id);
}

#[test]
fn evaluates_all_ten_in_order() {
    let outcomes = HypothesisEngine::default().evaluate(&[house(2014, 5, 2, 100_000.0)]);
    let ids: Vec<&str> = outcomes.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["H1", "H2", "H3", "H4", "H5", "H6", "H7", "H8", "H9", "H10"]);
}

#[test]
fn empty_portfolio_is_entirely_undetermined() {
    let outcomes = HypothesisEngine::default().evaluate(&[]);
    assert_eq!(outcomes.len(), 10);
    assert!(
        outcomes
            .iter()
            .all(|o| o.verdict == Verdict::Undetermined && o.observed_pct.is_none())
    );
    assert!(outcomes.iter().all(|o| o.note.is_some()));
}

#[test]
fn waterfront_premium_and_missing_poor_condition_group() {
    let mut view = house(2014, 5, 2, 120_000.0);
    view.waterfront = true;
    let records = [house(2014, 5, 2, 100_000.0), view];

    let outcomes = HypothesisEngine::default().evaluate(&records);
    assert_observed(find(&outcomes, "H1"), 20.0, Verdict::Valid);

    // Nothing is in poor condition, so H8 has no groups to compare.
    let h8 = find(&outcomes, "H8");
    assert_eq!(h8.verdict, Verdict::Undetermined);
    let expected = AnalyticsError::InsufficientData { required: 1, available: 0 }.to_string();
    assert_eq!(h8.note.as_deref(), Some(expected.as_str()));
}

#[test]
fn old_houses_compared_against_cutoff() {
    let mut old = house(2014, 5, 2, 103_000.0);
    old.yr_built = 1940;
    let mut on_cutoff = house(2014, 5, 2, 100_000.0);
    on_cutoff.yr_built = 1955;

    let outcomes = HypothesisEngine::default().evaluate(&[old, on_cutoff]);
    assert_observed(find(&outcomes, "H2"), 3.0, Verdict::Invalid);
}

#[test]
fn lot_size_without_basement() {
    let mut basement = house(2014, 5, 2, 100_000.0);
    basement.sqft_basement = 500.0;
    let mut no_basement = house(2014, 5, 2, 100_000.0);
    no_basement.sqft_lot = 1400.0;

    let outcomes = HypothesisEngine::default().evaluate(&[basement, no_basement]);
    assert_observed(find(&outcomes, "H3"), 40.0, Verdict::Valid);
}

#[test]
fn yearly_growth_needs_a_third_year_under_observed_range() {
    let records = [house(2014, 5, 2, 100_000.0), house(2015, 3, 2, 110_000.0)];

    let outcomes = HypothesisEngine::default().evaluate(&records);
    let h4 = find(&outcomes, "H4");
    assert_eq!(h4.verdict, Verdict::Undetermined);
    assert!(h4.note.as_deref().unwrap().contains("Not enough data"));

    let criteria = HypothesisCriteria {
        growth: GrowthOptions { range: TransitionRange::All, ..GrowthOptions::default() },
        ..HypothesisCriteria::default()
    };
    let outcomes = HypothesisEngine::new(criteria).evaluate(&records);
    assert_observed(find(&outcomes, "H4"), 10.0, Verdict::Valid);
}

#[test]
fn monthly_growth_only_counts_selected_bathrooms() {
    let mut records = Vec::new();
    for (month, price) in [(1, 100_000.0), (2, 115_000.0), (3, 132_250.0)] {
        let mut r = house(2015, month, 10, price);
        r.bathrooms = 3.0;
        records.push(r);
        // Noise in other bathroom counts must not leak into H5.
        records.push(house(2015, month, 11, price * month as f64 * 7.0));
    }

    let outcomes = HypothesisEngine::default().evaluate(&records);
    assert_observed(find(&outcomes, "H5"), 15.0, Verdict::Valid);
}

#[test]
fn bedroom_growth_far_from_claim_is_invalid() {
    let records: Vec<HouseRecord> = [(2, 100_000.0), (3, 150_000.0), (4, 225_000.0)]
        .into_iter()
        .map(|(bedrooms, price)| {
            let mut r = house(2014, 6, 1, price);
            r.bedrooms = bedrooms;
            r
        })
        .collect();

    let outcomes = HypothesisEngine::default().evaluate(&records);
    assert_observed(find(&outcomes, "H6"), 50.0, Verdict::Invalid);
}

#[test]
fn grade_growth_respects_tolerance() {
    let records: Vec<HouseRecord> = [(7, 100_000.0), (8, 126_000.0), (9, 1_000.0)]
        .into_iter()
        .map(|(grade, price)| {
            let mut r = house(2014, 6, 1, price);
            r.grade = grade;
            r
        })
        .collect();

    let outcomes = HypothesisEngine::default().evaluate(&records);
    assert_observed(find(&outcomes, "H9"), 26.0, Verdict::Valid);

    let strict = HypothesisCriteria { tolerance_pct: 0.5, ..HypothesisCriteria::default() };
    let outcomes = HypothesisEngine::new(strict).evaluate(&records);
    assert_observed(find(&outcomes, "H9"), 26.0, Verdict::Invalid);
}

#[test]
fn weekly_growth_over_iso_weeks() {
    // Mondays of ISO weeks 19, 20 and 21 of 2014.
    let records = [
        house(2014, 5, 5, 100_000.0),
        house(2014, 5, 12, 100_100.0),
        house(2014, 5, 19, 90_000.0),
    ];

    let outcomes = HypothesisEngine::default().evaluate(&records);
    assert_observed(find(&outcomes, "H10"), 0.1, Verdict::Valid);
}

#[test]
fn poor_condition_waterfront_premium() {
    let mut records = Vec::new();
    for (waterfront, price) in [(false, 200_000.0), (true, 300_000.0)] {
        let mut r = house(2014, 6, 1, price);
        r.condition = 2;
        r.waterfront = waterfront;
        records.push(r);
    }
    // Good-condition waterfront sales sit outside the comparison.
    let mut excluded = house(2014, 6, 1, 5_000_000.0);
    excluded.waterfront = true;
    records.push(excluded);

    let outcomes = HypothesisEngine::default().evaluate(&records);
    assert_observed(find(&outcomes, "H8"), 50.0, Verdict::Invalid);
}

#[test]
fn outcomes_serialize_for_the_presentation_layer() {
    let outcomes = HypothesisEngine::default().evaluate(&[house(2014, 5, 2, 100_000.0)]);
    let json = serde_json::to_value(&outcomes[0]).unwrap();
    assert_eq!(json["id"], "H1");
    assert_eq!(json["verdict"], "Undetermined");
}

#[test]
fn portfolio_overview_headline_figures() {
    let mut second = house(2014, 5, 2, 300_000.0);
    second.zipcode = 98002;
    second.sqft_lot = 0.0;
    let records = [house(2014, 5, 2, 100_000.0), second, house(2015, 1, 2, 200_000.0)];

    let overview = PortfolioOverview::from_records(&records).unwrap();
    assert_eq!(overview.total_properties, 3);
    assert_eq!(overview.distinct_zipcodes, 2);
    assert!((overview.mean_price - 200_000.0).abs() < EPS);
    assert!((overview.mean_price_per_lot_area.unwrap() - 150.0).abs() < EPS);
    assert_eq!(overview.price.median, 200_000.0);

    assert!(PortfolioOverview::from_records(&[]).is_err());
}
