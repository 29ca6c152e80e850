//! End-to-end checks of loading, aggregation, ranking and the three views.

use covid_dashboard::charts::{daily_deltas, FigureBuilder};
use covid_dashboard::dashboard::{Dashboard, ViewSet};
use covid_dashboard::data::{DataLoader, DataProcessor, RawTable};

fn load(csv: &str) -> RawTable {
    DataLoader::parse_csv(csv.as_bytes().to_vec()).expect("valid csv")
}

const TWO_REGIONS: &str = "\
Province/State,Country/Region,Lat,Long,1/22/20,1/23/20
,A,10.0,10.0,1,3
,B,20.0,20.0,5,5
";

const WORLD: &str = "\
Province/State,Country/Region,Lat,Long,4/1/20,4/2/20,4/3/20,4/4/20
,Italy,41.87,12.56,110574,115242,119827,124632
,Spain,40.46,-3.74,104118,112065,119199,126168
,Germany,51.16,10.45,77872,84794,91159,96092
New York,US,40.71,-74.00,83712,92381,102863,113704
California,US,36.77,-119.41,9816,11190,12569,13796
,France,46.22,2.21,52128,56989,59105,64338
,Iran,32.42,53.68,47593,50468,53183,55743
Hubei,China,30.97,112.27,67802,67802,67803,67803
Beijing,China,40.18,116.41,580,580,582,584
,Iceland,64.96,-19.02,1135,1220,1319,1364
";

#[test]
fn two_region_scenario() {
    let raw = load(TWO_REGIONS);
    let agg = DataProcessor::aggregate_by_region(&raw).unwrap();

    assert_eq!(agg.series("A").unwrap(), vec![1, 3]);
    assert_eq!(agg.series("B").unwrap(), vec![5, 5]);

    let ranked = DataProcessor::rank_regions(&agg, 5).unwrap();
    assert_eq!(ranked.regions(), ["B", "A"]);

    assert_eq!(FigureBuilder::bar(&agg, "A").unwrap().y, vec![0, 2]);
    assert_eq!(FigureBuilder::bar(&agg, "B").unwrap().y, vec![0, 0]);
}

#[test]
fn missing_geo_columns_do_not_change_the_result() {
    let with_geo = load(TWO_REGIONS);
    let without_geo = load("Country/Region,1/22/20,1/23/20\nA,1,3\nB,5,5\n");

    let a = DataProcessor::aggregate_by_region(&with_geo).unwrap();
    let b = DataProcessor::aggregate_by_region(&without_geo).unwrap();

    assert_eq!(a.dataframe().shape(), b.dataframe().shape());
    assert!(a.dataframe().equals(b.dataframe()));
}

#[test]
fn aggregation_has_one_row_per_region() {
    let agg = DataProcessor::aggregate_by_region(&load(WORLD)).unwrap();
    // US and China have two rows each
    assert_eq!(agg.region_count(), 8);
    assert_eq!(agg.series("US").unwrap(), vec![93528, 103571, 115432, 127500]);
    assert_eq!(agg.series("China").unwrap(), vec![68382, 68382, 68385, 68387]);
}

#[test]
fn ranking_keeps_top_five_by_latest_total() {
    let agg = DataProcessor::aggregate_by_region(&load(WORLD)).unwrap();
    let ranked = DataProcessor::rank_regions(&agg, 5).unwrap();
    assert_eq!(
        ranked.regions(),
        ["US", "Spain", "Italy", "Germany", "China"]
    );
}

#[test]
fn ranking_with_fewer_regions_than_requested() {
    let agg = DataProcessor::aggregate_by_region(&load(TWO_REGIONS)).unwrap();
    let ranked = DataProcessor::rank_regions(&agg, 5).unwrap();
    assert_eq!(ranked.len(), 2);
}

#[test]
fn every_ranked_region_has_consistent_views() {
    let dashboard = Dashboard::new(load(WORLD), 5).unwrap();
    let date_count = dashboard.aggregated().date_columns().len();

    for region in dashboard.ranked().regions() {
        let mut selection = dashboard.initial_selection();
        selection.set(dashboard.ranked(), region).unwrap();
        let views = ViewSet::compute(&dashboard, &selection).unwrap();

        assert_eq!(views.line.y.len(), date_count);
        assert_eq!(views.line.x.len(), date_count);
        assert_eq!(views.bar.y, daily_deltas(&views.line.y));
        assert_eq!(views.bar.y[0], 0);

        let location = views.map.location.expect("ranked region has raw rows");
        assert_eq!(location.value, *views.line.y.last().unwrap());
    }
}

#[test]
fn map_sums_sub_regions_and_resolves_country_code() {
    let raw = load(WORLD);
    let map = FigureBuilder::map(&raw, "US").unwrap();
    let location = map.location.unwrap();
    assert_eq!(location.value, 127500);
    assert_eq!(location.iso_alpha3, Some("USA"));
    let (lat, long) = location.centroid.unwrap();
    assert!((lat - 38.74).abs() < 1e-9);
    assert!((long + 96.705).abs() < 1e-9);
}

#[test]
fn aggregation_is_idempotent() {
    let raw = load(WORLD);
    let first = DataProcessor::aggregate_by_region(&raw).unwrap();
    let second = DataProcessor::aggregate_by_region(&raw).unwrap();
    assert!(first.dataframe().equals(second.dataframe()));
    assert_eq!(first.date_columns(), second.date_columns());
}
