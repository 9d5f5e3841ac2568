//! End-to-end pipeline tests: extract the embedded dataset, aggregate it,
//! and check the serialised output against the documented contract.

use climatology_core::aggregate::ClimatologyAggregator;
use climatology_core::dataset::extract_dataset;
use is_close::is_close;

const SOURCE: &str = r#"
// Exported by the SoCal cloud map tooling
const SOCAL_DATA = {
  "socal_cloudmap_monthly": [
    {"month": 1, "clt": 50.0, "tas": 288.15, "rsds": 200.0},
    {"month": 1, "clt": 60.0, "tas": 293.15, "rsds": 220.0},
    {"month": 7, "clt": 15.0, "tas": 296.0, "rsds": 320.0, "psl": 101200.0, "sfcWind": 3.0}
  ],
  "future_socal_cloudmap_monthly": [
    {"month": 3, "scenario": "ssp245", "clt": 40.0, "tas": 290.0, "rsds": 180.0, "psl": 101300.0, "sfcWind": 5.0},
    {"month": 3, "scenario": "ssp585", "clt": 35.0, "tas": 292.0, "rsds": 190.0},
    {"month": 3, "scenario": "rcp85", "clt": 99.0, "tas": 999.0, "rsds": 999.0}
  ]
};
"#;

fn run_pipeline(source: &str) -> (serde_json::Value, usize) {
    let dataset = extract_dataset(source).unwrap();
    let mut aggregator = ClimatologyAggregator::new();
    aggregator
        .add_historical(&dataset.socal_cloudmap_monthly)
        .unwrap();
    aggregator
        .add_future(&dataset.future_socal_cloudmap_monthly)
        .unwrap();
    let dropped = aggregator.dropped_records();
    (serde_json::to_value(aggregator.build()).unwrap(), dropped)
}

#[test]
fn output_grid_has_three_scenarios_of_twelve_months() {
    let (output, _) = run_pipeline(SOURCE);
    let scenarios = output.as_object().unwrap();
    assert_eq!(scenarios.len(), 3);
    for key in ["historical", "ssp245", "ssp585"] {
        let months = scenarios[key].as_object().unwrap();
        assert_eq!(months.len(), 12);
        for month in 1..=12 {
            assert!(months.contains_key(&month.to_string()));
        }
    }
}

#[test]
fn historical_january_is_averaged_and_converted() {
    let (output, _) = run_pipeline(SOURCE);
    let january = &output["historical"]["1"];
    assert_eq!(january["clt"], serde_json::json!(55.0));
    assert!(is_close!(
        january["temp"].as_f64().unwrap(),
        (290.65 - 273.15) * 9.0 / 5.0 + 32.0,
        abs_tol = 1e-9
    ));
    assert_eq!(january["solar"], serde_json::json!(210.0));
    assert!(january["pressure"].is_null());
    assert!(january["wind"].is_null());
    assert_eq!(january["cloudFraction"], serde_json::json!(0.55));
}

#[test]
fn future_pathways_stay_isolated() {
    let (output, _) = run_pipeline(SOURCE);
    let march245 = &output["ssp245"]["3"];
    let march585 = &output["ssp585"]["3"];
    assert_eq!(march245["clt"], serde_json::json!(40.0));
    assert_eq!(march245["pressure"], serde_json::json!(1013.0));
    assert!(is_close!(
        march245["wind"].as_f64().unwrap(),
        11.1847,
        abs_tol = 1e-9
    ));
    assert_eq!(march585["clt"], serde_json::json!(35.0));
    assert!(march585["pressure"].is_null());
    assert!(output["historical"]["3"].is_null());
}

#[test]
fn stray_scenario_is_counted_but_harmless() {
    let (_, dropped) = run_pipeline(SOURCE);
    assert_eq!(dropped, 1);

    let without_stray = SOURCE.replace(
        r#",
    {"month": 3, "scenario": "rcp85", "clt": 99.0, "tas": 999.0, "rsds": 999.0}"#,
        "",
    );
    let (full, _) = run_pipeline(SOURCE);
    let (trimmed, dropped) = run_pipeline(&without_stray);
    assert_eq!(dropped, 0);
    assert_eq!(full, trimmed);
}

#[test]
fn rerunning_the_pipeline_is_byte_identical() {
    let dataset = extract_dataset(SOURCE).unwrap();
    let serialise = || {
        let mut aggregator = ClimatologyAggregator::new();
        aggregator
            .add_historical(&dataset.socal_cloudmap_monthly)
            .unwrap();
        aggregator
            .add_future(&dataset.future_socal_cloudmap_monthly)
            .unwrap();
        serde_json::to_vec_pretty(&aggregator.build()).unwrap()
    };
    assert_eq!(serialise(), serialise());
}

#[test]
fn empty_dataset_yields_thirty_six_null_slots() {
    let (output, dropped) = run_pipeline("const SOCAL_DATA = {};");
    assert_eq!(dropped, 0);
    let scenarios = output.as_object().unwrap();
    let nulls: usize = scenarios
        .values()
        .map(|months| months.as_object().unwrap().values().filter(|v| v.is_null()).count())
        .sum();
    assert_eq!(nulls, 36);
}
