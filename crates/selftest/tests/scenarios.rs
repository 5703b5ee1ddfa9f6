use reservoir_selftest::{run_all, scenarios};

#[test]
fn every_scenario_passes() {
    for outcome in run_all() {
        if let Err(err) = &outcome.result {
            panic!("scenario {} failed: {err:#}", outcome.name);
        }
    }
}

#[test]
fn scenario_names_are_unique() {
    let mut names: Vec<_> = scenarios().iter().map(|s| s.name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn entities_do_not_share_state() {
    use reservoir_handsets::Handset;

    let mut first = Handset::new("Apple", "iPhone 13", 4000).unwrap();
    let second = first.clone();
    first.make_call(10).unwrap();

    assert_eq!(first.battery_level(), 3900);
    assert_eq!(second.battery_level(), 4000);
}
