use station_nowcast::classifier::recommendations::{EXERCISE_CAUTION, EXERCISE_DANGER, LAUNDRY_DRY};
use station_nowcast::classifier::{
    classify, heat_index, interpret, interpret_weather, matching_rules, recommend,
    thermal_comfort_index, ComfortBand, ConditionKind, CurrentConditions, Severity, Topic,
};

/// Test THI for a humid afternoon and its comfort band
#[test]
fn test_thi_humid_afternoon() {
    let thi = thermal_comfort_index(30.0, 80.0);
    assert_eq!(thi, 28.3);
    assert_eq!(ComfortBand::from_thi(thi), ComfortBand::IntenseDiscomfort);
    assert_eq!(ComfortBand::from_thi(thi).level(), "Intense Discomfort");
}

/// Test heavy rain outranks every later rule that would also match
#[test]
fn test_ladder_precedence_storm_over_dry_heat() {
    let condition = interpret_weather(33.0, 60.0, 1010.0, 25.0);
    assert_eq!(condition.kind, ConditionKind::ExtremeStorm);
    assert_eq!(condition.severity, Severity::Critical);

    let c = CurrentConditions::new(33.0, 60.0, 1010.0).with_rain_rate(25.0);
    let matched = matching_rules(&c);
    assert_eq!(matched.first(), Some(&ConditionKind::ExtremeStorm));
    assert!(matched.contains(&ConditionKind::DryHeat));
}

/// Test the heat index passes cool readings through untouched
#[test]
fn test_heat_index_cool_passthrough() {
    assert_eq!(heat_index(20.0, 90.0), 20.0);
    let condition = interpret(&CurrentConditions::new(20.0, 90.0, 1012.0));
    assert_eq!(condition.heat_index, 20.0);
}

/// Test every ladder branch is reachable and ordered as documented
#[test]
fn test_each_branch_reachable() {
    let cases = [
        ((26.0, 80.0, 1010.0, 21.0), ConditionKind::ExtremeStorm),
        ((34.0, 75.0, 1010.0, 0.0), ConditionKind::HeatstrokeDanger),
        ((26.0, 80.0, 1010.0, 11.0), ConditionKind::HeavyRain),
        ((26.0, 80.0, 1010.0, 3.0), ConditionKind::ModerateRain),
        ((26.0, 80.0, 1010.0, 0.3), ConditionKind::Drizzle),
        ((35.0, 30.0, 1010.0, 0.0), ConditionKind::DryHeat),
        ((29.0, 80.0, 1010.0, 0.0), ConditionKind::HumidHeat),
        ((28.0, 60.0, 1010.0, 0.0), ConditionKind::FairPartlyCloudy),
        ((22.0, 80.0, 1010.0, 0.0), ConditionKind::Cool),
        ((27.0, 80.0, 1010.0, 0.0), ConditionKind::NormalTropical),
    ];

    for ((t, h, p, rain), expected) in cases {
        let c = CurrentConditions::new(t, h, p).with_rain_rate(rain);
        assert_eq!(classify(&c), expected, "readings {:?}", c);
    }
}

/// Test the classifier is a pure function of its inputs
#[test]
fn test_interpret_is_deterministic() {
    let c = CurrentConditions::new(30.0, 80.0, 1009.0);
    assert_eq!(interpret(&c), interpret(&c));
}

/// Test independent recommendation topics fire together
#[test]
fn test_recommendations_hot_dry_day() {
    let recs = recommend(31.0, 60.0, 0.0);
    assert!(recs.iter().any(|r| r.message == LAUNDRY_DRY));
    assert!(recs
        .iter()
        .any(|r| r.message == EXERCISE_CAUTION || r.message == EXERCISE_DANGER));
    assert!(recs.iter().all(|r| r.topic != Topic::Health));
}

/// Test topics are reported in their fixed evaluation order
#[test]
fn test_recommendations_order_is_fixed() {
    let recs = recommend(31.0, 90.0, 0.0);
    let topics: Vec<Topic> = recs.iter().map(|r| r.topic).collect();
    assert_eq!(
        topics,
        vec![Topic::Exercise, Topic::HomeComfort, Topic::Garden, Topic::Health]
    );
}
