use chrono::{DateTime, TimeZone, Utc};
use planetime::{
    elapsed_days, light_angle_for, shadow_for, Body, ClockError, LocalTime, RotationOverrides,
    ShadowDescriptor, ShadowOptions, UnixTime,
};

#[test]
fn unix_epoch_yields_zero_days_everywhere() {
    let epoch = DateTime::from_timestamp(0, 0).unwrap();
    let days = elapsed_days(&epoch, &RotationOverrides::new()).unwrap();
    assert!(days.iter().all(|(_, value)| value == 0.0));
}

#[test]
fn earth_days_match_seconds_over_a_day() {
    for seconds in [1.0, 86_400.0, 978_566_400.0, 1_700_000_123.0, -5_000_000.0] {
        let days = elapsed_days(&UnixTime::new(seconds), &RotationOverrides::new()).unwrap();
        assert_eq!(days[Body::Earth], seconds / 86_400.0);
    }
}

#[test]
fn negated_override_flips_every_body() {
    let t = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let forward = elapsed_days(&t, &RotationOverrides::new()).unwrap();
    for body in Body::ALL {
        let negated = RotationOverrides::new().with(body, -body.rotation_period().value());
        let backward = elapsed_days(&t, &negated).unwrap();
        assert_eq!(backward[body], -forward[body], "{body}");
    }
}

#[test]
fn counts_are_monotonic_in_time() {
    let retro = RotationOverrides::new().with(Body::Venus, -Body::Venus.rotation_period().value());
    let mut previous = elapsed_days(&UnixTime::new(1_000_000_000.0), &retro).unwrap();
    for step in 1..=20 {
        let t = UnixTime::new(1_000_000_000.0 + step as f64 * 3_600.0);
        let current = elapsed_days(&t, &retro).unwrap();
        for body in Body::ALL {
            if body == Body::Venus {
                assert!(current[body] < previous[body]);
            } else {
                assert!(current[body] > previous[body], "{body}");
            }
        }
        previous = current;
    }
}

#[test]
fn zero_period_override_fails() {
    let err = elapsed_days(
        &UnixTime::new(1.0),
        &RotationOverrides::new().with(Body::Mercury, 0.0),
    )
    .unwrap_err();
    assert!(matches!(err, ClockError::InvalidPeriod { body: Body::Mercury, .. }));
}

#[test]
fn reference_date_labels() {
    // 2001-01-04T00:00:00Z, the dial's default reference instant.
    let t = Utc.with_ymd_and_hms(2001, 1, 4, 0, 0, 0).unwrap();
    let days = elapsed_days(&t, &RotationOverrides::new()).unwrap();
    assert_eq!(days.label(Body::Earth), "11,326 Day");
    assert_eq!(days.label(Body::Mars), "11,022.995 Sol");
}

#[test]
fn kolkata_six_am_takes_the_day_branch() {
    let t = Utc.with_ymd_and_hms(2024, 3, 20, 0, 30, 0).unwrap();
    let shadow = shadow_for(&t, "Asia/Kolkata", &ShadowOptions::default()).unwrap();
    assert_ne!(shadow, ShadowDescriptor::NIGHT);
    assert!((shadow.hard.offset_x - 17.62).abs() < 1e-9);
    assert!((shadow.hard.opacity - 0.282).abs() < 1e-9);
}

#[test]
fn kolkata_noon_is_the_minimum() {
    let noon = Utc.with_ymd_and_hms(2024, 3, 20, 6, 30, 0).unwrap();
    let options = ShadowOptions::default();
    let at_noon = shadow_for(&noon, "Asia/Kolkata", &options).unwrap();

    for minutes in [-300, -120, -30, 30, 120, 300] {
        let other = noon + chrono::Duration::minutes(minutes);
        let shadow = shadow_for(&other, "Asia/Kolkata", &options).unwrap();
        let len = shadow.hard.offset_x.hypot(shadow.hard.offset_y);
        assert!(len > options.min_len, "offset {minutes} min");
        assert!(shadow.hard.blur >= at_noon.hard.blur);
        assert!(shadow.hard.opacity > at_noon.hard.opacity);
    }
    assert_eq!(at_noon.hard.offset_y, options.min_len);
}

#[test]
fn night_hours_return_fixed_descriptor() {
    let options = ShadowOptions {
        alpha: 1.0,
        ..ShadowOptions::default()
    };
    // 20:00 and 03:00 in Kolkata.
    for (h, m) in [(14, 30), (21, 30)] {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, h, m, 0).unwrap();
        let shadow = shadow_for(&t, "Asia/Kolkata", &options).unwrap();
        assert_eq!(shadow, ShadowDescriptor::NIGHT);
    }
}

#[test]
fn night_ignores_invalid_options() {
    let options = ShadowOptions {
        alpha: 1.5,
        ..ShadowOptions::default()
    };
    // 23:00 in Kolkata.
    let night = Utc.with_ymd_and_hms(2024, 3, 20, 17, 30, 0).unwrap();
    assert_eq!(
        shadow_for(&night, "Asia/Kolkata", &options),
        Ok(ShadowDescriptor::NIGHT)
    );
    let day = Utc.with_ymd_and_hms(2024, 3, 20, 6, 30, 0).unwrap();
    assert!(matches!(
        shadow_for(&day, "Asia/Kolkata", &options),
        Err(ClockError::InvalidOptions { field: "alpha", .. })
    ));
}

#[test]
fn non_finite_instant_has_no_elapsed_days() {
    assert_eq!(
        elapsed_days(&UnixTime::new(f64::NAN), &RotationOverrides::new()),
        Err(ClockError::TimestampOutOfRange)
    );
}

#[test]
fn unknown_zone_is_reported_not_guessed() {
    let t = UnixTime::new(1_700_000_000.0);
    assert_eq!(
        shadow_for(&t, "Atlantis/Capital", &ShadowOptions::default()),
        Err(ClockError::UnknownTimeZone("Atlantis/Capital".into()))
    );
}

#[test]
fn same_inputs_same_outputs() {
    let t = UnixTime::new(1_726_000_000.0);
    let options = ShadowOptions::default();
    assert_eq!(
        shadow_for(&t, "Europe/Madrid", &options),
        shadow_for(&t, "Europe/Madrid", &options)
    );
    assert_eq!(
        light_angle_for(&t, "Europe/Madrid"),
        light_angle_for(&t, "Europe/Madrid")
    );
}

#[test]
fn local_time_in_utc_matches_chrono() {
    let t = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap();
    assert_eq!(
        LocalTime::resolve(&t, "UTC").unwrap(),
        LocalTime::new(23, 59, 58)
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_options_use_camel_case_with_defaults() {
    let options: ShadowOptions = serde_json::from_str(r#"{ "maxLen": 40, "alpha": 0.5 }"#).unwrap();
    assert_eq!(options.max_len, 40.0);
    assert_eq!(options.alpha, 0.5);
    assert_eq!(options.min_len, ShadowOptions::default().min_len);
}

#[cfg(feature = "serde")]
#[test]
fn serde_overrides_reject_unknown_bodies() {
    let ok: RotationOverrides = serde_json::from_str(r#"{ "Venus": -20997360.0 }"#).unwrap();
    assert!(ok.period(Body::Venus).value() < 0.0);
    assert!(serde_json::from_str::<RotationOverrides>(r#"{ "Vulcan": 1.0 }"#).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_elapsed_days_is_an_ordered_map() {
    let days = elapsed_days(&UnixTime::EPOCH, &RotationOverrides::new()).unwrap();
    let json = serde_json::to_string(&days).unwrap();
    assert!(json.starts_with(r#"{"Mercury":0.0,"Venus":0.0"#));
    assert!(json.ends_with(r#""Pluto":0.0}"#));
}
