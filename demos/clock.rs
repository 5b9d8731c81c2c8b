use chrono::{TimeZone, Utc};
use planetime::{
    elapsed_days, elapsed_days_now, light_angle_for, shadow_now, Body, HandAngles, LocalTime,
    RotationOverrides, ShadowDescriptor, ShadowOptions, UnixTime,
};

const TIME_ZONE: &str = "Asia/Kolkata";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let retrograde =
        RotationOverrides::new().with(Body::Venus, -Body::Venus.rotation_period().value());

    let reference = Utc
        .with_ymd_and_hms(2001, 1, 4, 0, 0, 0)
        .single()
        .ok_or("reference date is not representable")?;
    println!("Since the epoch, at {reference}:");
    for (_, label) in elapsed_days(&reference, &retrograde)?.labels() {
        println!("  {label}");
    }

    println!("Since the epoch, now:");
    for (body, label) in elapsed_days_now(&retrograde)?.labels() {
        println!("  {body:<8} {label}");
    }

    let now = UnixTime::now();
    let local = LocalTime::resolve(&now, TIME_ZONE)?;
    let hands = HandAngles::from_local(local);
    println!(
        "{TIME_ZONE} {:02}:{:02}:{:02}  hands h={}° m={}° s={}°  light {:.1}°",
        local.hour,
        local.minute,
        local.second,
        hands.hour,
        hands.minute,
        hands.second,
        light_angle_for(&now, TIME_ZONE)?,
    );

    // Fall back to the night appearance if the zone database lacks the name.
    let shadow = shadow_now(TIME_ZONE, &ShadowOptions::default()).unwrap_or_else(|err| {
        tracing::warn!(%err, "using night shadow");
        ShadowDescriptor::NIGHT
    });
    println!("box-shadow: {shadow}");
    Ok(())
}
