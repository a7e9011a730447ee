use chrono::FixedOffset;
use rstest::rstest;

use super::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn ago(elapsed: TimeDelta) -> String {
    to_relative(&(now() - elapsed), &now())
}

#[rstest]
#[case(TimeDelta::seconds(30), "Just Now")]
#[case(TimeDelta::seconds(59), "Just Now")]
#[case(TimeDelta::zero(), "Just Now")]
#[case(TimeDelta::seconds(-600), "Just Now")]
#[case(TimeDelta::seconds(60), "1 minutes ago")]
#[case(TimeDelta::seconds(90), "1 minutes ago")]
#[case(TimeDelta::minutes(8), "8 minutes ago")]
#[case(TimeDelta::minutes(59), "59 minutes ago")]
#[case(TimeDelta::minutes(60), "1 hour ago")]
#[case(TimeDelta::minutes(61), "1 hour ago, 1 minute")]
#[case(TimeDelta::minutes(125), "2 hours ago, 5 minutes")]
#[case(TimeDelta::hours(24), "1 day ago")]
#[case(TimeDelta::hours(25), "1 day ago, 1 hour")]
#[case(TimeDelta::hours(50), "2 days ago, 2 hours")]
#[case(TimeDelta::days(7), "1 week ago")]
#[case(TimeDelta::days(10), "1 week ago, 3 days")]
#[case(TimeDelta::days(14), "2 weeks ago")]
#[case(TimeDelta::days(30), "4 weeks ago, 2 days")]
#[case(TimeDelta::days(31), "1 month ago")]
#[case(TimeDelta::days(45), "1 month ago, 1 week")]
#[case(TimeDelta::days(62), "2 months ago")]
#[case(TimeDelta::days(364), "11 months ago, 4 weeks")]
#[case(TimeDelta::days(365), "1 year ago")]
#[case(TimeDelta::days(400), "1 year ago")]
#[case(TimeDelta::days(730), "2 years ago")]
fn test_to_relative(#[case] elapsed: TimeDelta, #[case] expected: &str) {
    assert_eq!(ago(elapsed), expected);
}

#[test]
fn test_singular_minute() {
    let format = RelativeFormat::new().with_always_plural_minutes(false);
    assert_eq!(format.format(TimeDelta::seconds(90)), "1 minute ago");
    assert_eq!(format.format(TimeDelta::minutes(2)), "2 minutes ago");
    assert_eq!(format.format(TimeDelta::hours(3)), "3 hours ago");
}

#[test]
fn test_default_format() {
    assert_eq!(RelativeFormat::default(), RelativeFormat::new());
    assert!(RelativeFormat::default().always_plural_minutes);
}

#[test]
fn test_mixed_time_zones() {
    let tz = FixedOffset::east_opt(3 * 3600).unwrap();
    let past = now().with_timezone(&tz) - TimeDelta::hours(25);
    assert_eq!(to_relative(&past, &now()), "1 day ago, 1 hour");
}

#[test]
fn test_to_relative_now() {
    let past = Utc::now() - TimeDelta::days(400);
    assert_eq!(to_relative_now(&past), "1 year ago");
    assert_eq!(to_relative_now(&Utc::now()), "Just Now");
}
