use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use sunhours::{
    current_planetary_hour, eight_fold_periods_for_day, GeoLocation, InMemoryProvider,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let first = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
    let provider = InMemoryProvider::new().with_daily_times(
        first,
        3,
        NaiveTime::from_hms_opt(0, 33, 0).unwrap(),
        NaiveTime::from_hms_opt(14, 1, 0).unwrap(),
    );
    let ahmedabad = GeoLocation::new(23.03, 72.58, 53.0);

    let now = Utc.with_ymd_and_hms(2024, 6, 21, 5, 45, 0).unwrap();
    match current_planetary_hour(&provider, now, &ahmedabad).await {
        Ok(hour) => println!("Planetary hour: {hour}"),
        Err(err) => eprintln!("planetary hour unavailable: {err}"),
    }

    let day = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    match eight_fold_periods_for_day(&provider, day, &ahmedabad).await {
        Ok(periods) => {
            for period in periods {
                println!("{:?} {period}", period.label().quality());
            }
        }
        Err(err) => eprintln!("eight-fold periods unavailable: {err}"),
    }
}
