use chrono::{NaiveDate, Utc};
use dating::{DateRange, DateTimeRange};

fn main() {
    let this_month = DateTimeRange::month_containing(Utc::now());
    println!("Month: {this_month}");
    println!("Now inside: {}", this_month.contains(&Utc::now()));

    let Some(day) = NaiveDate::from_ymd_opt(2017, 2, 14) else {
        return;
    };
    let billing = DateRange::month_containing(day);
    println!("Billing cycle: {billing}");
    for date in billing.days().take(3) {
        println!("  {date}");
    }
}
