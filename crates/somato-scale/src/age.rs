use jiff::civil::Date;

/// Whole elapsed years between `birth` and `on`, calendar-aware: the year
/// difference, minus one if `on` falls before the birthday in its year.
/// The birthday itself counts as having had it.
pub fn age_on(birth: Date, on: Date) -> i16 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
