//! Assembly of the user-facing prayer schedule message.

use crate::services::owghat::CityRecord;
use crate::utils::numerals::to_persian_digits;

/// Builds the daily schedule reply from a decoded provider record.
///
/// The template and field order are a contract with existing chat consumers
/// and must stay byte-for-byte stable. `day` is the provider's day-of-month
/// already decoded to ASCII digits; it is re-encoded to Persian digits here
/// so display stays consistent whatever the provider sent. The city name and
/// the six event times are verbatim pass-through.
pub fn compose_schedule(record: &CityRecord, month: &str, day: &str, clock: &str) -> String {
    format!(
        "📅 امروز {day} {month} ساعت {clock}\n\
         🌇 اوقات شرعی به افق {city}:\n\
         🌅 اذان صبح: {sobh}\n\
         🌄 طلوع آفتاب: {tolu}\n\
         🕌 اذان ظهر: {zohr}\n\
         🌆 غروب آفتاب: {ghorob}\n\
         🌙 اذان مغرب: {maghreb}\n\
         🕛 نیمه شب شرعی: {nime_shab}\n",
        day = to_persian_digits(day),
        month = month,
        clock = clock,
        city = record.city,
        sobh = record.azan_sobh,
        tolu = record.toloe_aftab,
        zohr = record.azan_zohre,
        ghorob = record.ghorob_aftab,
        maghreb = record.azan_maghreb,
        nime_shab = record.nime_shabe_sharie,
    )
}
