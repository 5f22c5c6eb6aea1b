//! Conversion between the wire's .NET `DateTime` representation and
//! nanoseconds since the Unix epoch, the form [`Value::DateTime`](crate::value::Value::DateTime)
//! stores internally.
//!
//! A wire `DateTime` is 8 bytes: the top 2 bits carry a timezone flag
//! (`0` = unspecified, `1` = UTC, `2` = local), the low 62 bits carry ticks
//! (100 ns units) since `0001-01-01 00:00:00`.

/// Ticks between `0001-01-01 00:00:00` and the Unix epoch (`1970-01-01`).
const TICKS_TO_UNIX_EPOCH: i64 = 621_355_968_000_000_000;

const TICKS_MASK: u64 = 0x3FFF_FFFF_FFFF_FFFF;

/// Timezone flag carried in a wire `DateTime`'s top 2 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZone {
    Unspecified,
    Utc,
    Local,
}

/// Splits a raw 8-byte wire `DateTime` into its timezone flag and the
/// nanosecond offset from the Unix epoch.
///
/// This crate treats [`TimeZone::Unspecified`] and [`TimeZone::Utc`]
/// identically: both are read as an absolute timestamp. This differs from
/// the reference implementation this format was distilled from, which
/// rejects `TimeZone::Utc` outright; see `DESIGN.md` for the rationale.
pub fn decode(raw: u64) -> (TimeZone, i64) {
    let tz = match raw >> 62 {
        1 => TimeZone::Utc,
        2 => TimeZone::Local,
        _ => TimeZone::Unspecified,
    };
    let ticks = (raw & TICKS_MASK) as i64;
    let nanos = (ticks - TICKS_TO_UNIX_EPOCH) * 100;
    (tz, nanos)
}

/// Encodes a Unix-epoch nanosecond offset as a raw 8-byte wire `DateTime`,
/// always tagging it [`TimeZone::Local`] (matching the reference
/// implementation's serializer, which never tracks a real UTC offset).
pub fn encode(nanos_since_epoch: i64) -> u64 {
    let ticks = nanos_since_epoch / 100 + TICKS_TO_UNIX_EPOCH;
    (ticks as u64 & TICKS_MASK) | (2u64 << 62)
}
