//! Wall-clock access that works in the browser and in native tests.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Whole seconds since the Unix epoch, as the contract expects deadlines.
pub fn now_secs() -> u64 {
    u64::try_from(now_ms() / 1_000).unwrap_or(0)
}

/// Seed for the mock-data generator, distinct per page load.
pub fn load_seed() -> u64 {
    now_ms().unsigned_abs()
}
