// amigo-core/src/units.rs

use uom::si::f64::{Ratio as UomRatio, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Ratio = UomRatio;
pub type Time = UomTime;

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn minutes(v: f64) -> Time {
    use uom::si::time::minute;
    Time::new::<minute>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Time in seconds as a bare number.
#[inline]
pub fn as_seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

/// Ratio as a bare number.
#[inline]
pub fn as_unitless(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}
