//! `HH:MM:SS[.fff]` timecode conversion.

use crate::{Error, Result};

/// Convert an `HH:MM:SS[.fff]` timecode to seconds.
///
/// Hours and minutes are whole numbers; seconds may carry a fraction.
/// Minutes and seconds are not range-checked, so `00:90:00` is 5400s.
///
/// # Example
///
/// ```
/// use hlsclip_media::timecode;
///
/// assert_eq!(timecode::parse("01:02:03.5")?, 3723.5);
/// # Ok::<(), hlsclip_media::Error>(())
/// ```
pub fn parse(hms: &str) -> Result<f64> {
    let fields: Vec<&str> = hms.trim().split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return Err(Error::invalid_timecode(
            hms,
            format!("expected HH:MM:SS, found {} field(s)", fields.len()),
        ));
    };

    let hours = parse_whole(hms, "hours", hours)?;
    let minutes = parse_whole(hms, "minutes", minutes)?;
    let seconds: f64 = seconds
        .trim()
        .parse()
        .map_err(|_| Error::invalid_timecode(hms, format!("seconds {seconds:?} is not a number")))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::invalid_timecode(
            hms,
            format!("seconds {seconds} is out of range"),
        ));
    }

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
}

fn parse_whole(input: &str, field: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_timecode(input, format!("{field} {value:?} is not a number")))
}

/// Render seconds as `HH:MM:SS.fff`.
pub fn format(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let (secs, millis) = (millis / 1000, millis % 1000);
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        millis
    )
}
