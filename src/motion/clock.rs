//! Wall-clock formatting for the header clock.

const MS_PER_DAY: i64 = 86_400_000;

/// Formats `epoch_ms` in a fixed UTC offset as `h:mm:ss AM`.
pub fn format_clock(epoch_ms: f64, utc_offset_minutes: i32) -> String {
	let local_ms = epoch_ms as i64 + i64::from(utc_offset_minutes) * 60_000;
	let secs = local_ms.rem_euclid(MS_PER_DAY) / 1000;
	let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
	let (h12, suffix) = match h {
		0 => (12, "AM"),
		1..=11 => (h, "AM"),
		12 => (12, "PM"),
		_ => (h - 12, "PM"),
	};
	format!("{h12}:{m:02}:{s:02} {suffix}")
}
