use time::{
	Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::{format_description, time},
};

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LOCAL_DATE_TIME: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
const SPACED_DATE_TIME: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]");
const MAX_OFFSET_MINUTES: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Unrecognized timestamp {raw:?}.")]
	InvalidTimestamp { raw: String },
	#[error("Expected a YYYY-MM-DD date, got {raw:?}.")]
	InvalidDate { raw: String },
	#[error("UTC offset of {minutes} minutes is out of range.")]
	InvalidOffset { minutes: i32 },
}

/// Parses a feed timestamp into an instant.
///
/// RFC 3339 values keep their offset. Values without an offset, including a bare date, are read
/// as UTC.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, Error> {
	if let Ok(instant) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Ok(instant);
	}

	for format in [LOCAL_DATE_TIME, SPACED_DATE_TIME] {
		if let Ok(local) = PrimitiveDateTime::parse(raw, format) {
			return Ok(local.assume_utc());
		}
	}

	Date::parse(raw, CALENDAR_DATE)
		.map(|date| date.midnight().assume_utc())
		.map_err(|_| Error::InvalidTimestamp { raw: raw.to_string() })
}

pub fn parse_calendar_date(raw: &str) -> Result<Date, Error> {
	Date::parse(raw, CALENDAR_DATE).map_err(|_| Error::InvalidDate { raw: raw.to_string() })
}

/// `YYYY-MM-DD`, the prefix feed timestamps start with.
pub fn iso_date(date: Date) -> String {
	format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Inclusive instants that bound a calendar day in one fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
	offset: UtcOffset,
}
impl DayBounds {
	pub fn utc() -> Self {
		Self { offset: UtcOffset::UTC }
	}

	pub fn with_offset_minutes(minutes: i32) -> Result<Self, Error> {
		if minutes.unsigned_abs() >= MAX_OFFSET_MINUTES {
			return Err(Error::InvalidOffset { minutes });
		}

		let offset = UtcOffset::from_whole_seconds(minutes * 60)
			.map_err(|_| Error::InvalidOffset { minutes })?;

		Ok(Self { offset })
	}

	pub fn offset(&self) -> UtcOffset {
		self.offset
	}

	/// 00:00:00 of `date`.
	pub fn start_of(&self, date: Date) -> OffsetDateTime {
		date.midnight().assume_offset(self.offset)
	}

	/// 23:59:59 of `date`. Anything later on the same day falls outside.
	pub fn end_of(&self, date: Date) -> OffsetDateTime {
		PrimitiveDateTime::new(date, time!(23:59:59)).assume_offset(self.offset)
	}
}
impl Default for DayBounds {
	fn default() -> Self {
		Self::utc()
	}
}
