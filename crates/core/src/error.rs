use thiserror::Error;

/// Errors that abort a conversion. No partial output is produced once one
/// of these is returned.
#[derive(Error, Debug)]
pub enum Error {
	#[error("Cannot find the first day of the class: {0}")]
	MissingTermAnchor(String),

	#[error("Cannot read unknown weekday: {0:?}")]
	UnknownWeekday(String),

	#[error("Cannot read time range: {0:?}")]
	InvalidTimeRange(String),

	#[error("Cannot read final exam date: {0:?}")]
	InvalidExamDate(String),

	#[error("No courses found in the schedule")]
	EmptyCourseSet,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
