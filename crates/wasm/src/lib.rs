#![warn(clippy::pedantic)]

use wasm_bindgen::prelude::{wasm_bindgen, JsError};

/// Converts the WebReg page's HTML into calendar import CSV. The error
/// message is meant to be shown to the user as is.
///
/// # Errors
///
/// Fails when the term cannot be anchored or a weekday code is unknown.
#[wasm_bindgen]
pub fn from_html(html: &str) -> Result<String, JsError> {
	let rows = webreg2cal_core::extract::parse_from_str(html);

	webreg2cal_core::convert(&rows).map_err(|e| JsError::new(&e.to_string()))
}

/// Same as [`from_html`], producing an iCalendar document.
///
/// # Errors
///
/// Fails when the term cannot be anchored or a weekday code is unknown.
#[wasm_bindgen]
pub fn from_html_ics(html: &str) -> Result<String, JsError> {
	let rows = webreg2cal_core::extract::parse_from_str(html);

	webreg2cal_core::convert_to_calendar(&rows)
		.map(|calendar| calendar.to_string())
		.map_err(|e| JsError::new(&e.to_string()))
}

/// File name for the download link.
#[wasm_bindgen]
#[must_use]
pub fn file_name() -> String {
	webreg2cal_core::csv::FILE_NAME.to_string()
}
