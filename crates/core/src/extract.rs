use std::{fs::File, io::Read, path::Path};

use select::{
	document::Document,
	node::Node,
	predicate::{Attr, Name, Predicate},
};
use tracing::{debug, warn};

use crate::{course::RawMeeting, error::Result};

const TABLE_ID: &str = "list-id-table";

/// Text of the cell described by `column`, e.g. `list-id-table_DAY_CODE`.
fn cell_text(cells: &[Node], column: &str) -> String {
	cells
		.iter()
		.find(|cell| cell.attr("aria-describedby") == Some(column))
		.map(|cell| cell.text().trim().to_string())
		.unwrap_or_default()
}

/// Building and room codes are links inside their cell.
fn cell_link_text(cells: &[Node], column: &str) -> String {
	cells
		.iter()
		.find(|cell| cell.attr("aria-describedby") == Some(column))
		.map(|cell| {
			cell.children()
				.filter(|child| child.name() == Some("a"))
				.map(|link| link.text())
				.collect::<String>()
				.trim()
				.to_string()
		})
		.unwrap_or_default()
}

fn column(name: &str) -> String {
	format!("{TABLE_ID}_{name}")
}

/// Reads the schedule rows out of a WebReg "list" page.
#[must_use]
pub fn parse_document(document: &Document) -> Vec<RawMeeting> {
	let mut meetings = Vec::new();
	let mut course = None::<String>;

	let rows = document.find(
		Attr("id", TABLE_ID).descendant(Name("tr").and(Attr("role", "row"))),
	);

	for row in rows {
		let cells = row
			.children()
			.filter(|child| child.name() == Some("td"))
			.collect::<Vec<_>>();

		// a non-blank first cell starts a new course
		if let Some(first) = cells.first() {
			let label = first.text().split_whitespace().collect::<Vec<_>>().join(" ");

			if !label.is_empty() {
				course = Some(label);
			}
		}

		let kind = cell_text(&cells, &column("FK_CDI_INSTR_TYPE"));

		if kind.is_empty() {
			continue;
		}

		let Some(course) = course.clone() else {
			warn!(kind = %kind, "row found before any course, skipping");
			continue;
		};

		meetings.push(RawMeeting {
			course,
			kind,
			days: cell_text(&cells, &column("DAY_CODE")),
			time: cell_text(&cells, &column("coltime")),
			building: cell_link_text(&cells, &column("BLDG_CODE")),
			room: cell_link_text(&cells, &column("ROOM_CODE")),
		});
	}

	debug!(rows = meetings.len(), "extracted schedule rows");

	meetings
}

#[must_use]
pub fn parse_from_str(html: &str) -> Vec<RawMeeting> {
	parse_document(&Document::from(html))
}

/// # Errors
///
/// Fails when the reader cannot be read to the end.
pub fn parse_from_buf<R: Read>(reader: R) -> Result<Vec<RawMeeting>> {
	Ok(parse_document(&Document::from_read(reader)?))
}

/// Reads from `path`, or stdin when no path is given.
///
/// # Errors
///
/// Fails when the file cannot be opened or read.
pub fn parse_from_file<P: AsRef<Path>>(path: Option<P>) -> Result<Vec<RawMeeting>> {
	if let Some(path) = path {
		parse_from_buf(File::open(path)?)
	} else {
		parse_from_buf(std::io::stdin())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::course::tests::row;

	const PAGE: &str = r##"<html><body>
<div id="view-booklist"></div>
<table id="list-id-table"><tbody>
<tr role="row"><td>  CSE    100 </td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">LE</td><td aria-describedby="list-id-table_DAY_CODE">MWF</td><td aria-describedby="list-id-table_coltime">10:00a-10:50a</td><td aria-describedby="list-id-table_BLDG_CODE"><a href="#">APM</a></td><td aria-describedby="list-id-table_ROOM_CODE"><a href="#">B402A</a></td></tr>
<tr role="row"><td> </td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">DI</td><td aria-describedby="list-id-table_DAY_CODE">Th</td><td aria-describedby="list-id-table_coltime">6:00p-6:50p</td><td aria-describedby="list-id-table_BLDG_CODE"><a href="#">CENTR</a></td><td aria-describedby="list-id-table_ROOM_CODE"><a href="#">109</a></td></tr>
<tr role="row"><td></td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE"> </td><td aria-describedby="list-id-table_DAY_CODE"></td><td aria-describedby="list-id-table_coltime"></td><td aria-describedby="list-id-table_BLDG_CODE"></td><td aria-describedby="list-id-table_ROOM_CODE"></td></tr>
<tr role="row"><td></td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">FI</td><td aria-describedby="list-id-table_DAY_CODE">Tuesday 12/08/2015</td><td aria-describedby="list-id-table_coltime">11:30a-2:29p</td><td aria-describedby="list-id-table_BLDG_CODE"><a href="#">APM</a></td><td aria-describedby="list-id-table_ROOM_CODE"><a href="#">B402A</a></td></tr>
<tr><td>MATH 20C</td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">LE</td></tr>
<tr role="row"><td>MATH 20C</td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">LA</td><td aria-describedby="list-id-table_DAY_CODE">M</td><td aria-describedby="list-id-table_coltime">2:00p-3:50p</td><td aria-describedby="list-id-table_BLDG_CODE"><a href="#">TBA</a></td><td aria-describedby="list-id-table_ROOM_CODE"><a href="#">TBA</a></td></tr>
</tbody></table>
<table><tbody><tr role="row"><td>OTHER 1</td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">LE</td></tr></tbody></table>
</body></html>"##;

	#[test]
	fn test_parse_rows() {
		let rows = parse_from_str(PAGE);

		assert_eq!(
			rows,
			[
				row("CSE 100", "LE", "MWF", "10:00a-10:50a", "APM", "B402A"),
				row("CSE 100", "DI", "Th", "6:00p-6:50p", "CENTR", "109"),
				row("CSE 100", "FI", "Tuesday 12/08/2015", "11:30a-2:29p", "APM", "B402A"),
				row("MATH 20C", "LA", "M", "2:00p-3:50p", "TBA", "TBA"),
			]
		);
	}

	#[test]
	fn test_parse_from_buf() {
		let rows = parse_from_buf(PAGE.as_bytes()).unwrap();

		assert_eq!(rows.len(), 4);
	}

	#[test]
	fn test_parse_link_cells() {
		let page = r##"<table id="list-id-table"><tbody><tr role="row"><td>CSE 100</td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">LE</td><td aria-describedby="list-id-table_BLDG_CODE"> <a href="#">LEDDN</a><a href="#"> AUD</a> </td><td aria-describedby="list-id-table_ROOM_CODE">ignored<a href="#">AUD</a></td></tr></tbody></table>"##;
		let rows = parse_from_str(page);

		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].building, "LEDDN AUD");
		assert_eq!(rows[0].room, "AUD");
	}

	#[test]
	fn test_parse_row_before_course_is_skipped() {
		let page = r#"<table id="list-id-table"><tbody><tr role="row"><td></td><td aria-describedby="list-id-table_FK_CDI_INSTR_TYPE">LE</td></tr></tbody></table>"#;

		assert!(parse_from_str(page).is_empty());
	}

	#[test]
	fn test_parse_missing_table() {
		assert!(parse_from_str("<html><body><p>Sign in</p></body></html>").is_empty());
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_from_file(Some("/nonexistent/webreg.html"));

		assert!(matches!(result, Err(crate::Error::Io(_))));
	}
}
