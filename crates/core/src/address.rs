//! Building codes used by WebReg, retrieved Sept 11, 2015 from the campus
//! building and facility code list. `TBA` and `OFF` map to an empty name.

pub const CAMPUS_SUFFIX: &str = ", UCSD";

const ADDRESSES: &[(&str, &str)] = &[
	("APM", "Applied Physics & Mathematics Building"),
	("ASANT", "Asante Hall"),
	("BIO", "Biology Building"),
	("BIRCH", "Birch Aquarium"),
	("BONN", "Bonner Hall"),
	("BSB", "Biomedical Sciences Building"),
	("CCC", "Cross-Cultural Center"),
	("CENTR", "Center Hall"),
	("CICC", "Copely International Conference Center"),
	("CILAS", "Center for Iberian and Latin American Studies"),
	("CLICS", "Center for Library & Instructional Computing Services"),
	("CLIN", "Clinical Sciences Building / Clinical Research Facility"),
	("CMG", "Center for Molecular Genetics"),
	("CMME", "Center for Molecular Medicine East"),
	("CMMW", "Center for Molecular Medicine West"),
	("CMRR", "Center for Magnetic Recording Research"),
	("CPMC", "Conrad Prebys Music Center"),
	("CRB", "Chemistry Research Building"),
	("CSB", "Cognitive Science Building"),
	("DANCE", "Wagner Dance Building"),
	("DSD", "Deep Sea Drilling Building"),
	("EBU1", "Engineering Building Unit 1"),
	("EBU2", "Engineering Building Unit 2"),
	("EBU3B", "Engineering Building Unit 3"),
	("ECKRT", "SIO Library, Eckart Building"),
	("ECON", "Economics Building"),
	("ERCA", "Eleanor Roosevelt College Administration"),
	("FORUM", "Mandell Weiss Forum"),
	("GEISL", "Geisel Library"),
	("GH", "Galbraith Hall"),
	("HSS", "Humanities & Social Sciences Building"),
	("HUBBS", "Hubbs Hall"),
	("IGPP", "Institute of Geophysics & Planetary Physics"),
	("IOA", "Institute of the Americas"),
	("LASB", "Latin American Studies Building"),
	("LEDDN AUD", "Patrick J. Ledden Auditorium"),
	("LFFB", "Leichtag Family Foundation Biomedical Research Building"),
	("LIT", "Literature Building"),
	("MANDE", "Mandeville Center"),
	("MAYER", "Mayer Hall"),
	("MCC", "Media Center/Communication Building"),
	("MCGIL", "McGill Hall"),
	("MNDLR", "Mandler Hall"),
	("MTF", "Medical Teaching Facility"),
	("MWEIS", "Mandell Weiss Theatre"),
	("MYR-A", "Mayer Hall Addition"),
	("NIERN", "Nierenberg Hall"),
	("NSB", "Faustina Solis Lecture Hall"),
	("NTV", "Nierenberg Hall Annex"),
	("OAR", "Keck Center for Ocean & Atmospheric Research"),
	("OFF", ""),
	("OTRSN", "Otterson Hall"),
	("PACIF", "Pacific Hall"),
	("PCYNH", "Pepper Canyon Hall"),
	("PETER", "Peterson Hall"),
	("PFBH", "Powell-Focht Bioengineering Hall"),
	("POTKR", "Potiker Theatre"),
	("PRICE", "Price Center"),
	("RBC", "Robinson Building Complex"),
	("RECGM", "Recreation Gymnasium"),
	("RITTR", "Ritter Hall"),
	("RVCOM", "Revelle Commons"),
	("RVPRO", "Revelle College Administration Building"),
	("SCHOL", "Scholander Hall"),
	("SCRB", "Stein Clinical Research Building"),
	("SCRPS", "Old Scripps Building"),
	("SDSC", "San Diego Supercomputer Center"),
	("SEQUO", "Sequoyah Hall"),
	("SERF", "Science & Engineering Research Facility"),
	("SOLIS", "Solis Lecture Hall"),
	("SSB", "Social Sciences Building"),
	("SSRB", "Social Sciences Research Building"),
	("SVERD", "Sverdrup Hall"),
	("TBA", ""),
	("TM101-103", "Thurgood Marshall College Trailers"),
	("TMCA", "Thurgood Marshall College Administration Building"),
	("U201", "University Center, Building 201"),
	("U303", "University Center, Building 303, Cancer Research Facility"),
	("U409", "University Center, Building 409"),
	("U413", "University Center, Building 413"),
	("U413A", "University Center, Building 413A"),
	("U515", "University Center, Building 515"),
	("U516", "University Center, Building 516"),
	("U517", "University Center, Building 517"),
	("U518", "University Center, Building 518"),
	("UNEX", "University Extension Complex"),
	("UREY", "Urey Hall"),
	("URY-A", "Urey Hall Addition"),
	("VAF", "Visual Arts Facility"),
	("VAUGN", "Vaughan Hall"),
	("WLH", "Warren Lecture Hall"),
	("YORK", "York Hall, Undergraduate Sciences Building"),
];

/// Full building name for a WebReg building code, if the code is known.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static str> {
	ADDRESSES
		.iter()
		.find(|&&(known, _)| known == code)
		.map(|&(_, name)| name)
}

/// Location text for a calendar entry: `"<name>, UCSD"`, or empty when the
/// code is unknown or has no physical building (TBA, off-campus).
#[must_use]
pub fn resolve(code: &str) -> String {
	match lookup(code) {
		Some(name) if !name.is_empty() => format!("{name}{CAMPUS_SUFFIX}"),
		_ => String::new(),
	}
}
