//! Labeled 311 complaints.
//!
//! The built-in set is deliberately ambiguous and multilingual (English,
//! Spanish, Chinese), six complaints per department. A samples file holds one
//! record per line: the department label, whitespace, then the complaint.

use std::path::Path;

use crate::department::Department;
use crate::error::SampleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub text: String,
    pub department: Department,
}

impl Sample {
    pub fn new(text: impl Into<String>, department: Department) -> Self {
        Sample {
            text: text.into(),
            department,
        }
    }
}

const BUILTIN: [(&str, Department); 30] = [
    ("Someone's burning trash in a barrel behind the restaurant, not sure if legal", Department::Fire),
    ("El detector de humo no deja de sonar pero no veo fuego en ningún lado", Department::Fire),
    ("My landlord removed the sprinkler system during renovations last month", Department::Fire),
    ("煤气味道很重，可能是邻居的炉子漏气了", Department::Fire),
    ("Fire escape being used as storage by tenants, completely blocked", Department::Fire),
    ("Someone welding in basement without ventilation, sparks everywhere", Department::Fire),
    ("Homeless person sleeping in park, harassing visitors for money", Department::Police),
    ("El vendedor ambulante no tiene permiso y está bloqueando la entrada del metro", Department::Police),
    ("Neighbor's dog bit my kid, owner refuses to provide vaccine records", Department::Police),
    ("有人在商店门口非法赌博，很多现金交易", Department::Police),
    ("Car alarm going off every night at 3am for two weeks straight", Department::Police),
    ("Landlord changed my locks while I was at work, won't let me in", Department::Police),
    ("Balcony railing completely rusted through, looks ready to collapse", Department::Buildings),
    ("La pared del edificio tiene grietas grandes y caen pedazos a la acera", Department::Buildings),
    ("Landlord refuses to fix heat in winter, apartment is 45 degrees", Department::Buildings),
    ("电梯坏了三个月了，老人只能爬楼梯", Department::Buildings),
    ("Construction crew working without permits, removed load-bearing wall", Department::Buildings),
    ("Mold covering entire bathroom ceiling after pipe burst, landlord ignoring", Department::Buildings),
    ("Restaurant isn't giving receipts and I think they're dodging taxes", Department::Finance),
    ("Mi casero no me da recibos de renta para mis impuestos", Department::Finance),
    ("Business closed but still charging my credit card monthly", Department::Finance),
    ("我的房产税账单有两份，金额不一样", Department::Finance),
    ("Parking meter ate my money, no ticket issued, city won't refund", Department::Finance),
    ("Contractor demanding cash only, no invoice, suspicious pricing", Department::Finance),
    ("Tree roots destroying sidewalk, multiple people tripped and fell", Department::Parks),
    ("El baño del parque está cerrado pero dice que debería estar abierto", Department::Parks),
    ("Rats everywhere in park near overflowing garbage cans", Department::Parks),
    ("公园的秋千坏了，有锋利的边缘可能伤到孩子", Department::Parks),
    ("Someone dumped construction debris on nature trail", Department::Parks),
    ("Community garden plot being used to sell vegetables illegally", Department::Parks),
];

pub fn builtin_samples() -> Vec<Sample> {
    BUILTIN
        .iter()
        .map(|(text, department)| Sample::new(*text, *department))
        .collect()
}

pub fn load_samples(path: &Path) -> Result<Vec<Sample>, SampleError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SampleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(&contents)
}

/// Parses `label text` records. Blank lines and `#` comments are skipped.
pub fn parse_samples(contents: &str) -> Result<Vec<Sample>, SampleError> {
    let mut samples = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        let record = raw.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }
        let (label, text) = match record.split_once(char::is_whitespace) {
            Some((label, text)) => (label, text.trim()),
            None => (record, ""),
        };
        let department = label
            .parse::<Department>()
            .map_err(|source| SampleError::UnknownLabel { line, source })?;
        if text.is_empty() {
            return Err(SampleError::MissingText { line });
        }
        samples.push(Sample::new(text, department));
    }
    Ok(samples)
}
