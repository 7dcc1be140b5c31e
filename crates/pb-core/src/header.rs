//! Header mapping from column names to positions

use crate::error::{Error, Result};
use std::collections::HashMap;

/// The column names every contact table must carry.
///
/// `surname` is the patronymic/middle-name slot, not a family name.
pub const REQUIRED_FIELDS: [&str; 4] = ["lastname", "firstname", "surname", "phone"];

/// Maps column names to their positions in the header row.
///
/// Built once per run; every row of the table is interpreted against the
/// same mapping. Duplicate column names collapse (the last occurrence wins),
/// so the recognized column count can be smaller than the raw header length.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
    len: usize,
    lastname: usize,
    firstname: usize,
    surname: usize,
    phone: usize,
}

impl HeaderIndex {
    /// Build the mapping from a header row.
    ///
    /// Fails with `MissingField` if any of [`REQUIRED_FIELDS`] is absent.
    pub fn new(header: &[String]) -> Result<Self> {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(header.len());
        for (idx, name) in header.iter().enumerate() {
            positions.insert(name.clone(), idx);
        }
        let len = positions.len();

        let lastname = lookup(&positions, "lastname")?;
        let firstname = lookup(&positions, "firstname")?;
        let surname = lookup(&positions, "surname")?;
        let phone = lookup(&positions, "phone")?;

        Ok(Self {
            positions,
            len,
            lastname,
            firstname,
            surname,
            phone,
        })
    }

    /// Look up the position of a column by name
    pub fn position(&self, name: &str) -> Result<usize> {
        lookup(&self.positions, name)
    }

    /// The number of recognized (distinct) columns; rows are truncated to this
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the header had no columns
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the `lastname` column
    pub fn lastname(&self) -> usize {
        self.lastname
    }

    /// Position of the `firstname` column
    pub fn firstname(&self) -> usize {
        self.firstname
    }

    /// Position of the `surname` (patronymic) column
    pub fn surname(&self) -> usize {
        self.surname
    }

    /// Position of the `phone` column
    pub fn phone(&self) -> usize {
        self.phone
    }
}

fn lookup(positions: &HashMap<String, usize>, name: &str) -> Result<usize> {
    positions
        .get(name)
        .copied()
        .ok_or_else(|| Error::MissingField(name.to_string()))
}
