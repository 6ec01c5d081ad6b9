use std::fmt::{Display, Formatter};
use std::str::FromStr;

use eyre::{eyre, Report};

use super::tables;

/// Named amino acid substitution tables.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SubstitutionMatrix {
    Blosum50,
    Blosum62,
    Pam40,
    Pam120,
    Pam250,
}

impl SubstitutionMatrix {
    pub const ALL: [SubstitutionMatrix; 5] = [
        SubstitutionMatrix::Blosum50,
        SubstitutionMatrix::Blosum62,
        SubstitutionMatrix::Pam40,
        SubstitutionMatrix::Pam120,
        SubstitutionMatrix::Pam250,
    ];

    /// Canonical upper-case name of the table, e.g. `BLOSUM62`.
    pub fn name(&self) -> &'static str {
        match self {
            SubstitutionMatrix::Blosum50 => "BLOSUM50",
            SubstitutionMatrix::Blosum62 => "BLOSUM62",
            SubstitutionMatrix::Pam40 => "PAM40",
            SubstitutionMatrix::Pam120 => "PAM120",
            SubstitutionMatrix::Pam250 => "PAM250",
        }
    }

    fn table(&self) -> &'static tables::Table {
        match self {
            SubstitutionMatrix::Blosum50 => &tables::BLOSUM50,
            SubstitutionMatrix::Blosum62 => &tables::BLOSUM62,
            SubstitutionMatrix::Pam40 => &tables::PAM40,
            SubstitutionMatrix::Pam120 => &tables::PAM120,
            SubstitutionMatrix::Pam250 => &tables::PAM250,
        }
    }

    /// Score of the ordered pair of symbols, `None` if the table doesn't define it.
    /// The lookup is exact: callers are responsible for upper-casing the symbols.
    pub fn lookup(&self, a: char, b: char) -> Option<i8> {
        let (row, col) = (tables::index(a)?, tables::index(b)?);
        Some(self.table()[row][col])
    }
}

impl Display for SubstitutionMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SubstitutionMatrix {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubstitutionMatrix::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| eyre!("Unknown substitution matrix: {s:?}"))
    }
}

/// Symbol scoring source: either a substitution table or plain match/mismatch arithmetic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MatrixChoice {
    #[default]
    None,
    Table(SubstitutionMatrix),
}

impl MatrixChoice {
    pub const NONE: &'static str = "none";

    /// Best-effort resolution of a raw table name. Unknown names degrade to [`MatrixChoice::None`].
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case(Self::NONE) {
            return MatrixChoice::None;
        }
        match name.parse::<SubstitutionMatrix>() {
            Ok(matrix) => MatrixChoice::Table(matrix),
            Err(err) => {
                log::warn!("{err}, falling back to match/mismatch scoring");
                MatrixChoice::None
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatrixChoice::None => Self::NONE,
            MatrixChoice::Table(matrix) => matrix.name(),
        }
    }
}

impl From<SubstitutionMatrix> for MatrixChoice {
    fn from(value: SubstitutionMatrix) -> Self {
        MatrixChoice::Table(value)
    }
}

impl Display for MatrixChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
