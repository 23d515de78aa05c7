//! Column declarations of the similarity table.

use std::fmt;

use crate::matches::MatchRow;

/// Minimum width every column gets unless it overrides it.
pub const DEFAULT_MIN_WIDTH: f32 = 150.0;

/// Identifies a column and the [`MatchRow`] field it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKey {
    SerialNumber,
    SourceCode,
    SourceDescription,
    TargetCode,
    TargetDescription,
    SimilarityScore,
}

impl ColumnKey {
    /// All columns in display order.
    pub const ALL: [Self; 6] = [
        Self::SerialNumber,
        Self::SourceCode,
        Self::SourceDescription,
        Self::TargetCode,
        Self::TargetDescription,
        Self::SimilarityScore,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::SerialNumber => "Sl No",
            Self::SourceCode => "Orion Code",
            Self::SourceDescription => "Orion Description",
            Self::TargetCode => "SDP Code",
            Self::TargetDescription => "SDP Description",
            Self::SimilarityScore => "Similarity Score",
        }
    }

    pub fn value(self, row: &MatchRow) -> CellValue<'_> {
        match self {
            Self::SerialNumber => CellValue::Serial(row.serial_number),
            Self::SourceCode => CellValue::Text(&row.source_code),
            Self::SourceDescription => CellValue::Text(&row.source_description),
            Self::TargetCode => CellValue::Text(&row.target_code),
            Self::TargetDescription => CellValue::Text(&row.target_description),
            Self::SimilarityScore => CellValue::Number(row.similarity_score),
        }
    }
}

/// A borrowed cell of a [`MatchRow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Serial(usize),
    Text(&'a str),
    Number(Option<f64>),
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
            Self::Number(Some(n)) => write!(f, "{n}"),
            Self::Number(None) => Ok(()),
        }
    }
}

/// Which filter a column offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    None,
    Text,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pinned {
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Center,
    Right,
}

/// Visual emphasis of a column's cells; the UI maps it to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    Plain,
    /// Grey background, bold text.
    Index,
    /// Orion side of the match.
    Source,
    /// SDP side of the match.
    Target,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub key: ColumnKey,
    pub header: &'static str,
    pub width: f32,
    pub min_width: f32,
    pub sortable: bool,
    pub filter: FilterKind,
    pub resizable: bool,
    pub pinned: Option<Pinned>,
    pub align: CellAlign,
    pub tone: CellTone,
}

impl ColumnDef {
    /// Width the column starts at: its declared width, never below its minimum.
    pub fn initial_width(&self) -> f32 {
        self.width.max(self.min_width)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

/// Behaviour of a column that declares nothing beyond its key.
pub fn default_column_def(key: ColumnKey) -> ColumnDef {
    ColumnDef {
        key,
        header: key.header(),
        width: DEFAULT_MIN_WIDTH,
        min_width: DEFAULT_MIN_WIDTH,
        sortable: true,
        filter: FilterKind::Text,
        resizable: true,
        pinned: None,
        align: CellAlign::Left,
        tone: CellTone::Plain,
    }
}

/// The fixed column layout, in display order.
pub fn column_defs() -> [ColumnDef; 6] {
    [
        ColumnDef {
            width: 80.0,
            min_width: 80.0,
            sortable: false,
            filter: FilterKind::None,
            pinned: Some(Pinned::Left),
            align: CellAlign::Center,
            tone: CellTone::Index,
            ..default_column_def(ColumnKey::SerialNumber)
        },
        ColumnDef {
            width: 150.0,
            tone: CellTone::Source,
            ..default_column_def(ColumnKey::SourceCode)
        },
        ColumnDef {
            width: 250.0,
            ..default_column_def(ColumnKey::SourceDescription)
        },
        ColumnDef {
            width: 150.0,
            tone: CellTone::Target,
            ..default_column_def(ColumnKey::TargetCode)
        },
        ColumnDef {
            width: 250.0,
            ..default_column_def(ColumnKey::TargetDescription)
        },
        ColumnDef {
            width: 140.0,
            filter: FilterKind::Number,
            align: CellAlign::Right,
            ..default_column_def(ColumnKey::SimilarityScore)
        },
    ]
}

/// Declaration of a single column.
pub fn column_def(key: ColumnKey) -> ColumnDef {
    column_defs()
        .into_iter()
        .find(|def| def.key == key)
        .unwrap_or_else(|| default_column_def(key))
}
