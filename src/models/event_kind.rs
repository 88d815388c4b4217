use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ClockKind {
    #[serde(rename = "clock_in")]
    In,
    #[serde(rename = "clock_out")]
    Out,
}

impl ClockKind {
    /// Convert enum → store string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ClockKind::In => "clock_in",
            ClockKind::Out => "clock_out",
        }
    }

    /// Convert store string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(ClockKind::In),
            "clock_out" => Some(ClockKind::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, ClockKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, ClockKind::Out)
    }
}
