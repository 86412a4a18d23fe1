use crate::types::LabelValue;
use crate::Error;
use std::fmt;

/// The two classes a dataset instance can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Growth = 0,
    Recession = 1,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Growth, Label::Recession];

    /// Classifies a raw label value, failing with `InvalidLabelError` for anything other
    /// than `0` or `1`.
    pub fn from_value(value: LabelValue) -> Result<Self, Error> {
        if value == 0.0 {
            Ok(Label::Growth)
        } else if value == 1.0 {
            Ok(Label::Recession)
        } else {
            Err(Error::InvalidLabelError(value))
        }
    }

    pub fn value(self) -> LabelValue {
        self.index() as LabelValue
    }

    /// Row/column index of this class in a `CostMatrix`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Growth => write!(f, "Growth"),
            Label::Recession => write!(f, "Recession"),
        }
    }
}

/// Number of instances per class in a label sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub growth: usize,
    pub recession: usize,
}

impl ClassCounts {
    pub fn total(&self) -> usize {
        self.growth + self.recession
    }

    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Growth => self.growth,
            Label::Recession => self.recession,
        }
    }

    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Growth => self.growth += 1,
            Label::Recession => self.recession += 1,
        }
    }
}
