use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Day of week a meal was served on.
///
/// Variant order is the canonical display order (`Thur`, `Fri`, `Sat`, `Sun`),
/// so sorting by `Day` never falls back to alphabetical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Thur,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 4] = [Day::Thur, Day::Fri, Day::Sat, Day::Sun];

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Thur => "Thur",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Parse a day name case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Food service the bill belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealTime {
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 2] = [MealTime::Lunch, MealTime::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|time| time.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One paid bill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: Sex,
    /// Stored as `Yes`/`No` in the source table.
    #[serde(serialize_with = "ser_yes_no", deserialize_with = "de_yes_no")]
    pub smoker: bool,
    pub day: Day,
    pub time: MealTime,
    pub size: u32,
}

impl Record {
    /// Tip as a fraction of the bill (0.15 == 15%).
    pub fn tip_ratio(&self) -> f64 {
        self.tip / self.total_bill
    }

    pub fn smoker_label(&self) -> &'static str {
        if self.smoker {
            "Yes"
        } else {
            "No"
        }
    }
}

fn ser_yes_no<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

fn de_yes_no<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected Yes or No, got '{other}'"
        ))),
    }
}
