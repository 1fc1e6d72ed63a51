//! Static demographic-to-places recommendation table.
//!
//! Not derived from review data; the six (age, gender) combinations are
//! the whole table. Label parsing is separate from the lookup so the
//! caller decides what an out-of-table input means.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    Twenties,
    Thirties,
    FortiesPlus,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 3] = [
        AgeBracket::Twenties,
        AgeBracket::Thirties,
        AgeBracket::FortiesPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeBracket::Twenties => "20대",
            AgeBracket::Thirties => "30대",
            AgeBracket::FortiesPlus => "40대 이상",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "남자",
            Gender::Female => "여자",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

/// Ordered recommended places for one demographic cell.
pub fn recommend(age: AgeBracket, gender: Gender) -> &'static [&'static str] {
    match (age, gender) {
        (AgeBracket::Twenties, Gender::Male) => &["대전 스카이로드", "대전아트센터"],
        (AgeBracket::Twenties, Gender::Female) => &["성심당 본점", "으능정이 문화의 거리"],
        (AgeBracket::Thirties, Gender::Male) => &["대전근현대사전시관"],
        (AgeBracket::Thirties, Gender::Female) => &["대전시청"],
        (AgeBracket::FortiesPlus, Gender::Male) => &["성심당 본점"],
        (AgeBracket::FortiesPlus, Gender::Female) => &["성심당 본점", "대전 스카이로드"],
    }
}
