use serde::{Deserialize, Serialize};
use std::fmt;

/// Propulsion type of an aircraft model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftPropType {
    #[serde(rename = "Single engine")]
    SingleEngine,
    #[serde(rename = "Multi engine")]
    MultiEngine,
    Glider,
    Helicopter,
    #[serde(rename = "Lighter than air")]
    LighterThanAir,
}

/// Propulsion sub type, constrained by [`AircraftPropType::allowed_sub_types`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftPropSubType {
    Piston,
    #[serde(rename = "Turbo prop")]
    TurboProp,
    #[serde(rename = "Turbo shaft")]
    TurboShaft,
    #[serde(rename = "Turbo jet")]
    TurboJet,
    #[serde(rename = "Turbo fan")]
    TurboFan,
    #[serde(rename = "Ram jet")]
    RamJet,
    Rocket,
    #[serde(rename = "Ground effect")]
    GroundEffect,
    Amphibian,
    #[serde(rename = "Tilt wing")]
    TiltWing,
    #[serde(rename = "Tail sitter")]
    TailSitter,
    #[serde(rename = "Tilt rotor")]
    TiltRotor,
    Glider,
    Parafoil,
    Paraglider,
    #[serde(rename = "Hang glider")]
    HangGlider,
    Baloon,
    Airship,
    Gyrocopter,
    Ornithopter,
    Uav,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftCategory {
    Civilian,
    Military,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftMission {
    Transport,
    Attack,
    Bomber,
    Fighter,
    Recoinessance,
    Patrol,
    Trainer,
    Experimental,
    Mail,
    Cargo,
    Rescue,
    Firefighting,
    Bush,
    Sport,
    Awacs,
    Tanker,
    Recreational,
    Agricultural,
    Research,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftSize {
    #[serde(rename = "Very small")]
    VerySmall,
    Small,
    Medium,
    Large,
    #[serde(rename = "Very large")]
    VeryLarge,
}

impl AircraftPropType {
    pub const ALL: [AircraftPropType; 5] = [
        AircraftPropType::SingleEngine,
        AircraftPropType::MultiEngine,
        AircraftPropType::Glider,
        AircraftPropType::Helicopter,
        AircraftPropType::LighterThanAir,
    ];

    /// Sub types that can be fitted to this propulsion type.
    pub fn allowed_sub_types(self) -> &'static [AircraftPropSubType] {
        use AircraftPropSubType::*;
        match self {
            AircraftPropType::SingleEngine => &[
                Piston,
                TurboJet,
                TurboFan,
                RamJet,
                Rocket,
                GroundEffect,
                Amphibian,
                TiltWing,
                TailSitter,
                TiltRotor,
                Ornithopter,
                Uav,
                Space,
            ],
            AircraftPropType::MultiEngine => &[
                Piston,
                TurboProp,
                TurboJet,
                TurboFan,
                RamJet,
                Rocket,
                GroundEffect,
                Amphibian,
                TiltWing,
                TailSitter,
                TiltRotor,
                Ornithopter,
                Uav,
                Space,
            ],
            AircraftPropType::Helicopter => &[Piston, TurboShaft, Gyrocopter],
            AircraftPropType::Glider => &[Glider, Parafoil, Paraglider, HangGlider],
            AircraftPropType::LighterThanAir => &[Baloon, Airship],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AircraftPropType::SingleEngine => "Single engine",
            AircraftPropType::MultiEngine => "Multi engine",
            AircraftPropType::Glider => "Glider",
            AircraftPropType::Helicopter => "Helicopter",
            AircraftPropType::LighterThanAir => "Lighter than air",
        }
    }
}

impl AircraftPropSubType {
    pub const ALL: [AircraftPropSubType; 22] = [
        AircraftPropSubType::Piston,
        AircraftPropSubType::TurboProp,
        AircraftPropSubType::TurboShaft,
        AircraftPropSubType::TurboJet,
        AircraftPropSubType::TurboFan,
        AircraftPropSubType::RamJet,
        AircraftPropSubType::Rocket,
        AircraftPropSubType::GroundEffect,
        AircraftPropSubType::Amphibian,
        AircraftPropSubType::TiltWing,
        AircraftPropSubType::TailSitter,
        AircraftPropSubType::TiltRotor,
        AircraftPropSubType::Glider,
        AircraftPropSubType::Parafoil,
        AircraftPropSubType::Paraglider,
        AircraftPropSubType::HangGlider,
        AircraftPropSubType::Baloon,
        AircraftPropSubType::Airship,
        AircraftPropSubType::Gyrocopter,
        AircraftPropSubType::Ornithopter,
        AircraftPropSubType::Uav,
        AircraftPropSubType::Space,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AircraftPropSubType::Piston => "Piston",
            AircraftPropSubType::TurboProp => "Turbo prop",
            AircraftPropSubType::TurboShaft => "Turbo shaft",
            AircraftPropSubType::TurboJet => "Turbo jet",
            AircraftPropSubType::TurboFan => "Turbo fan",
            AircraftPropSubType::RamJet => "Ram jet",
            AircraftPropSubType::Rocket => "Rocket",
            AircraftPropSubType::GroundEffect => "Ground effect",
            AircraftPropSubType::Amphibian => "Amphibian",
            AircraftPropSubType::TiltWing => "Tilt wing",
            AircraftPropSubType::TailSitter => "Tail sitter",
            AircraftPropSubType::TiltRotor => "Tilt rotor",
            AircraftPropSubType::Glider => "Glider",
            AircraftPropSubType::Parafoil => "Parafoil",
            AircraftPropSubType::Paraglider => "Paraglider",
            AircraftPropSubType::HangGlider => "Hang glider",
            AircraftPropSubType::Baloon => "Baloon",
            AircraftPropSubType::Airship => "Airship",
            AircraftPropSubType::Gyrocopter => "Gyrocopter",
            AircraftPropSubType::Ornithopter => "Ornithopter",
            AircraftPropSubType::Uav => "Uav",
            AircraftPropSubType::Space => "Space",
        }
    }
}

impl AircraftCategory {
    pub const ALL: [AircraftCategory; 2] = [AircraftCategory::Civilian, AircraftCategory::Military];

    /// Missions an aircraft of this category may fly.
    pub fn allowed_missions(self) -> &'static [AircraftMission] {
        use AircraftMission::*;
        match self {
            AircraftCategory::Civilian => &[
                Transport,
                Trainer,
                Experimental,
                Mail,
                Cargo,
                Rescue,
                Firefighting,
                Bush,
                Sport,
                Recreational,
                Agricultural,
                Research,
            ],
            AircraftCategory::Military => &[
                Attack,
                Bomber,
                Fighter,
                Recoinessance,
                Patrol,
                Trainer,
                Experimental,
                Cargo,
                Rescue,
                Firefighting,
                Awacs,
                Tanker,
                Research,
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AircraftCategory::Civilian => "Civilian",
            AircraftCategory::Military => "Military",
        }
    }
}

impl AircraftMission {
    pub const ALL: [AircraftMission; 19] = [
        AircraftMission::Transport,
        AircraftMission::Attack,
        AircraftMission::Bomber,
        AircraftMission::Fighter,
        AircraftMission::Recoinessance,
        AircraftMission::Patrol,
        AircraftMission::Trainer,
        AircraftMission::Experimental,
        AircraftMission::Mail,
        AircraftMission::Cargo,
        AircraftMission::Rescue,
        AircraftMission::Firefighting,
        AircraftMission::Bush,
        AircraftMission::Sport,
        AircraftMission::Awacs,
        AircraftMission::Tanker,
        AircraftMission::Recreational,
        AircraftMission::Agricultural,
        AircraftMission::Research,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AircraftMission::Transport => "Transport",
            AircraftMission::Attack => "Attack",
            AircraftMission::Bomber => "Bomber",
            AircraftMission::Fighter => "Fighter",
            AircraftMission::Recoinessance => "Recoinessance",
            AircraftMission::Patrol => "Patrol",
            AircraftMission::Trainer => "Trainer",
            AircraftMission::Experimental => "Experimental",
            AircraftMission::Mail => "Mail",
            AircraftMission::Cargo => "Cargo",
            AircraftMission::Rescue => "Rescue",
            AircraftMission::Firefighting => "Firefighting",
            AircraftMission::Bush => "Bush",
            AircraftMission::Sport => "Sport",
            AircraftMission::Awacs => "Awacs",
            AircraftMission::Tanker => "Tanker",
            AircraftMission::Recreational => "Recreational",
            AircraftMission::Agricultural => "Agricultural",
            AircraftMission::Research => "Research",
        }
    }
}

impl AircraftSize {
    pub fn as_str(self) -> &'static str {
        match self {
            AircraftSize::VerySmall => "Very small",
            AircraftSize::Small => "Small",
            AircraftSize::Medium => "Medium",
            AircraftSize::Large => "Large",
            AircraftSize::VeryLarge => "Very large",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    AircraftPropType,
    AircraftPropSubType,
    AircraftCategory,
    AircraftMission,
    AircraftSize
);
