use std::fmt::Display;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WashType {
    Foam,
    #[default]
    Normal,
}

impl Display for WashType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wash_type = match self {
            WashType::Foam => "foam",
            WashType::Normal => "normal",
        };
        write!(f, "{}", wash_type)
    }
}

impl FromStr for WashType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "foam" => Ok(WashType::Foam),
            "normal" => Ok(WashType::Normal),
            other => Err(anyhow!("unknown wash type: {}", other)),
        }
    }
}
