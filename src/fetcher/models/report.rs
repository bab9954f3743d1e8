use super::player::{PlayerRecord, SimplePlayer};
use super::roster::PlayerKey;
use super::settings::StatCategoryMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The response payload assembled by the pipeline orchestrator: the merged
/// player map, the roster-order lineup, one optimized lineup per ranking
/// criterion, and the resolved stat-category definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    #[serde(rename = "playerInfoMap")]
    pub player_info_map: BTreeMap<PlayerKey, PlayerRecord>,
    #[serde(rename = "originalLineup")]
    pub original_lineup: Vec<SimplePlayer>,
    #[serde(rename = "optimizedLineups")]
    pub optimized_lineups: BTreeMap<String, Vec<SimplePlayer>>,
    #[serde(rename = "statIDMap")]
    pub stat_id_map: StatCategoryMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_expected_field_names() {
        let report = RosterReport {
            player_info_map: BTreeMap::new(),
            original_lineup: vec![],
            optimized_lineups: BTreeMap::new(),
            stat_id_map: StatCategoryMap::new(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"playerInfoMap\""));
        assert!(json.contains("\"originalLineup\""));
        assert!(json.contains("\"optimizedLineups\""));
        assert!(json.contains("\"statIDMap\""));
    }
}
