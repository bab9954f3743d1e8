use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a player within a league, stable across all
/// documents produced by the platform.
pub type PlayerKey = String;

/// Wire model for the team roster document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterDocument {
    pub team: RosterTeam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterTeam {
    #[serde(rename = "teamKey")]
    pub team_key: String,
    #[serde(default)]
    pub players: Vec<RosterPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPlayer {
    #[serde(rename = "playerKey")]
    pub player_key: PlayerKey,
    pub name: String,
    #[serde(rename = "currentPosition")]
    pub current_position: String,
    #[serde(rename = "eligiblePositions", default)]
    pub eligible_positions: Vec<String>,
    #[serde(default)]
    pub moved: bool,
}

/// Identity fields for one rostered player.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub name: String,
    pub current_position: String,
    pub eligible_positions: Vec<String>,
    pub moved: bool,
}

/// Roster membership in document order with keyed identity lookup.
///
/// Document order is preserved because the unranked "original lineup" in the
/// final report reproduces the roster exactly as the platform returned it.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    order: Vec<PlayerKey>,
    entries: HashMap<PlayerKey, RosterEntry>,
}

impl TeamRoster {
    /// Appends a player, rejecting duplicate keys.
    ///
    /// Returns `false` and leaves the roster unchanged when the key is
    /// already present.
    pub fn insert(&mut self, key: PlayerKey, entry: RosterEntry) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.order.push(key.clone());
        self.entries.insert(key, entry);
        true
    }

    /// Player keys in roster document order.
    pub fn player_keys(&self) -> &[PlayerKey] {
        &self.order
    }

    pub fn get(&self, key: &str) -> Option<&RosterEntry> {
        self.entries.get(key)
    }

    /// Iterates players in roster document order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerKey, &RosterEntry)> {
        self.order
            .iter()
            .map(|key| (key, &self.entries[key]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            current_position: "C".to_string(),
            eligible_positions: vec!["C".to_string()],
            moved: false,
        }
    }

    #[test]
    fn test_roster_document_deserialization() {
        let json = r#"{
            "team": {
                "teamKey": "nhl.l.84.t.3",
                "players": [
                    {
                        "playerKey": "nhl.p.100",
                        "name": "Mikko Koivu",
                        "currentPosition": "C",
                        "eligiblePositions": ["C", "F"],
                        "moved": true
                    },
                    {
                        "playerKey": "nhl.p.101",
                        "name": "Teemu Hartikainen",
                        "currentPosition": "LW"
                    }
                ]
            }
        }"#;

        let doc: RosterDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.team.team_key, "nhl.l.84.t.3");
        assert_eq!(doc.team.players.len(), 2);
        assert!(doc.team.players[0].moved);
        assert_eq!(doc.team.players[0].eligible_positions, vec!["C", "F"]);
        // Defaulted fields
        assert!(!doc.team.players[1].moved);
        assert!(doc.team.players[1].eligible_positions.is_empty());
    }

    #[test]
    fn test_team_roster_preserves_document_order() {
        let mut roster = TeamRoster::default();
        assert!(roster.insert("nhl.p.3".to_string(), entry("Third")));
        assert!(roster.insert("nhl.p.1".to_string(), entry("First")));
        assert!(roster.insert("nhl.p.2".to_string(), entry("Second")));

        let keys: Vec<&str> = roster.player_keys().iter().map(String::as_str).collect();
        assert_eq!(keys, vec!["nhl.p.3", "nhl.p.1", "nhl.p.2"]);

        let names: Vec<&str> = roster.iter().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(names, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_team_roster_rejects_duplicate_key() {
        let mut roster = TeamRoster::default();
        assert!(roster.insert("nhl.p.1".to_string(), entry("First")));
        assert!(!roster.insert("nhl.p.1".to_string(), entry("Duplicate")));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("nhl.p.1").unwrap().name, "First");
    }
}
