//! Unit tests for raw ESPN payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_roster_team_deserialization() {
        let raw: RawRosterTeam = serde_json::from_value(json!({
            "teamId": 9,
            "team": { "teamId": 9, "teamAbbrev": "BIG" },
            "slots": [{ "isKeeper": true }, { "isKeeper": false }]
        }))
        .unwrap();

        assert_eq!(raw.team_id, Some(TeamId::new(9)));
        assert_eq!(raw.team.unwrap()["teamAbbrev"], "BIG");
        assert_eq!(raw.slots.unwrap().len(), 2);
    }

    #[test]
    fn test_team_tolerates_missing_fields() {
        let raw: RawTeam = serde_json::from_value(json!({ "teamId": 3 })).unwrap();
        assert_eq!(raw.team_id, Some(TeamId::new(3)));
        assert!(raw.team_location.is_none());
        assert!(raw.record.is_none());
    }

    #[test]
    fn test_team_record_deserialization() {
        let raw: RawTeam = serde_json::from_value(json!({
            "teamId": 1,
            "teamLocation": "Springfield",
            "teamNickname": "Isotopes",
            "record": { "overallWins": 7, "overallLosses": 5, "overallTies": 1 }
        }))
        .unwrap();

        let record = raw.record.unwrap();
        assert_eq!(record.overall_wins, Some(7));
        assert_eq!(record.overall_losses, Some(5));
        assert_eq!(record.overall_ties, Some(1));
    }

    #[test]
    fn test_slot_defaults() {
        let raw: RawSlot = serde_json::from_value(json!({})).unwrap();
        assert!(!raw.is_keeper);
        assert!(!raw.is_locked);
        assert!(raw.slot_category_id.is_none());
    }

    #[test]
    fn test_player_deserialization() {
        let raw: RawPlayer = serde_json::from_value(json!({
            "playerId": 2330,
            "firstName": "Tom",
            "lastName": "Brady",
            "jersey": "12",
            "proTeamId": 17,
            "defaultPositionId": 1,
            "eligibleSlotCategoryIds": [0, 7, 20, 21],
            "percentOwned": 98.4,
            "isDroppable": true
        }))
        .unwrap();

        assert_eq!(raw.player_id, Some(PlayerId::new(2330)));
        assert_eq!(raw.last_name.as_deref(), Some("Brady"));
        assert_eq!(raw.eligible_slot_category_ids, vec![0, 7, 20, 21]);
        assert_eq!(raw.percent_owned, Some(98.4));
        assert!(raw.is_active.is_none());
    }

    #[test]
    fn test_player_mistyped_field_keeps_siblings() {
        let raw: RawPlayer = serde_json::from_value(json!({
            "playerId": 2330,
            "firstName": "Tom",
            "proTeamId": "NE",
            "eligibleSlotCategoryIds": null
        }))
        .unwrap();

        assert_eq!(raw.player_id, Some(PlayerId::new(2330)));
        assert_eq!(raw.first_name.as_deref(), Some("Tom"));
        assert!(raw.pro_team_id.is_none());
        assert!(raw.eligible_slot_category_ids.is_empty());
    }

    #[test]
    fn test_slot_null_keeper_keeps_category() {
        let raw: RawSlot = serde_json::from_value(json!({
            "slotCategoryId": 0,
            "isKeeper": null,
            "isLocked": true
        }))
        .unwrap();

        assert_eq!(raw.slot_category_id, Some(0));
        assert!(!raw.is_keeper);
        assert!(raw.is_locked);
    }

    #[test]
    fn test_roster_team_non_array_slots_keeps_team() {
        let raw: RawRosterTeam = serde_json::from_value(json!({
            "teamId": 9,
            "team": { "teamId": 9, "teamNickname": "Isotopes" },
            "slots": {}
        }))
        .unwrap();

        assert_eq!(raw.team_id, Some(TeamId::new(9)));
        assert_eq!(raw.team.unwrap()["teamNickname"], "Isotopes");
        assert!(raw.slots.is_none());
    }

    #[test]
    fn test_team_mistyped_record_keeps_name() {
        let raw: RawTeam = serde_json::from_value(json!({
            "teamId": "nine",
            "teamLocation": "Springfield",
            "record": [1, 2, 3]
        }))
        .unwrap();

        assert!(raw.team_id.is_none());
        assert_eq!(raw.team_location.as_deref(), Some("Springfield"));
        assert!(raw.record.is_none());
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let result = serde_json::from_value::<RawPlayer>(json!("garbage"));
        assert!(result.is_err());
    }
}
