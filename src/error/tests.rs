//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod espn_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let espn_error = EspnError::from(json_error);

        match espn_error {
            EspnError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let espn_error = EspnError::from(header_error);

        match espn_error {
            EspnError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let espn_error = EspnError::from(parse_error);

        match espn_error {
            EspnError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = EspnError::MissingLeagueId {
            env_var: "ESPN_FFL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("ESPN_FFL_LEAGUE_ID"));
    }

    #[test]
    fn test_missing_param_error_names_model_and_field() {
        let error = EspnError::MissingParam {
            model: "Roster",
            method: "static read",
            field: "seasonId",
        };

        assert_eq!(
            error.to_string(),
            "Roster: static read: cannot read without seasonId"
        );
    }

    #[test]
    fn test_no_data_error() {
        let error = EspnError::NoData;
        assert_eq!(error.to_string(), "ESPN API returned no data");
    }

    #[test]
    fn test_error_debug_format() {
        let error = EspnError::NoData;
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("NoData"));
    }
}
