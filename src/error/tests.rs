//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod draft_graph_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = DraftGraphError::from(json_error);

        match error {
            DraftGraphError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = DraftGraphError::from(io_error);

        match error {
            DraftGraphError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = DraftGraphError::from(header_error);

        match error {
            DraftGraphError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let error = DraftGraphError::from(parse_error);

        match error {
            DraftGraphError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_invalid_season_message() {
        let error = DraftGraphError::InvalidSeason {
            year: 1900,
            first: 1947,
            last: 9999,
        };
        let message = error.to_string();
        assert!(message.contains("1900"));
        assert!(message.contains("1947"));
    }

    #[test]
    fn test_empty_graph_message_reports_groups() {
        let error = DraftGraphError::EmptyGraph { groups: 7 };
        let message = error.to_string();
        assert!(message.contains("No teammate edges"));
        assert!(message.contains('7'));
    }

    #[test]
    fn test_missing_column_message() {
        let error = DraftGraphError::MissingColumn {
            column: "PLAYER_ID".to_string(),
        };
        assert_eq!(error.to_string(), "Result set is missing column PLAYER_ID");
    }

    #[test]
    fn test_invalid_option_message() {
        let error = DraftGraphError::InvalidOption {
            value: "triple".to_string(),
            expected: "multi, weighted or simple".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value \"triple\", expected multi, weighted or simple"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn failing() -> Result<u16> {
            Err(DraftGraphError::EmptyRoster {
                draft_years: "2018".to_string(),
            })
        }
        assert!(failing().is_err());
    }
}
