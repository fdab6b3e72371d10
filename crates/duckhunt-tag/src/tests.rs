#[cfg(test)]
mod tests {
    use duckhunt_core::commands::PlayerCommand;
    use duckhunt_core::constants::{NO_SCAN_PLACEHOLDER, TEXT_RECORD_LANGUAGE};

    use crate::decoder::{decode, decode_record, DecodeError};
    use crate::reader::{scan_text, ReaderError, ScanOutcome, TagReader};
    use crate::record::{encode_text_record, extract_text, RecordError};

    /// Reader that hands out a fixed sequence of results.
    struct ScriptedReader {
        results: Vec<Result<Vec<u8>, ReaderError>>,
    }

    impl TagReader for ScriptedReader {
        fn scan(&mut self) -> Result<Vec<u8>, ReaderError> {
            if self.results.is_empty() {
                return Err(ReaderError::Timeout);
            }
            self.results.remove(0)
        }
    }

    // ---- decode ----

    #[test]
    fn test_decode_positive_count() {
        assert_eq!(decode("5"), Ok(5));
        assert_eq!(decode("12"), Ok(12));
        assert_eq!(decode("+7"), Ok(7));
    }

    #[test]
    fn test_decode_is_permissive_about_sign() {
        assert_eq!(decode("0"), Ok(0));
        assert_eq!(decode("-4"), Ok(-4));
    }

    #[test]
    fn test_decode_empty_is_not_a_number() {
        assert!(matches!(decode(""), Err(DecodeError::NotANumber { .. })));
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        for text in ["abc", "5 bullets", " 5", "5\n", "1.5", "0x10", "-"] {
            assert!(
                matches!(decode(text), Err(DecodeError::NotANumber { .. })),
                "{text:?} should not decode"
            );
        }
    }

    #[test]
    fn test_decode_rejects_placeholder() {
        assert_eq!(
            decode(NO_SCAN_PLACEHOLDER),
            Err(DecodeError::NotANumber {
                text: NO_SCAN_PLACEHOLDER.to_string()
            })
        );
    }

    #[test]
    fn test_decode_out_of_range() {
        assert!(matches!(
            decode("99999999999999999999"),
            Err(DecodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            decode("-99999999999999999999"),
            Err(DecodeError::OutOfRange { .. })
        ));
    }

    // ---- records ----

    #[test]
    fn test_extract_text_skips_three_byte_header() {
        assert_eq!(extract_text(b"\x02en5").unwrap(), "5");
        assert_eq!(extract_text(b"abc123").unwrap(), "123");
        assert_eq!(extract_text(b"\x02en").unwrap(), "");
    }

    #[test]
    fn test_extract_text_truncated() {
        assert_eq!(extract_text(b"\x02e"), Err(RecordError::Truncated { len: 2 }));
        assert_eq!(extract_text(b""), Err(RecordError::Truncated { len: 0 }));
    }

    #[test]
    fn test_encode_text_record_layout() {
        let record = encode_text_record("10", TEXT_RECORD_LANGUAGE);
        assert_eq!(record, b"\x02en10".to_vec());
        assert_eq!(extract_text(&record).unwrap(), "10");
    }

    #[test]
    fn test_encode_pads_short_language() {
        let record = encode_text_record("3", "x");
        assert_eq!(record.len(), 4);
        assert_eq!(extract_text(&record).unwrap(), "3");
    }

    #[test]
    fn test_decode_record() {
        assert_eq!(decode_record(b"\x02en5"), Ok(5));
        assert!(matches!(
            decode_record(b"\x02en"),
            Err(DecodeError::NotANumber { .. })
        ));
        assert_eq!(
            decode_record(b"\x02"),
            Err(DecodeError::Record(RecordError::Truncated { len: 1 }))
        );
    }

    // ---- reader seam ----

    #[test]
    fn test_scan_text_delivers_payload_command() {
        let mut reader = ScriptedReader {
            results: vec![Ok(encode_text_record("8", "en"))],
        };
        let outcome = scan_text(&mut reader);
        assert_eq!(outcome, ScanOutcome::Text("8".into()));
        assert_eq!(
            outcome.into_command(),
            PlayerCommand::TagScanned {
                payload: "8".into()
            }
        );
    }

    #[test]
    fn test_scan_text_reader_failures() {
        let mut reader = ScriptedReader {
            results: vec![
                Err(ReaderError::Cancelled),
                Ok(vec![0x02]),
                Err(ReaderError::Unavailable("no antenna".into())),
            ],
        };

        assert_eq!(
            scan_text(&mut reader),
            ScanOutcome::Failed("scan cancelled".into())
        );
        assert!(matches!(scan_text(&mut reader), ScanOutcome::Failed(_)));
        assert_eq!(
            scan_text(&mut reader).into_command(),
            PlayerCommand::TagScanFailed {
                reason: "tag reader unavailable: no antenna".into()
            }
        );
        // Script exhausted: timeout.
        assert_eq!(
            scan_text(&mut reader),
            ScanOutcome::Failed("scan timed out".into())
        );
    }
}
