use origin_trust::MatchError;

pub fn assert_match(result: Result<bool, MatchError>) {
    match result {
        Ok(true) => {}
        other => panic!("expected a match, got {:?}", other),
    }
}

pub fn assert_no_match(result: Result<bool, MatchError>) {
    match result {
        Ok(false) => {}
        other => panic!("expected no match, got {:?}", other),
    }
}

pub fn assert_invalid_origin(result: Result<bool, MatchError>) {
    match result {
        Err(MatchError::InvalidOrigin(_)) => {}
        other => panic!("expected an invalid origin error, got {:?}", other),
    }
}

pub fn assert_invalid_pattern(result: Result<bool, MatchError>) {
    match result {
        Err(MatchError::InvalidPattern(_)) => {}
        other => panic!("expected an invalid pattern error, got {:?}", other),
    }
}
