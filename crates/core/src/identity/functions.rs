use super::IdentityError;

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively (`Bearer`, `bearer`). An empty
/// token is rejected.
pub fn bearer_token(header: Option<&str>) -> Result<&str, IdentityError> {
    let header = header.ok_or(IdentityError::MissingHeader)?.trim();

    let (scheme, token) = header.split_once(' ').ok_or(IdentityError::NotBearer)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(IdentityError::NotBearer);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(IdentityError::InvalidToken("empty token".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracts_token() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(bearer_token(Some("bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(None), Err(IdentityError::MissingHeader));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert_eq!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(IdentityError::NotBearer)
        );
        assert_eq!(bearer_token(Some("abc.def.ghi")), Err(IdentityError::NotBearer));
    }

    #[test]
    fn test_bearer_token_empty() {
        assert!(matches!(
            bearer_token(Some("Bearer    ")),
            Err(IdentityError::NotBearer) | Err(IdentityError::InvalidToken(_))
        ));
    }
}
