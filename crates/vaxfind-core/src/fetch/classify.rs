//! Classify libcurl errors into transport vs. body-read failures.

use super::FetchError;

/// True for errors raised while the response body was being received.
pub fn is_body_read_error(e: &curl::Error) -> bool {
    e.is_recv_error()
        || e.is_partial_file()
        || e.is_read_error()
        || e.is_write_error()
        || e.is_bad_content_encoding()
}

/// Wrap a failed transfer in the matching [`FetchError`] kind.
pub fn classify_transfer_error(e: curl::Error) -> FetchError {
    if is_body_read_error(&e) {
        FetchError::BodyRead(e)
    } else {
        FetchError::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // libcurl CURLcode values.
    const COULDNT_RESOLVE_HOST: i32 = 6;
    const COULDNT_CONNECT: i32 = 7;
    const PARTIAL_FILE: i32 = 18;
    const WRITE_ERROR: i32 = 23;
    const SSL_CONNECT_ERROR: i32 = 35;
    const RECV_ERROR: i32 = 56;

    fn err(code: i32) -> curl::Error {
        curl::Error::new(code as _)
    }

    #[test]
    fn connection_failures_are_transport() {
        for code in [COULDNT_RESOLVE_HOST, COULDNT_CONNECT, SSL_CONNECT_ERROR] {
            assert!(
                matches!(classify_transfer_error(err(code)), FetchError::Transport(_)),
                "code {} should be transport",
                code
            );
        }
    }

    #[test]
    fn stream_failures_are_body_read() {
        for code in [PARTIAL_FILE, WRITE_ERROR, RECV_ERROR] {
            assert!(
                matches!(classify_transfer_error(err(code)), FetchError::BodyRead(_)),
                "code {} should be body-read",
                code
            );
        }
    }

    #[test]
    fn display_is_underlying_text() {
        let e = err(COULDNT_CONNECT);
        let text = e.to_string();
        assert_eq!(classify_transfer_error(e).to_string(), text);
    }
}
