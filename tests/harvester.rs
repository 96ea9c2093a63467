#[cfg(test)]
mod tests {
    use harvestlog::api::{ApiError, BackendConfig, Harvester};

    fn harvester(url: &str) -> Harvester {
        Harvester::new(&BackendConfig {
            api_url: url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_and_encodes_segments() {
        let backend = harvester("http://localhost:8080/");

        let url = backend.endpoint(&["api", "auth", "logs", "user", "Ravi Kumar"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/api/auth/logs/user/Ravi%20Kumar");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let backend = harvester(" https://example.com/harvester ");

        let url = backend.endpoint(&["api", "auth", "login"]).unwrap();

        assert_eq!(url.as_str(), "https://example.com/harvester/api/auth/login");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(harvester("not a url").endpoint(&["api"]), Err(ApiError::InvalidUrl(_))));
        assert!(matches!(harvester("mailto:ravi@example.com").endpoint(&["api"]), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_reason_prefers_backend_message() {
        let rejected = ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(rejected.reason(), "Invalid credentials");

        let silent = ApiError::Rejected {
            status: 500,
            message: String::new(),
        };
        assert_eq!(silent.reason(), "Backend rejected the request (500): ");

        let decode = ApiError::Decode("expected value".to_string());
        assert_eq!(decode.reason(), "Unexpected response from backend: expected value");
    }

    #[test]
    fn test_client_setup_failure_is_not_a_connection_error() {
        let err = ApiError::ClientSetup("no TLS backend".to_string());
        assert_eq!(err.reason(), "Could not set up the HTTP client: no TLS backend");
        assert!(!err.reason().contains("Unable to connect"));
    }

    #[test]
    fn test_zero_timeout_still_builds_a_client() {
        let backend = Harvester::new(&BackendConfig {
            api_url: "http://localhost:8080".to_string(),
            timeout_secs: 0,
        });
        assert!(backend.is_ok());
    }
}
