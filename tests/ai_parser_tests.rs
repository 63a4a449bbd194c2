#[cfg(test)]
mod tests {
    use chrono::Duration;
    use frostie::ai_parser::RemoteItemParser;
    use frostie::category::Category;
    use frostie::item_parser::{ItemTextParser, TextParser};
    use frostie::parse_errors::ParseError;
    use frostie::parser_config::{AiServiceConfig, ParserConfig, RecoveryConfig};
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const PATH: &str = "/functions/v1/parse-item";

    fn service(server: &ServerGuard) -> AiServiceConfig {
        AiServiceConfig::new(&format!("{}{}", server.url(), PATH))
    }

    fn config_for(server: &ServerGuard) -> ParserConfig {
        ParserConfig {
            ai: Some(service(server)),
            ..ParserConfig::default()
        }
    }

    #[tokio::test]
    async fn test_ai_response_is_used() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::PartialJson(json!({
                "text": "2 8oz salmon fillets",
                "defaultExpirationDays": 30
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "parsedDetails": {
                        "name": "Wild Salmon Fillets",
                        "quantity": 2,
                        "category": "Seafood",
                        "size": "8oz",
                        "expirationDate": "2099-01-15",
                        "tags": ["dinner", "fish"]
                    },
                    "source": "ai"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let config = ParserConfig {
            ai: Some(service(&server).with_api_key("secret")),
            ..ParserConfig::default()
        };
        let parser = ItemTextParser::from_config(&config);
        let item = parser.parse_item_text("2 8oz salmon fillets", 30).await;

        assert_eq!(item.name, "Wild Salmon Fillets");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.category, Category::Seafood);
        assert_eq!(item.size, "8oz");
        assert_eq!(item.expiration_date.to_string(), "2099-01-15");
        assert_eq!(item.tags, vec!["dinner", "fish"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_falls_back_to_regex() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let parser = ItemTextParser::from_config(&config_for(&server));
        let item = parser.parse_item_text("2 bagels #breakfast", 30).await;

        assert_eq!(item.name, "Bagels");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.tags, vec!["breakfast"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_falls_back_to_regex() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{not json")
            .create_async()
            .await;

        let parser = ItemTextParser::from_config(&config_for(&server));
        let item = parser.parse_item_text("Beef good for 2 weeks", 30).await;

        assert_eq!(item.name, "Beef");
        assert_eq!(item.expiration_date, frostie::today() + Duration::days(14));
    }

    #[tokio::test]
    async fn test_remote_errors_are_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"parsedDetails":{"quantity":2}}"#)
            .create_async()
            .await;

        let remote = RemoteItemParser::new(service(&server), RecoveryConfig::default()).unwrap();
        let result = remote.parse("2 bagels", 30).await;

        assert!(matches!(result, Err(ParseError::InvalidResponse(_))));
        assert_eq!(remote.breaker().failure_count(), 1);
    }

    #[tokio::test]
    async fn test_past_ai_date_is_replaced() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "parsedDetails": {
                        "name": "Salmon",
                        "category": "Frozen Fish",
                        "expirationDate": "2000-01-01"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let remote = RemoteItemParser::new(service(&server), RecoveryConfig::default()).unwrap();
        let item = remote.parse("salmon", 30).await.unwrap();

        assert_eq!(item.name, "Salmon");
        assert_eq!(item.category, Category::Other);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.size, "");
        assert!(item.tags.is_empty());
        assert_eq!(item.expiration_date, frostie::today() + Duration::days(76));
    }

    #[tokio::test]
    async fn test_circuit_breaker_skips_failing_service() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(503)
            .expect(2)
            .create_async()
            .await;

        let recovery = RecoveryConfig {
            circuit_breaker_threshold: 2,
            circuit_breaker_reset_secs: 60,
        };
        let remote = RemoteItemParser::new(service(&server), recovery).unwrap();

        assert_eq!(remote.parse("peas", 30).await, Err(ParseError::Status(503)));
        assert_eq!(remote.parse("peas", 30).await, Err(ParseError::Status(503)));
        assert!(remote.breaker().is_open());
        assert!(matches!(
            remote.parse("peas", 30).await,
            Err(ParseError::Unavailable(_))
        ));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_regex() {
        let config = ParserConfig {
            ai: Some(AiServiceConfig::new("http://127.0.0.1:9/parse-item")),
            ..ParserConfig::default()
        };
        let parser = ItemTextParser::from_config(&config);
        let item = parser.parse_item_text("xyzzycustomitem", 12).await;

        assert_eq!(item.name, "Xyzzycustomitem");
        assert_eq!(item.expiration_date, frostie::today() + Duration::days(12));
    }
}
