use pokemon_service::{AppEnv, AppError, PokemonConfig, build_service};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ONE_BULBASAUR: &str =
    r#"{"results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]}"#;

fn config_for(server: &MockServer, timeout: u32) -> PokemonConfig {
    PokemonConfig {
        api_url: format!("{}/api/v2/pokemon", server.uri()),
        timeout,
    }
}

#[tokio::test]
async fn test_mode_never_touches_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONE_BULBASAUR))
        .expect(0)
        .mount(&mock_server)
        .await;

    for timeout in [0, 1, 30] {
        let service = build_service(AppEnv::Test, &config_for(&mock_server, timeout));
        let list = service.get_all_pokemons().await.unwrap();
        assert_eq!(list.len(), 20);
    }
}

#[tokio::test]
async fn test_develop_and_production_hit_configured_url() {
    for env in [AppEnv::Develop, AppEnv::Production] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/pokemon"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ONE_BULBASAUR))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = build_service(env, &config_for(&mock_server, 5));
        let names = service.pokemon_names().await.unwrap();
        assert_eq!(names, vec!["bulbasaur"]);
    }
}

#[tokio::test]
async fn test_configured_timeout_is_applied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ONE_BULBASAUR)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let service = build_service(AppEnv::Develop, &config_for(&mock_server, 1));
    let err = service.get_all_pokemons().await.unwrap_err();

    assert!(matches!(
        err,
        AppError::RemoteServiceError { status: None, .. }
    ));
}

#[tokio::test]
async fn test_server_errors_surface_through_the_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = build_service(AppEnv::Production, &config_for(&mock_server, 5));
    let err = service.get_all_pokemons().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
}
