use city_info_core::{ClientSettings, Credential, LocationClient, LocationSource, LookupError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const SUMMARY_PATH: &str = "/api/rest_v1/page/summary";
const WEATHER_PATH: &str = "/data/2.5/weather";

fn client_for(server: &MockServer, key: &str) -> LocationClient {
    let settings = ClientSettings {
        summary_base_url: format!("{}{SUMMARY_PATH}", server.uri()),
        weather_url: format!("{}{WEATHER_PATH}", server.uri()),
        ..ClientSettings::default()
    };
    LocationClient::new(Credential::new(key).unwrap(), &settings).unwrap()
}

#[tokio::test]
async fn summary_extract_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SUMMARY_PATH}/New_York")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "standard",
            "extract": "New York is a major city in the USA."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "KEY");
    let summary = client.fetch_summary("New_York").await;

    assert_eq!(summary, Ok("New York is a major city in the USA.".to_string()));
}

#[tokio::test]
async fn summary_name_is_path_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SUMMARY_PATH}/S%C3%A3o_Paulo")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "extract": "São Paulo is the most populous city in Brazil."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "KEY");
    let summary = client.fetch_summary("São_Paulo").await.unwrap();

    assert!(summary.contains("São Paulo"));
}

#[tokio::test]
async fn summary_statuses_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SUMMARY_PATH}/asdasdsadas")))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>missing</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{SUMMARY_PATH}/TestCity1")))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Something went wrong."})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{SUMMARY_PATH}/Orlando")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "disambiguation",
            "extract": "Orlando most commonly refers to:"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "KEY");

    assert_eq!(
        client.fetch_summary("asdasdsadas").await,
        Err(LookupError::CityNotFound)
    );
    assert_eq!(
        client.fetch_summary("TestCity1").await.unwrap_err().to_string(),
        "Unexpected error: Something went wrong."
    );
    assert_eq!(
        client.fetch_summary("Orlando").await,
        Err(LookupError::Ambiguous)
    );
}

#[tokio::test]
async fn temperature_sends_key_and_metric_units() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "tokyo"))
        .and(query_param("appid", "SECRET"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "main": {"temp": 26.5},
            "sys": {"country": "JP"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "SECRET");

    assert_eq!(client.fetch_temperature("tokyo").await, Ok(26.5));
}

#[tokio::test]
async fn temperature_statuses_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "zagreb"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "asdasdsadas"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, "INVALID_KEY");

    assert_eq!(
        client.fetch_temperature("zagreb").await,
        Err(LookupError::InvalidApiKey)
    );
    assert_eq!(
        client
            .fetch_temperature("asdasdsadas")
            .await
            .unwrap_err()
            .to_string(),
        "asdasdsadas is not recognized as a city."
    );
}

#[tokio::test]
async fn unreachable_service_is_fetch_error() {
    let settings = ClientSettings {
        summary_base_url: "http://127.0.0.1:1/summary".into(),
        weather_url: "http://127.0.0.1:1/weather".into(),
        ..ClientSettings::default()
    };
    let client = LocationClient::new(Credential::new("KEY").unwrap(), &settings).unwrap();

    let summary = client.fetch_summary("London").await.unwrap_err();
    assert!(matches!(summary, LookupError::SummaryFetch(_)));

    let temperature = client.fetch_temperature("London").await.unwrap_err();
    assert!(matches!(temperature, LookupError::WeatherFetch(_)));
    assert!(!temperature.to_string().contains("KEY"));
}
