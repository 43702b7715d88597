use httpmock::prelude::*;
use smart_mirror::sources::weather::{OpenWeatherClient, WeatherSource};

const BODY: &str = r#"{
  "weather": [{"id": 721, "main": "Haze", "description": "haze"}],
  "main": {"temp": 27.5, "feels_like": 29.1, "humidity": 78},
  "wind": {"speed": 1.5, "deg": 90},
  "name": "Guwahati"
}"#;

#[test]
fn fetch_sends_location_key_and_units() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET)
            .path("/data/2.5/weather")
            .query_param("q", "Guwahati")
            .query_param("appid", "ow-key")
            .query_param("units", "metric");
        then.status(200)
            .header("content-type", "application/json")
            .body(BODY);
    });

    let client = OpenWeatherClient::with_url(server.url("/data/2.5/weather")).unwrap();
    let snap = client.fetch("Guwahati", "ow-key").unwrap();

    m.assert();
    assert_eq!(snap.temperature, 27.5);
    assert_eq!(snap.description, "Haze");
    assert_eq!(snap.humidity, 78.0);
    assert_eq!(snap.wind_speed, 1.5);
    assert_eq!(
        snap.to_string(),
        "Guwahati: 27.5°C | Haze\nHumidity: 78% | Wind: 1.5 m/s"
    );
}

#[test]
fn unknown_city_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"cod":"404","message":"city not found"}"#);
    });

    let client = OpenWeatherClient::with_url(server.url("/weather")).unwrap();
    assert!(client.fetch("Atlantis", "k").is_err());
}

#[test]
fn body_without_main_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(200).body(r#"{"weather":[{"description":"clear sky"}]}"#);
    });

    let client = OpenWeatherClient::with_url(server.url("/weather")).unwrap();
    let err = client.fetch("Guwahati", "k").unwrap_err();
    assert!(err.to_string().contains("main"));
}

#[test]
fn invalid_json_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = OpenWeatherClient::with_url(server.url("/weather")).unwrap();
    assert!(client.fetch("Guwahati", "k").is_err());
}

#[test]
fn unreachable_host_is_an_error() {
    let client = OpenWeatherClient::with_url("http://127.0.0.1:1/weather").unwrap();
    assert!(client.fetch("Guwahati", "k").is_err());
}
