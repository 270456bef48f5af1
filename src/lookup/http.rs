use super::{LookupFuture, PostalCodeResolver, ResolvedFields};
use crate::error::Error;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use url::Url;

/// Postal code service reached over HTTP.
///
/// Looks up `GET {base}/{COUNTRY}/{postal code}`. A `404` means the postal code
/// is unknown; a successful answer is a JSON object whose string members are
/// field values, e.g. `{"city": "Madrid", "state": "Madrid"}`.
#[derive(Debug, Clone)]
pub struct HttpResolver {
    http_client: Client,
    base: Url,
}

impl HttpResolver {
    /// Errors if `base` is not `https`.
    pub fn new(base: Url) -> Result<Self, Error> {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(http_client: Client, base: Url) -> Result<Self, Error> {
        if base.scheme() != "https" {
            return Err(Error::Insecure(base));
        }
        Self::insecure(http_client, base)
    }

    /// Accepts any scheme, for local services.
    pub fn insecure(http_client: Client, base: Url) -> Result<Self, Error> {
        if base.cannot_be_a_base() {
            return Err(Error::CannotBeABase);
        }
        Ok(Self { http_client, base })
    }

    pub fn lookup_url(&self, country: &str, postal_code: &str) -> Result<Url, Error> {
        let country = country.trim().to_ascii_uppercase();
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::CannotBeABase)?
            .pop_if_empty()
            .extend(&[country.as_str(), postal_code]);
        Ok(url)
    }

    async fn fetch(&self, country: &str, postal_code: &str) -> Result<Option<ResolvedFields>, Error> {
        let url = self.lookup_url(country, postal_code)?;
        debug!("postal code lookup: {}", url);
        let resp = self.http_client.get(url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }
        let body: Map<String, Value> = resp.json().await?;
        Ok(Some(fields_from_json(body)))
    }
}

impl PostalCodeResolver for HttpResolver {
    fn lookup<'a>(&'a self, country: &'a str, postal_code: &'a str) -> LookupFuture<'a> {
        Box::pin(self.fetch(country, postal_code))
    }
}

fn fields_from_json(body: Map<String, Value>) -> ResolvedFields {
    body.into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(value) => Some((name, value)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers `/ESP/28001` with a JSON body, `/ESP/99999` with `404` and
    /// anything else with `503`.
    async fn postal_code_service() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let mut read = 0;
                    while read < buf.len() {
                        let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        read += n;
                        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    let request = String::from_utf8_lossy(&buf[..read]).to_string();
                    let path = request.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = match path {
                        "/ESP/28001" => (
                            "200 OK",
                            r#"{"city": "Madrid", "state": "Madrid", "reliable": true}"#,
                        ),
                        "/ESP/99999" => ("404 Not Found", ""),
                        _ => ("503 Service Unavailable", ""),
                    };
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        Url::parse(&format!("http://{}", addr)).unwrap()
    }

    fn local_resolver(base: Url) -> HttpResolver {
        let http_client = Client::builder().no_proxy().build().unwrap();
        HttpResolver::insecure(http_client, base).unwrap()
    }

    #[tokio::test]
    async fn lookup_found() {
        let resolver = local_resolver(postal_code_service().await);
        let fields = resolver.lookup("esp", "28001").await.unwrap().unwrap();
        assert_eq!(2, fields.len());
        assert_eq!(Some("Madrid"), fields.get("city").map(String::as_str));
        assert_eq!(Some("Madrid"), fields.get("state").map(String::as_str));
    }

    #[tokio::test]
    async fn lookup_not_found() {
        let resolver = local_resolver(postal_code_service().await);
        assert_eq!(None, resolver.lookup("ESP", "99999").await.unwrap());
    }

    #[tokio::test]
    async fn lookup_unexpected_status() {
        let resolver = local_resolver(postal_code_service().await);
        assert!(matches!(
            resolver.lookup("ESP", "00000").await,
            Err(Error::UnexpectedStatus(503))
        ));
    }

    fn resolver(base: &str) -> HttpResolver {
        HttpResolver::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn lookup_url() {
        let resolver = resolver("https://postal.example.com/api/v1");
        assert_eq!(
            "https://postal.example.com/api/v1/ESP/28001",
            resolver.lookup_url("esp", "28001").unwrap().as_str()
        );
    }

    #[test]
    fn lookup_url_with_trailing_slash() {
        let resolver = resolver("https://postal.example.com/api/");
        assert_eq!(
            "https://postal.example.com/api/BRA/01310-100",
            resolver.lookup_url("BRA", "01310-100").unwrap().as_str()
        );
    }

    #[test]
    fn postal_code_is_escaped() {
        let resolver = resolver("https://postal.example.com");
        assert_eq!(
            "https://postal.example.com/GBR/SW1A%201AA",
            resolver.lookup_url("GBR", "SW1A 1AA").unwrap().as_str()
        );
    }

    #[test]
    fn plain_http_is_rejected() {
        let result = HttpResolver::new(Url::parse("http://postal.example.com").unwrap());
        assert!(matches!(result, Err(Error::Insecure(_))));

        let local = HttpResolver::insecure(Client::new(), Url::parse("http://localhost:8080").unwrap());
        assert!(local.is_ok());
    }

    #[test]
    fn only_string_members_become_fields() {
        let body: Map<String, Value> = serde_json::from_str(
            r#"{"city": "Madrid", "state": "Madrid", "geoCoordinates": [40.4, -3.7], "reliable": true}"#,
        )
        .unwrap();
        let fields = fields_from_json(body);
        assert_eq!(2, fields.len());
        assert_eq!(Some("Madrid"), fields.get("city").map(String::as_str));
    }
}
