/*!
Postal code lookup.

The form never awaits anything itself. Editing the lookup field hands back a
[`LookupRequest`]; the caller runs it through [`resolve`] with any
[`PostalCodeResolver`] and feeds the [`LookupResponse`] to
[`AddressFormState::apply_lookup`](crate::AddressFormState::apply_lookup).
Each request carries the generation it was issued with, so a response that
arrives after a newer edit or a country change is recognized and dropped.
*/
mod http;

pub use http::HttpResolver;

use crate::{error::Error, LookupOptions};
use std::{collections::HashMap, future::Future, pin::Pin};

/// Fields derived from a postal code, keyed by field name.
pub type ResolvedFields = HashMap<String, String>;

/// Future returned by [`PostalCodeResolver::lookup`].
pub type LookupFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<ResolvedFields>, Error>> + Send + 'a>>;

/// Service deriving address fields from a postal code.
pub trait PostalCodeResolver {
    /// `Ok(Some(fields))` when the postal code is known, `Ok(None)` when it is
    /// not, `Err` when the service could not be asked.
    fn lookup<'a>(&'a self, country: &'a str, postal_code: &'a str) -> LookupFuture<'a>;
}

/// A lookup the form is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub country: String,
    pub postal_code: String,
    pub generation: u64,
}

impl LookupRequest {
    pub fn respond(&self, outcome: LookupOutcome) -> LookupResponse {
        LookupResponse {
            generation: self.generation,
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(ResolvedFields),
    NotFound,
    TimedOut,
}

/// Outcome of a lookup, tagged with the generation of its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub generation: u64,
    pub outcome: LookupOutcome,
}

/// Runs `request` against `resolver`, giving up after `options.timeout`.
///
/// A resolver that fails to answer, by error or by running out of time, is
/// reported as [`LookupOutcome::TimedOut`].
pub async fn resolve<R>(
    resolver: &R,
    request: &LookupRequest,
    options: &LookupOptions,
) -> LookupResponse
where
    R: PostalCodeResolver + ?Sized,
{
    let lookup = resolver.lookup(&request.country, &request.postal_code);
    let outcome = match tokio::time::timeout(options.timeout, lookup).await {
        Ok(Ok(Some(fields))) => LookupOutcome::Found(fields),
        Ok(Ok(None)) => LookupOutcome::NotFound,
        Ok(Err(err)) => {
            warn!(
                "postal code lookup {} {} failed: {}",
                request.country, request.postal_code, err
            );
            LookupOutcome::TimedOut
        }
        Err(_) => {
            debug!(
                "postal code lookup {} {} timed out after {:?}",
                request.country, request.postal_code, options.timeout
            );
            LookupOutcome::TimedOut
        }
    };
    request.respond(outcome)
}

/// Resolver answering from an in-memory table keyed by country and postal
/// code. Useful offline and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<(String, String), ResolvedFields>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, K, V>(mut self, country: &str, postal_code: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.entries.insert(
            (country.to_ascii_uppercase(), postal_code.to_string()),
            fields,
        );
        self
    }
}

impl PostalCodeResolver for StaticResolver {
    fn lookup<'a>(&'a self, country: &'a str, postal_code: &'a str) -> LookupFuture<'a> {
        let found = self
            .entries
            .get(&(country.to_ascii_uppercase(), postal_code.to_string()))
            .cloned();
        Box::pin(async move { Ok::<_, Error>(found) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Slow;

    impl PostalCodeResolver for Slow {
        fn lookup<'a>(&'a self, _: &'a str, _: &'a str) -> LookupFuture<'a> {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<Option<ResolvedFields>, Error>(None)
            })
        }
    }

    struct Broken;

    impl PostalCodeResolver for Broken {
        fn lookup<'a>(&'a self, _: &'a str, _: &'a str) -> LookupFuture<'a> {
            Box::pin(async { Err::<Option<ResolvedFields>, _>(Error::UnexpectedStatus(503)) })
        }
    }

    fn request(postal_code: &str, generation: u64) -> LookupRequest {
        LookupRequest {
            country: "ESP".to_string(),
            postal_code: postal_code.to_string(),
            generation,
        }
    }

    fn madrid() -> StaticResolver {
        StaticResolver::new().with("ESP", "28001", [("city", "Madrid"), ("state", "Madrid")])
    }

    #[tokio::test]
    async fn found() {
        let response = resolve(&madrid(), &request("28001", 4), &LookupOptions::default()).await;
        assert_eq!(4, response.generation);
        match response.outcome {
            LookupOutcome::Found(fields) => {
                assert_eq!(Some("Madrid"), fields.get("city").map(String::as_str));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn not_found() {
        let response = resolve(&madrid(), &request("99999", 1), &LookupOptions::default()).await;
        assert_eq!(LookupOutcome::NotFound, response.outcome);
    }

    #[tokio::test]
    async fn slow_resolver_times_out() {
        let options = LookupOptions {
            timeout: Duration::from_millis(10),
        };
        let response = resolve(&Slow, &request("28001", 2), &options).await;
        assert_eq!(request("28001", 2).respond(LookupOutcome::TimedOut), response);
    }

    #[tokio::test]
    async fn resolver_error_counts_as_timeout() {
        let response = resolve(&Broken, &request("28001", 3), &LookupOptions::default()).await;
        assert_eq!(LookupOutcome::TimedOut, response.outcome);
    }

    #[tokio::test]
    async fn works_through_trait_objects() {
        let resolver: Box<dyn PostalCodeResolver + Send + Sync> = Box::new(madrid());
        let response = resolve(&*resolver, &request("28001", 1), &LookupOptions::default()).await;
        assert!(matches!(response.outcome, LookupOutcome::Found(_)));
    }
}
