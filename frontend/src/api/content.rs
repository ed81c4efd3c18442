use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::{HttpTransport, Method};

use super::{segment, with_locale, ApiClient, ApiError};

/// Locale used for section lookups when the caller names none.
pub const DEFAULT_SECTION_LOCALE: &str = "pt";

/// `/content`: translatable copy blocks keyed by section.
pub struct ContentApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> ContentApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list<R: DeserializeOwned>(&self, locale: Option<&str>) -> Result<R, ApiError> {
        self.client.get(&with_locale("/content", locale)).await
    }

    pub async fn by_section<R: DeserializeOwned>(&self, section: &str, locale: Option<&str>) -> Result<R, ApiError> {
        let path = format!("/content/section/{}", segment(section));
        self.client
            .get(&with_locale(&path, Some(locale.unwrap_or(DEFAULT_SECTION_LOCALE))))
            .await
    }

    pub async fn create<B: Serialize, R: DeserializeOwned>(&self, content: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, "/content", content).await
    }

    pub async fn update<B: Serialize, R: DeserializeOwned>(&self, id: u64, content: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Put, &format!("/content/{}", id), content).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, id: u64) -> Result<R, ApiError> {
        self.client.delete(&format!("/content/{}", id)).await
    }

    pub async fn bulk_upsert<B: Serialize, R: DeserializeOwned>(&self, contents: &[B]) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, "/content/bulk", contents).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::{json, Value};

    use crate::api::models::ContentRecord;
    use crate::api::ApiClient;
    use crate::http::testing::MockTransport;
    use crate::http::Method;

    const BASE: &str = "http://api.test/api/v1";

    #[test]
    fn list_with_and_without_locale() {
        let transport = MockTransport::default();
        let client = ApiClient::new(BASE, &transport);
        let _: Value = block_on(client.content().list(None)).unwrap();
        let _: Value = block_on(client.content().list(Some("en"))).unwrap();
        let urls: Vec<_> = transport.sent().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec![format!("{}/content", BASE), format!("{}/content?locale=en", BASE)]);
    }

    #[test]
    fn section_lookup_always_names_a_locale() {
        let transport = MockTransport::replying(200, r#"[{"id":1,"section":"hero","key":"title","value":"Oi"}]"#);
        transport.push(Ok(crate::http::HttpResponse { status: 200, body: "[]".into() }));
        let client = ApiClient::new(BASE, &transport);

        let rows: Vec<ContentRecord> = block_on(client.content().by_section("hero", None)).unwrap();
        assert_eq!(rows[0].value, "Oi");
        let _: Vec<ContentRecord> = block_on(client.content().by_section("hero", Some("en"))).unwrap();

        let urls: Vec<_> = transport.sent().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{}/content/section/hero?locale=pt", BASE),
                format!("{}/content/section/hero?locale=en", BASE),
            ]
        );
    }

    #[test]
    fn writes_hit_the_content_routes() {
        let transport = MockTransport::default();
        let client = ApiClient::new(BASE, &transport);
        let block = json!({"section": "hero", "key": "title", "locale": "en", "value": "Hi"});

        let _: Value = block_on(client.content().create(&block)).unwrap();
        let _: Value = block_on(client.content().update(4, &block)).unwrap();
        let _: Value = block_on(client.content().delete(4)).unwrap();
        let _: Value = block_on(client.content().bulk_upsert(&[block.clone()])).unwrap();

        let routes: Vec<_> = transport
            .sent()
            .into_iter()
            .map(|r| (r.method, r.url.trim_start_matches(BASE).to_string()))
            .collect();
        assert_eq!(
            routes,
            vec![
                (Method::Post, "/content".to_string()),
                (Method::Put, "/content/4".to_string()),
                (Method::Delete, "/content/4".to_string()),
                (Method::Post, "/content/bulk".to_string()),
            ]
        );
    }
}
