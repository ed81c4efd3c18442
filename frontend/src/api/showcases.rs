use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::{HttpTransport, Method};

use super::{segment, with_locale, ApiClient, ApiError};

/// `/showcases`: case studies and their metrics, implementation steps and charts.
pub struct ShowcasesApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> ShowcasesApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list<R: DeserializeOwned>(&self, locale: Option<&str>) -> Result<R, ApiError> {
        self.client.get(&with_locale("/showcases", locale)).await
    }

    pub async fn published<R: DeserializeOwned>(&self, locale: Option<&str>) -> Result<R, ApiError> {
        self.client.get(&with_locale("/showcases/published", locale)).await
    }

    pub async fn by_id<R: DeserializeOwned>(&self, id: u64) -> Result<R, ApiError> {
        self.client.get(&format!("/showcases/{}", id)).await
    }

    pub async fn by_slug<R: DeserializeOwned>(&self, slug: &str) -> Result<R, ApiError> {
        self.client.get(&format!("/showcases/slug/{}", segment(slug))).await
    }

    pub async fn create<B: Serialize, R: DeserializeOwned>(&self, showcase: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, "/showcases", showcase).await
    }

    pub async fn update<B: Serialize, R: DeserializeOwned>(&self, id: u64, showcase: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Put, &format!("/showcases/{}", id), showcase).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, id: u64) -> Result<R, ApiError> {
        self.client.delete(&format!("/showcases/{}", id)).await
    }

    pub async fn add_metric<B: Serialize, R: DeserializeOwned>(&self, id: u64, metric: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, &format!("/showcases/{}/metrics", id), metric).await
    }

    pub async fn add_implementation<B: Serialize, R: DeserializeOwned>(
        &self,
        id: u64,
        implementation: &B,
    ) -> Result<R, ApiError> {
        self.client
            .send_json(Method::Post, &format!("/showcases/{}/implementations", id), implementation)
            .await
    }

    pub async fn add_chart<B: Serialize, R: DeserializeOwned>(&self, id: u64, chart: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, &format!("/showcases/{}/charts", id), chart).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::{json, Value};

    use crate::api::models::{MetricRecord, ShowcaseRecord};
    use crate::api::{ApiClient, ApiError};
    use crate::http::testing::MockTransport;
    use crate::http::Method;

    const BASE: &str = "http://api.test/api/v1";

    fn routes(transport: &MockTransport) -> Vec<(Method, String)> {
        transport
            .sent()
            .into_iter()
            .map(|r| (r.method, r.url.trim_start_matches(BASE).to_string()))
            .collect()
    }

    #[test]
    fn reads() {
        let transport = MockTransport::default();
        let client = ApiClient::new(BASE, &transport);
        let _: Value = block_on(client.showcases().list(None)).unwrap();
        let _: Value = block_on(client.showcases().published(Some("pt"))).unwrap();
        let _: Value = block_on(client.showcases().by_id(12)).unwrap();
        let _: Value = block_on(client.showcases().by_slug("l'occitane")).unwrap();
        assert_eq!(
            routes(&transport),
            vec![
                (Method::Get, "/showcases".to_string()),
                (Method::Get, "/showcases/published?locale=pt".to_string()),
                (Method::Get, "/showcases/12".to_string()),
                (Method::Get, "/showcases/slug/l%27occitane".to_string()),
            ]
        );
    }

    #[test]
    fn writes_and_sub_resources() {
        let transport = MockTransport::default();
        let client = ApiClient::new(BASE, &transport);
        let metric = MetricRecord { label: "Accuracy".into(), value: "92%".into(), change: "+38%".into(), ..Default::default() };

        let _: Value = block_on(client.showcases().create(&json!({"slug": "x"}))).unwrap();
        let _: Value = block_on(client.showcases().update(3, &json!({"slug": "x"}))).unwrap();
        let _: Value = block_on(client.showcases().delete(3)).unwrap();
        let _: Value = block_on(client.showcases().add_metric(3, &metric)).unwrap();
        let _: Value = block_on(client.showcases().add_implementation(3, &json!({"step": "Collect"}))).unwrap();
        let _: Value = block_on(client.showcases().add_chart(3, &json!({"chart_type": "trend"}))).unwrap();

        assert_eq!(
            routes(&transport),
            vec![
                (Method::Post, "/showcases".to_string()),
                (Method::Put, "/showcases/3".to_string()),
                (Method::Delete, "/showcases/3".to_string()),
                (Method::Post, "/showcases/3/metrics".to_string()),
                (Method::Post, "/showcases/3/implementations".to_string()),
                (Method::Post, "/showcases/3/charts".to_string()),
            ]
        );
        let body: Value = serde_json::from_str(transport.sent()[3].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["change"], "+38%");
    }

    #[test]
    fn published_records_become_case_studies() {
        let transport = MockTransport::replying(200, r#"[{"id":1,"slug":"adidas","company":"Adidas","published":true}]"#);
        let client = ApiClient::new(BASE, &transport);
        let records: Vec<ShowcaseRecord> = block_on(client.showcases().published(Some("en"))).unwrap();
        let cases: Vec<_> = records.into_iter().map(ShowcaseRecord::into_case_study).collect();
        assert_eq!(cases[0].company, "Adidas");
    }

    #[test]
    fn missing_showcase_is_a_status_error() {
        let transport = MockTransport::replying(404, r#"{"error":"not found"}"#);
        let client = ApiClient::new(BASE, &transport);
        let result: Result<ShowcaseRecord, ApiError> = block_on(client.showcases().by_slug("nope"));
        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert!(body.contains("not found"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
