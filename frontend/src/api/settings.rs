use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::{HttpTransport, Method};

use super::{segment, ApiClient, ApiError};

/// `/settings`: site-wide key/value configuration.
pub struct SettingsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> SettingsApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        self.client.get("/settings").await
    }

    pub async fn by_category<R: DeserializeOwned>(&self, category: &str) -> Result<R, ApiError> {
        self.client.get(&format!("/settings/category/{}", segment(category))).await
    }

    pub async fn create<B: Serialize, R: DeserializeOwned>(&self, setting: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, "/settings", setting).await
    }

    pub async fn update<B: Serialize, R: DeserializeOwned>(&self, id: u64, setting: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Put, &format!("/settings/{}", id), setting).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, id: u64) -> Result<R, ApiError> {
        self.client.delete(&format!("/settings/{}", id)).await
    }

    /// Creates or updates every setting in one request.
    pub async fn bulk_upsert<B: Serialize, R: DeserializeOwned>(&self, settings: &[B]) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, "/settings/bulk", settings).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::{json, Value};

    use crate::api::models::SettingRecord;
    use crate::api::{ApiClient, ApiError};
    use crate::http::testing::MockTransport;
    use crate::http::Method;

    const BASE: &str = "http://api.test/api/v1";

    #[test]
    fn list_decodes_typed_records() {
        let transport = MockTransport::replying(200, r#"[{"id":3,"key":"site_name","value":"ZielHub"}]"#);
        let client = ApiClient::new(BASE, &transport);
        let settings: Vec<SettingRecord> = block_on(client.settings().list()).unwrap();
        assert_eq!(settings[0].key, "site_name");
        assert_eq!(settings[0].category, "");
        let request = transport.last();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, format!("{}/settings", BASE));
        assert_eq!(request.body, None);
    }

    #[test]
    fn category_is_a_path_segment() {
        let transport = MockTransport::replying(200, "[]");
        let client = ApiClient::new(BASE, &transport);
        let _: Value = block_on(client.settings().by_category("seo & social")).unwrap();
        assert_eq!(transport.last().url, format!("{}/settings/category/seo%20%26%20social", BASE));
    }

    #[test]
    fn writes_carry_json_bodies() {
        let transport = MockTransport::default();
        let client = ApiClient::new(BASE, &transport);
        let setting = json!({"key": "k", "value": "v"});

        let _: Value = block_on(client.settings().create(&setting)).unwrap();
        let _: Value = block_on(client.settings().update(7, &setting)).unwrap();
        let _: Value = block_on(client.settings().delete(7)).unwrap();
        let _: Value = block_on(client.settings().bulk_upsert(&[setting.clone(), setting.clone()])).unwrap();

        let sent = transport.sent();
        let routes: Vec<_> = sent.iter().map(|r| (r.method, r.url.trim_start_matches(BASE).to_string())).collect();
        assert_eq!(
            routes,
            vec![
                (Method::Post, "/settings".to_string()),
                (Method::Put, "/settings/7".to_string()),
                (Method::Delete, "/settings/7".to_string()),
                (Method::Post, "/settings/bulk".to_string()),
            ]
        );
        assert_eq!(sent[2].body, None);
        let bulk: Value = serde_json::from_str(sent[3].body.as_deref().unwrap()).unwrap();
        assert_eq!(bulk.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn server_error_surfaces_status() {
        let transport = MockTransport::replying(500, "boom");
        let client = ApiClient::new(BASE, &transport);
        let result: Result<Value, ApiError> = block_on(client.settings().list());
        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }
}
