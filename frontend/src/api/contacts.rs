use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::{HttpTransport, Method};

use super::{ApiClient, ApiError};

/// `/contacts`: leads stored by the backend.
pub struct ContactsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> ContactsApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        self.client.get("/contacts").await
    }

    pub async fn unread<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        self.client.get("/contacts/unread").await
    }

    pub async fn by_id<R: DeserializeOwned>(&self, id: u64) -> Result<R, ApiError> {
        self.client.get(&format!("/contacts/{}", id)).await
    }

    /// Contacts received between `start` and `end`, both inclusive.
    pub async fn by_date_range<R: DeserializeOwned>(&self, start: NaiveDate, end: NaiveDate) -> Result<R, ApiError> {
        self.client
            .get(&format!(
                "/contacts/range?start={}&end={}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d"),
            ))
            .await
    }

    pub async fn create<B: Serialize, R: DeserializeOwned>(&self, contact: &B) -> Result<R, ApiError> {
        self.client.send_json(Method::Post, "/contacts", contact).await
    }

    pub async fn mark_as_read<R: DeserializeOwned>(&self, id: u64) -> Result<R, ApiError> {
        self.client.patch(&format!("/contacts/{}/read", id)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, id: u64) -> Result<R, ApiError> {
        self.client.delete(&format!("/contacts/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    use crate::api::models::ContactRecord;
    use crate::api::{ApiClient, ApiError};
    use crate::http::testing::MockTransport;
    use crate::http::{Method, TransportError};

    const BASE: &str = "http://api.test/api/v1";

    #[test]
    fn every_contact_route() {
        let transport = MockTransport::default();
        let client = ApiClient::new(BASE, &transport);
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

        let _: Value = block_on(client.contacts().list()).unwrap();
        let _: Value = block_on(client.contacts().unread()).unwrap();
        let _: Value = block_on(client.contacts().by_id(9)).unwrap();
        let _: Value = block_on(client.contacts().by_date_range(start, end)).unwrap();
        let _: Value = block_on(client.contacts().create(&json!({"name": "Ana"}))).unwrap();
        let _: Value = block_on(client.contacts().mark_as_read(9)).unwrap();
        let _: Value = block_on(client.contacts().delete(9)).unwrap();

        let sent = transport.sent();
        let routes: Vec<_> = sent
            .iter()
            .map(|r| (r.method, r.url.trim_start_matches(BASE).to_string()))
            .collect();
        assert_eq!(
            routes,
            vec![
                (Method::Get, "/contacts".to_string()),
                (Method::Get, "/contacts/unread".to_string()),
                (Method::Get, "/contacts/9".to_string()),
                (Method::Get, "/contacts/range?start=2026-01-05&end=2026-02-01".to_string()),
                (Method::Post, "/contacts".to_string()),
                (Method::Patch, "/contacts/9/read".to_string()),
                (Method::Delete, "/contacts/9".to_string()),
            ]
        );
        assert_eq!(sent[5].body, None);
        assert_eq!(sent[4].body.as_deref(), Some(r#"{"name":"Ana"}"#));
    }

    #[test]
    fn unread_decodes_records() {
        let transport = MockTransport::replying(
            200,
            r#"[{"id":2,"name":"Ana","company":"Acme","revenue":"$1M - $5M","read":false}]"#,
        );
        let client = ApiClient::new(BASE, &transport);
        let contacts: Vec<ContactRecord> = block_on(client.contacts().unread()).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].revenue, "$1M - $5M");
        assert!(!contacts[0].read);
    }

    #[test]
    fn transport_failure_is_reported_as_such() {
        let transport = MockTransport::failing(TransportError::Network("offline".into()));
        let client = ApiClient::new(BASE, &transport);
        let result: Result<Value, ApiError> = block_on(client.contacts().list());
        assert!(matches!(result, Err(ApiError::Transport(TransportError::Network(_)))));
    }
}
