
#[cfg(debug_assertions)]
const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";  // Development URL when running locally

#[cfg(not(debug_assertions))]
const DEFAULT_API_URL: &str = "/api/v1";  // Production URL, same origin

const DEFAULT_LEAD_ENDPOINT: &str = "https://formsubmit.co/victor@opusbr.com";

pub const LEAD_SUBJECT: &str = "New Lead from ZielHub Website";

pub const WHATSAPP_URL: &str = "https://wa.me/5583991066066";

pub fn get_api_base_url() -> &'static str {
    option_env!("SITE_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn get_lead_endpoint() -> &'static str {
    option_env!("SITE_LEAD_ENDPOINT").unwrap_or(DEFAULT_LEAD_ENDPOINT)
}

pub fn get_google_tag_id() -> &'static str {
    option_env!("SITE_GOOGLE_TAG_ID").unwrap_or("AW-17774738308")
}

pub fn get_google_conversion_id() -> &'static str {
    option_env!("SITE_GOOGLE_CONVERSION_ID").unwrap_or("AW-17774738308/yxidCN3Vle8bEIT305tC")
}

pub fn get_meta_pixel_id() -> &'static str {
    option_env!("SITE_META_PIXEL_ID").unwrap_or("1205376682832142")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leads_go_to_the_activated_relay_unless_overridden() {
        match option_env!("SITE_LEAD_ENDPOINT") {
            Some(endpoint) => assert_eq!(get_lead_endpoint(), endpoint),
            None => assert_eq!(get_lead_endpoint(), "https://formsubmit.co/victor@opusbr.com"),
        }
    }
}
